use crate::ast::NamedType;
use crate::executable::Field;
use crate::executable::Selection;
use crate::executable::SelectionSet;
use crate::execution::directives::should_include;
use crate::execution::OperationContext;
use crate::execution::RequestContext;
use crate::Name;
use crate::Node;
use indexmap::IndexMap;

/// The fields selected under one response key.
///
/// Every [`Field`] node reached in a selection set that has this response key
/// (alias if present, else name) is a contributor, in the order they were reached
/// by the depth-first walk through fragments.
/// There is always at least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedField {
    response_key: Name,
    fields: Vec<Node<Field>>,
}

impl CollectedField {
    fn new(first: Node<Field>) -> Self {
        Self {
            response_key: first.response_key().clone(),
            fields: vec![first],
        }
    }

    /// The key of this entry in the response: the alias if there is one, or the field name
    pub fn response_key(&self) -> &Name {
        &self.response_key
    }

    /// The name of the first contributing field
    pub fn name(&self) -> &Name {
        &self.first().name
    }

    pub fn alias(&self) -> Option<&Name> {
        self.first().alias.as_ref()
    }

    /// The first contributing field.
    ///
    /// When contributors disagree on metadata (arguments, declaring type),
    /// this one is canonical.
    pub fn first(&self) -> &Node<Field> {
        // Indexing does not panic: a `CollectedField` is only created with a contributor
        &self.fields[0]
    }

    /// All contributing fields, in the order they were reached
    pub fn fields(&self) -> &[Node<Field>] {
        &self.fields
    }

    /// The type that declares the first contributing field, if known.
    ///
    /// Later contributors from fragments on other types do not override it.
    pub fn declaring_type(&self) -> Option<&NamedType> {
        self.first().declaring_type.as_ref()
    }

    /// The sub-selections of all contributors, concatenated in contributor order.
    ///
    /// This is what gets collected next, for the runtime type of this field’s value.
    pub fn selections(&self) -> impl Iterator<Item = &Selection> {
        self.fields
            .iter()
            .flat_map(|field| field.selection_set.selections.iter())
    }
}

/// Flatten `selection_set` into the fields to resolve on an object of type `runtime_type`.
///
/// This is [CollectFields()](https://spec.graphql.org/October2021/#CollectFields()):
/// fragment spreads and inline fragments whose type condition applies are expanded in place,
/// selections excluded by `@skip` or `@include` are dropped,
/// and fields sharing a response key are grouped into one [`CollectedField`]
/// at the position where that key was first seen.
///
/// `visited_fragments` lists fragments already being expanded by the caller:
/// spreads of those are ignored.
///
/// A spread of a fragment not defined in the document is ignored,
/// as is a spread of a fragment currently being expanded.
pub fn collect_fields(
    ctx: &OperationContext<'_>,
    runtime_type: &str,
    selection_set: &SelectionSet,
    visited_fragments: &[Name],
) -> Vec<CollectedField> {
    collect_fields_in(ctx, Some(runtime_type), selection_set, visited_fragments)
}

/// Like [`collect_fields`] but over any sequence of selections,
/// such as [`CollectedField::selections`].
///
/// With `runtime_type: None` the concrete type is not known yet,
/// and every type condition is considered to apply.
pub fn collect_fields_in<'a>(
    ctx: &OperationContext<'a>,
    runtime_type: Option<&str>,
    selections: impl IntoIterator<Item = &'a Selection>,
    visited_fragments: &'a [Name],
) -> Vec<CollectedField> {
    let mut visited_fragments: Vec<&Name> = visited_fragments.iter().collect();
    let mut grouped_fields = IndexMap::new();
    collect_fields_inner(
        ctx,
        runtime_type,
        selections,
        &mut visited_fragments,
        &mut grouped_fields,
    );
    grouped_fields.into_values().collect()
}

/// The response keys [`collect_fields_in`] would produce, in order
pub fn collect_response_keys(
    ctx: &OperationContext<'_>,
    runtime_type: Option<&str>,
    selection_set: &SelectionSet,
) -> Vec<Name> {
    collect_fields_in(ctx, runtime_type, selection_set, &[])
        .into_iter()
        .map(|field| field.response_key)
        .collect()
}

/// The response keys of the fields selected at the current position of a request:
/// under the current field if there is one, or at the root of the operation.
///
/// The runtime type is taken from the [`FieldContext`][crate::execution::FieldContext].
/// When it is not known, every type condition is considered to apply,
/// giving every key that some concrete type could produce.
///
/// # Panics
///
/// If `ctx` has no operation context.
pub fn collect_all_fields(ctx: &RequestContext<'_>) -> Vec<Name> {
    let operation = ctx.operation_context();
    let collected = if let Some(field) = ctx.field_context() {
        collect_fields_in(
            operation,
            field.runtime_type(),
            field.field().selections(),
            &[],
        )
    } else if let Some(op) = operation.operation() {
        collect_fields_in(operation, None, &op.selection_set, &[])
    } else {
        Vec::new()
    };
    collected
        .into_iter()
        .map(|field| field.response_key)
        .collect()
}

fn collect_fields_inner<'a>(
    ctx: &OperationContext<'a>,
    runtime_type: Option<&str>,
    selections: impl IntoIterator<Item = &'a Selection>,
    visited_fragments: &mut Vec<&'a Name>,
    grouped_fields: &mut IndexMap<Name, CollectedField>,
) {
    for selection in selections {
        if !should_include(selection.directives(), ctx.variable_values()) {
            tracing::trace!("selection excluded by @skip or @include: {selection:?}");
            continue;
        }
        match selection {
            Selection::Field(field) => {
                if let Some(collected) = grouped_fields.get_mut(field.response_key()) {
                    collected.fields.push(field.clone())
                } else {
                    grouped_fields.insert(
                        field.response_key().clone(),
                        CollectedField::new(field.clone()),
                    );
                }
            }
            Selection::FragmentSpread(spread) => {
                let fragment_name = &spread.fragment_name;
                if visited_fragments.contains(&fragment_name) {
                    tracing::debug!("ignoring cyclic spread of fragment `{fragment_name}`");
                    continue;
                }
                let Some(fragment) = ctx.fragment(fragment_name) else {
                    tracing::debug!("ignoring spread of undefined fragment `{fragment_name}`");
                    continue;
                };
                if !does_fragment_type_apply(ctx, runtime_type, fragment.type_condition()) {
                    continue;
                }
                visited_fragments.push(fragment_name);
                collect_fields_inner(
                    ctx,
                    runtime_type,
                    &fragment.selection_set,
                    visited_fragments,
                    grouped_fields,
                );
                visited_fragments.pop();
            }
            Selection::InlineFragment(inline) => {
                if let Some(condition) = &inline.type_condition {
                    if !does_fragment_type_apply(ctx, runtime_type, condition) {
                        continue;
                    }
                }
                collect_fields_inner(
                    ctx,
                    runtime_type,
                    &inline.selection_set,
                    visited_fragments,
                    grouped_fields,
                )
            }
        }
    }
}

fn does_fragment_type_apply(
    ctx: &OperationContext<'_>,
    runtime_type: Option<&str>,
    type_condition: &str,
) -> bool {
    let Some(runtime_type) = runtime_type else {
        return true;
    };
    let applies = ctx
        .type_relations()
        .does_fragment_type_apply(runtime_type, type_condition);
    if !applies {
        tracing::trace!("type condition `{type_condition}` does not apply to `{runtime_type}`");
    }
    applies
}

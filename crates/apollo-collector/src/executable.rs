//! Executable documents: operations and fragments made of selection sets.
//!
//! These types are the read-only input of [field collection][crate::execution].
//! A selection set is a tree of three kinds of nodes:
//! fields, named fragment spreads, and inline fragments.

use crate::ast::Directive;
use crate::ast::DirectiveList;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::Name;
use crate::Node;
use indexmap::IndexMap;

/// Executable definitions: operations and the fragments they may spread
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutableDocument {
    pub anonymous_operation: Option<Node<Operation>>,
    pub named_operations: IndexMap<Name, Node<Operation>>,
    pub fragments: IndexMap<Name, Node<Fragment>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub operation_type: OperationType,
    pub name: Option<Name>,
    pub directives: DirectiveList,
    pub selection_set: SelectionSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: DirectiveList,
    pub selection_set: SelectionSet,
}

/// An ordered list of selections.
///
/// Order is significant: it determines the order of response keys
/// in [collected fields][crate::execution::collect_fields].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Field(Node<Field>),
    FragmentSpread(Node<FragmentSpread>),
    InlineFragment(Node<InlineFragment>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    /// The object or interface type whose definition declares this field,
    /// if known.
    ///
    /// Two fields with the same response key selected in fragments on different
    /// concrete types have different declaring types.
    pub declaring_type: Option<NamedType>,
    pub directives: DirectiveList,
    pub selection_set: SelectionSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    pub directives: DirectiveList,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineFragment {
    /// `None` applies to any runtime type
    pub type_condition: Option<NamedType>,
    pub directives: DirectiveList,
    pub selection_set: SelectionSet,
}

/// A request error returned by [`ExecutableDocument::get_operation`]
///
/// If `get_operation`’s `name_request` argument was `Some`, this error indicates
/// that the document does not contain an operation with the requested name.
///
/// If `name_request` was `None`, the request is ambiguous
/// because the document contains multiple operations
/// (or zero, though the document would be invalid in that case).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe_operation_request(.name_request))]
#[non_exhaustive]
pub struct GetOperationError {
    pub name_request: Option<String>,
}

fn describe_operation_request(name_request: &Option<String>) -> String {
    match name_request {
        Some(name) => format!("no operation named `{name}` in the document"),
        None => "an operation name is required when the document \
                 does not contain exactly one operation"
            .to_owned(),
    }
}

impl ExecutableDocument {
    /// Create an empty document, to be filled programatically
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the relevant operation for a request, or a request error
    ///
    /// This is the [GetOperation()](https://spec.graphql.org/October2021/#GetOperation())
    /// algorithm in the _Executing Requests_ section of the GraphQL specification.
    pub fn get_operation(
        &self,
        name_request: Option<&str>,
    ) -> Result<&Node<Operation>, GetOperationError> {
        if let Some(name) = name_request {
            self.named_operations.get(name)
        } else if let Some(op) = &self.anonymous_operation {
            self.named_operations.is_empty().then_some(op)
        } else {
            self.named_operations
                .values()
                .next()
                .and_then(|op| (self.named_operations.len() == 1).then_some(op))
        }
        .ok_or_else(|| GetOperationError {
            name_request: name_request.map(ToOwned::to_owned),
        })
    }

    /// Insert the given operation in either `named_operations` or `anonymous_operation`
    /// as appropriate, and return the old operation (if any) with that name (or lack thereof).
    pub fn insert_operation(
        &mut self,
        operation: impl Into<Node<Operation>>,
    ) -> Option<Node<Operation>> {
        let operation = operation.into();
        if let Some(name) = &operation.name {
            self.named_operations.insert(name.clone(), operation)
        } else {
            self.anonymous_operation.replace(operation)
        }
    }

    /// Insert the given fragment, returning the previous one with the same name (if any)
    pub fn insert_fragment(
        &mut self,
        fragment: impl Into<Node<Fragment>>,
    ) -> Option<Node<Fragment>> {
        let fragment = fragment.into();
        self.fragments.insert(fragment.name.clone(), fragment)
    }

    pub fn with_operation(mut self, operation: impl Into<Node<Operation>>) -> Self {
        self.insert_operation(operation);
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<Node<Fragment>>) -> Self {
        self.insert_fragment(fragment);
        self
    }
}

impl Operation {
    pub fn new(operation_type: OperationType) -> Self {
        Self {
            operation_type,
            name: None,
            directives: DirectiveList::new(),
            selection_set: SelectionSet::new(),
        }
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set.push(selection);
        self
    }

    pub fn with_selections(
        mut self,
        selections: impl IntoIterator<Item = impl Into<Selection>>,
    ) -> Self {
        self.selection_set.extend(selections);
        self
    }
}

impl Fragment {
    pub fn new(name: Name, type_condition: NamedType) -> Self {
        Self {
            name,
            type_condition,
            directives: DirectiveList::new(),
            selection_set: SelectionSet::new(),
        }
    }

    pub fn type_condition(&self) -> &NamedType {
        &self.type_condition
    }

    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set.push(selection);
        self
    }

    pub fn with_selections(
        mut self,
        selections: impl IntoIterator<Item = impl Into<Selection>>,
    ) -> Self {
        self.selection_set.extend(selections);
        self
    }
}

impl SelectionSet {
    /// Create a new, empty selection set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, selection: impl Into<Selection>) {
        self.selections.push(selection.into())
    }

    pub fn extend(&mut self, selections: impl IntoIterator<Item = impl Into<Selection>>) {
        self.selections
            .extend(selections.into_iter().map(|sel| sel.into()))
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Selection;
    type IntoIter = std::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.selections.iter()
    }
}

impl<S: Into<Selection>> FromIterator<S> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Selection {
    pub fn directives(&self) -> &DirectiveList {
        match self {
            Self::Field(sel) => &sel.directives,
            Self::FragmentSpread(sel) => &sel.directives,
            Self::InlineFragment(sel) => &sel.directives,
        }
    }

    pub fn as_field(&self) -> Option<&Node<Field>> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_fragment_spread(&self) -> Option<&Node<FragmentSpread>> {
        if let Self::FragmentSpread(spread) = self {
            Some(spread)
        } else {
            None
        }
    }
}

impl From<Node<Field>> for Selection {
    fn from(node: Node<Field>) -> Self {
        Self::Field(node)
    }
}

impl From<Node<InlineFragment>> for Selection {
    fn from(node: Node<InlineFragment>) -> Self {
        Self::InlineFragment(node)
    }
}

impl From<Node<FragmentSpread>> for Selection {
    fn from(node: Node<FragmentSpread>) -> Self {
        Self::FragmentSpread(node)
    }
}

impl From<Field> for Selection {
    fn from(value: Field) -> Self {
        Self::Field(Node::new(value))
    }
}

impl From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(Node::new(value))
    }
}

impl From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Self::FragmentSpread(Node::new(value))
    }
}

impl Field {
    /// Create a new leaf field with the given name
    pub fn new(name: Name) -> Self {
        Field {
            alias: None,
            name,
            declaring_type: None,
            directives: DirectiveList::new(),
            selection_set: SelectionSet::new(),
        }
    }

    pub fn with_alias(mut self, alias: Name) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Record the object or interface type that declares this field
    pub fn declared_on(mut self, declaring_type: NamedType) -> Self {
        self.declaring_type = Some(declaring_type);
        self
    }

    pub fn with_directive(mut self, directive: impl Into<Node<Directive>>) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_directives(
        mut self,
        directives: impl IntoIterator<Item = impl Into<Node<Directive>>>,
    ) -> Self {
        self.directives.extend(directives);
        self
    }

    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set.push(selection);
        self
    }

    pub fn with_selections(
        mut self,
        selections: impl IntoIterator<Item = impl Into<Selection>>,
    ) -> Self {
        self.selection_set.extend(selections);
        self
    }

    /// Returns the response key for this field: the alias if there is one, or the name
    pub fn response_key(&self) -> &Name {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

impl InlineFragment {
    pub fn with_type_condition(type_condition: NamedType) -> Self {
        Self {
            type_condition: Some(type_condition),
            directives: DirectiveList::new(),
            selection_set: SelectionSet::new(),
        }
    }

    pub fn without_type_condition() -> Self {
        Self {
            type_condition: None,
            directives: DirectiveList::new(),
            selection_set: SelectionSet::new(),
        }
    }

    pub fn with_directive(mut self, directive: impl Into<Node<Directive>>) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set.push(selection);
        self
    }

    pub fn with_selections(
        mut self,
        selections: impl IntoIterator<Item = impl Into<Selection>>,
    ) -> Self {
        self.selection_set.extend(selections);
        self
    }
}

impl FragmentSpread {
    pub fn new(fragment_name: Name) -> Self {
        Self {
            fragment_name,
            directives: DirectiveList::new(),
        }
    }

    pub fn with_directive(mut self, directive: impl Into<Node<Directive>>) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn fragment_def<'a>(&self, document: &'a ExecutableDocument) -> Option<&'a Node<Fragment>> {
        document.fragments.get(&self.fragment_name)
    }
}

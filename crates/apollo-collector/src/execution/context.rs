use crate::ast::NamedType;
use crate::executable::ExecutableDocument;
use crate::executable::Fragment;
use crate::executable::GetOperationError;
use crate::executable::Operation;
use crate::execution::collect::collect_fields_in;
use crate::execution::CollectedField;
use crate::execution::JsonMap;
use crate::schema::TypeRelations;
use crate::Node;
use std::fmt;

/// Everything field collection reads for one request:
/// the document, the operation being executed, coerced variable values,
/// and the type relationships used to match fragment type conditions.
///
/// It is never mutated by collection and can be shared between threads
/// resolving sibling fields concurrently.
#[derive(Clone)]
pub struct OperationContext<'a> {
    document: &'a ExecutableDocument,
    operation: Option<&'a Node<Operation>>,
    variable_values: JsonMap,
    type_relations: &'a dyn TypeRelations,
}

/// The field being resolved, as seen by a resolver
#[derive(Debug, Clone)]
pub struct FieldContext<'a> {
    field: &'a CollectedField,
    runtime_type: Option<NamedType>,
}

/// Request-scoped state threaded explicitly through resolvers.
///
/// It carries the [`OperationContext`] of the request
/// and, below the root, the [`FieldContext`] of the field being resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    operation: Option<&'a OperationContext<'a>>,
    field: Option<&'a FieldContext<'a>>,
}

impl<'a> OperationContext<'a> {
    /// Create a context for `document` without variable values.
    ///
    /// If the document contains exactly one operation, it is selected.
    /// Use [`operation_name`][Self::operation_name] to select another one.
    pub fn new(document: &'a ExecutableDocument, type_relations: &'a dyn TypeRelations) -> Self {
        Self {
            document,
            operation: document.get_operation(None).ok(),
            variable_values: JsonMap::new(),
            type_relations,
        }
    }

    /// Set the coerced variable values of the request
    pub fn variables(mut self, variable_values: JsonMap) -> Self {
        self.variable_values = variable_values;
        self
    }

    /// Select the operation to execute,
    /// following [GetOperation()](https://spec.graphql.org/October2021/#GetOperation())
    pub fn operation_name(mut self, name_request: Option<&str>) -> Result<Self, GetOperationError> {
        self.operation = Some(self.document.get_operation(name_request)?);
        Ok(self)
    }

    pub fn document(&self) -> &'a ExecutableDocument {
        self.document
    }

    /// The selected operation, if any
    pub fn operation(&self) -> Option<&'a Node<Operation>> {
        self.operation
    }

    pub fn variable_values(&self) -> &JsonMap {
        &self.variable_values
    }

    pub fn type_relations(&self) -> &'a dyn TypeRelations {
        self.type_relations
    }

    /// Look up a fragment definition of the document by name
    pub fn fragment(&self, name: &str) -> Option<&'a Node<Fragment>> {
        self.document.fragments.get(name)
    }
}

impl fmt::Debug for OperationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationContext")
            .field("operation", &self.operation.and_then(|op| op.name.as_ref()))
            .field("variable_values", &self.variable_values)
            .finish_non_exhaustive()
    }
}

impl<'a> FieldContext<'a> {
    /// Context for resolving `field`, whose value has not been resolved yet
    pub fn new(field: &'a CollectedField) -> Self {
        Self {
            field,
            runtime_type: None,
        }
    }

    /// Record the concrete object type of the field’s resolved value
    pub fn with_runtime_type(mut self, runtime_type: NamedType) -> Self {
        self.runtime_type = Some(runtime_type);
        self
    }

    pub fn field(&self) -> &'a CollectedField {
        self.field
    }

    pub fn runtime_type(&self) -> Option<&str> {
        self.runtime_type.as_deref()
    }
}

impl<'a> RequestContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation_context(mut self, operation: &'a OperationContext<'a>) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn has_operation_context(&self) -> bool {
        self.operation.is_some()
    }

    /// Returns the operation context of this request.
    ///
    /// # Panics
    ///
    /// If [`with_operation_context`][Self::with_operation_context] was not called.
    /// Field collection cannot happen outside of an operation,
    /// so this is a bug in the caller.
    pub fn operation_context(&self) -> &'a OperationContext<'a> {
        match self.operation {
            Some(operation) => operation,
            None => panic!(
                "missing operation context: \
                 RequestContext::with_operation_context was not called"
            ),
        }
    }

    pub fn with_field_context(mut self, field: &'a FieldContext<'a>) -> Self {
        self.field = Some(field);
        self
    }

    pub fn field_context(&self) -> Option<&'a FieldContext<'a>> {
        self.field
    }

    /// Collect the fields to resolve on an object of type `runtime_type`:
    /// the merged sub-selections of the current field,
    /// or the root selection set of the operation when there is no current field.
    ///
    /// # Panics
    ///
    /// If there is no operation context.
    pub fn collect_fields(&self, runtime_type: &str) -> Vec<CollectedField> {
        let operation = self.operation_context();
        if let Some(field) = self.field {
            collect_fields_in(operation, Some(runtime_type), field.field().selections(), &[])
        } else if let Some(op) = operation.operation() {
            collect_fields_in(operation, Some(runtime_type), &op.selection_set, &[])
        } else {
            tracing::debug!("no operation selected, collecting no fields");
            Vec::new()
        }
    }
}

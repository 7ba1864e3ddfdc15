//! APIs related to [executing a GraphQL request][execution]:
//! collecting the fields of a selection set for a runtime object type.
//!
//! An execution engine calls [`collect_fields`] once per object being resolved,
//! with that object’s selection set and concrete type.
//! It then resolves each [`CollectedField`] in order, and recurs into
//! [`CollectedField::selections`] once the concrete type of the field’s value is known.
//!
//! [execution]: https://spec.graphql.org/October2021/#sec-Execution

mod collect;
mod context;
mod directives;

pub use self::collect::collect_all_fields;
pub use self::collect::collect_fields;
pub use self::collect::collect_fields_in;
pub use self::collect::collect_response_keys;
pub use self::collect::CollectedField;
pub use self::context::FieldContext;
pub use self::context::OperationContext;
pub use self::context::RequestContext;
pub use self::directives::should_include;
/// Re-export of the version of the `serde_json_bytes` crate used for [`JsonValue`] and [`JsonMap`]
pub use serde_json_bytes;

/// A JSON-compatible dynamically-typed value.
///
/// Note: [`serde_json_bytes::Value`] is similar
/// to [`serde_json::Value`][serde_json_bytes::serde_json::Value]
/// but uses its reference-counted [`ByteString`][serde_json_bytes::ByteString]
/// for string values and map keys.
pub type JsonValue = serde_json_bytes::Value;

/// A JSON-compatible object/map with string keys and dynamically-typed values.
///
/// Coerced [variable values](https://spec.graphql.org/October2021/#CoerceVariableValues())
/// are given to [`OperationContext`] in this form.
pub type JsonMap = serde_json_bytes::Map<serde_json_bytes::ByteString, JsonValue>;

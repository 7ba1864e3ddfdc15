//! Field collection for GraphQL execution.
//!
//! Given an [`ExecutableDocument`], the selection set of an object being resolved,
//! and the concrete (runtime) type of that object,
//! [`collect_fields`][execution::collect_fields] produces the ordered list of fields
//! to resolve: fragments that apply to the runtime type are expanded in place,
//! selections excluded by `@skip` or `@include` are dropped,
//! and fields sharing a response key are grouped together.
//!
//! ```
//! use apollo_collector::executable::{Field, InlineFragment, Operation};
//! use apollo_collector::execution::{collect_fields, OperationContext};
//! use apollo_collector::schema::{ObjectType, Schema};
//! use apollo_collector::{name, ExecutableDocument};
//! use apollo_collector::ast::OperationType;
//!
//! let schema = Schema::new()
//!     .with_object(ObjectType::new(name!("Cat")))
//!     .with_object(ObjectType::new(name!("Dog")));
//! let document = ExecutableDocument::new().with_operation(
//!     Operation::new(OperationType::Query)
//!         .with_selection(Field::new(name!("name")))
//!         .with_selection(
//!             InlineFragment::with_type_condition(name!("Dog"))
//!                 .with_selection(Field::new(name!("barkVolume"))),
//!         ),
//! );
//! let ctx = OperationContext::new(&document, &schema);
//! let selection_set = &ctx.operation().unwrap().selection_set;
//!
//! let keys: Vec<_> = collect_fields(&ctx, "Dog", selection_set, &[])
//!     .iter()
//!     .map(|field| field.response_key().as_str().to_owned())
//!     .collect();
//! assert_eq!(keys, ["name", "barkVolume"]);
//! ```

#[macro_use]
mod name;
pub mod ast;
pub mod executable;
pub mod execution;
mod node;
pub mod schema;

pub use self::executable::ExecutableDocument;
pub use self::name::InvalidNameError;
pub use self::name::Name;
pub use self::node::Node;
pub use self::schema::Schema;

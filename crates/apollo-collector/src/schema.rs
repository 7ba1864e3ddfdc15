//! Type-relationship metadata used to decide whether a fragment applies
//! to a runtime object type.
//!
//! Building and validating a full schema is out of scope for this crate.
//! [`Schema`] only records what [`DoesFragmentTypeApply()`][spec] needs:
//! which names are object, interface, or union types,
//! which interfaces each object type implements,
//! and which object types are members of each union.
//!
//! [spec]: https://spec.graphql.org/October2021/#DoesFragmentTypeApply()

use crate::ast::NamedType;
use crate::Name;
use crate::Node;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Answers whether a fragment type condition applies to a runtime object type.
///
/// The collector only needs this yes/no oracle.
/// [`Schema`] implements it from object, interface, and union definitions,
/// and execution engines with their own type system can implement it directly.
pub trait TypeRelations: Send + Sync {
    /// Returns whether `type_condition` is satisfied by objects of type `object_type`:
    ///
    /// * the condition names the object type itself
    /// * the condition names an interface that the object type implements
    /// * the condition names a union that the object type is a member of
    fn does_fragment_type_apply(&self, object_type: &str, type_condition: &str) -> bool;
}

/// The type definitions relevant to fragment type conditions, by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub types: IndexMap<NamedType, ExtendedType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendedType {
    Object(Node<ObjectType>),
    Interface(Node<InterfaceType>),
    Union(Node<UnionType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: Name,
    /// Every interface this object implements, including interfaces
    /// implemented through other interfaces.
    pub implements_interfaces: IndexSet<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: Name,
    pub implements_interfaces: IndexSet<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub name: Name,
    /// Names of member object types
    pub members: IndexSet<Name>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, object: impl Into<Node<ObjectType>>) -> Self {
        let object = object.into();
        self.types
            .insert(object.name.clone(), ExtendedType::Object(object));
        self
    }

    pub fn with_interface(mut self, interface: impl Into<Node<InterfaceType>>) -> Self {
        let interface = interface.into();
        self.types
            .insert(interface.name.clone(), ExtendedType::Interface(interface));
        self
    }

    pub fn with_union(mut self, union_: impl Into<Node<UnionType>>) -> Self {
        let union_ = union_.into();
        self.types
            .insert(union_.name.clone(), ExtendedType::Union(union_));
        self
    }

    /// Returns the object type with the given name, if it is defined
    pub fn get_object(&self, name: &str) -> Option<&Node<ObjectType>> {
        if let Some(ExtendedType::Object(def)) = self.types.get(name) {
            Some(def)
        } else {
            None
        }
    }

    /// Returns whether the type `name` is an interface or union type
    pub fn is_abstract_type(&self, name: &str) -> bool {
        matches!(
            self.types.get(name),
            Some(ExtendedType::Interface(_) | ExtendedType::Union(_))
        )
    }

    /// Returns the names of object types that satisfy `type_condition`, in definition order
    pub fn possible_types<'a>(&'a self, type_condition: &'a str) -> impl Iterator<Item = &'a Name> {
        self.types.values().filter_map(move |ty| match ty {
            ExtendedType::Object(def)
                if self.does_fragment_type_apply(&def.name, type_condition) =>
            {
                Some(&def.name)
            }
            _ => None,
        })
    }
}

impl TypeRelations for Schema {
    /// <https://spec.graphql.org/October2021/#DoesFragmentTypeApply()>
    fn does_fragment_type_apply(&self, object_type: &str, type_condition: &str) -> bool {
        if type_condition == object_type {
            return true;
        }
        match self.types.get(type_condition) {
            Some(ExtendedType::Interface(_)) => self
                .get_object(object_type)
                .is_some_and(|def| def.implements_interfaces.contains(type_condition)),
            Some(ExtendedType::Union(def)) => def.members.contains(object_type),
            // A different object type, or undefined: validation should have caught the latter
            Some(ExtendedType::Object(_)) | None => false,
        }
    }
}

impl ExtendedType {
    pub fn name(&self) -> &Name {
        match self {
            Self::Object(def) => &def.name,
            Self::Interface(def) => &def.name,
            Self::Union(def) => &def.name,
        }
    }
}

impl ObjectType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            implements_interfaces: IndexSet::new(),
        }
    }

    pub fn implements(mut self, interface: Name) -> Self {
        self.implements_interfaces.insert(interface);
        self
    }
}

impl InterfaceType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            implements_interfaces: IndexSet::new(),
        }
    }

    pub fn implements(mut self, interface: Name) -> Self {
        self.implements_interfaces.insert(interface);
        self
    }
}

impl UnionType {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            members: IndexSet::new(),
        }
    }

    pub fn member(mut self, object_type: Name) -> Self {
        self.members.insert(object_type);
        self
    }
}

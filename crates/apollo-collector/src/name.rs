use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

/// Create a [`Name`] from a string literal or identifier, checked for validity at compile time.
///
/// A `Name` created this way does not own allocated heap memory or a reference counter,
/// so cloning it is extremely cheap.
///
/// # Examples
///
/// ```
/// use apollo_collector::name;
///
/// assert_eq!(name!("Query").as_str(), "Query");
/// assert_eq!(name!(Query).as_str(), "Query");
/// ```
///
/// ```compile_fail
/// # use apollo_collector::name;
/// let invalid = name!("è_é");
/// ```
#[macro_export]
macro_rules! name {
    ($value: ident) => {
        $crate::name!(stringify!($value))
    };
    ($value: expr) => {{
        const _: () = { assert!($crate::Name::valid_syntax($value)) };
        $crate::Name::new_static_unchecked($value)
    }};
}

/// A GraphQL identifier
///
/// Like [`Node`][crate::Node], this string type has cheap `Clone`.
/// Internally the string value is either an atomically-reference counted `Arc<str>`
/// or a `&'static str` borrow that lives until the end of the program.
#[derive(Clone)]
pub struct Name(Repr);

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    Heap(Arc<str>),
}

/// Tried to create a [`Name`] from a string that is not in valid
/// [GraphQL name](https://spec.graphql.org/draft/#sec-Names) syntax.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("`{name}` is not a valid GraphQL name")]
pub struct InvalidNameError {
    pub name: String,
}

impl Name {
    /// Create a new `Name`, checking its syntax
    pub fn new(value: &str) -> Result<Self, InvalidNameError> {
        if Self::valid_syntax(value) {
            Ok(Self::new_unchecked(value))
        } else {
            Err(InvalidNameError {
                name: value.to_owned(),
            })
        }
    }

    /// Create a new `Name` without checking its syntax
    ///
    /// Names are not validated further down the line, so an invalid name
    /// only surfaces as a mismatch when compared to other names.
    pub fn new_unchecked(value: &str) -> Self {
        Self(Repr::Heap(value.into()))
    }

    /// Create a new `Name` from a string with static lifetime, without checking its syntax.
    ///
    /// Prefer the [`name!`][crate::name!] macro, which checks syntax at compile time.
    pub const fn new_static_unchecked(value: &'static str) -> Self {
        Self(Repr::Static(value))
    }

    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Static(value) => value,
            Repr::Heap(value) => value,
        }
    }

    /// Returns whether `value` matches the GraphQL `Name` syntax:
    /// a letter or underscore followed by letters, digits, or underscores.
    pub const fn valid_syntax(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.is_empty() || !is_name_start(bytes[0]) {
            return false;
        }
        let mut i = 1;
        while i < bytes.len() {
            if !is_name_continue(bytes[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

const fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

const fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl std::ops::Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match `str as Hash` for the `Borrow<str>` impl
        self.as_str().hash(state)
    }
}

impl Eq for Name {}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&'_ str> for Name {
    fn eq(&self, other: &&'_ str) -> bool {
        self.as_str() == *other
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl TryFrom<&str> for Name {
    type Error = InvalidNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Name {
    type Error = InvalidNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl serde::Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_syntax() {
        assert!(Name::valid_syntax("a"));
        assert!(Name::valid_syntax("_"));
        assert!(Name::valid_syntax("__typename"));
        assert!(Name::valid_syntax("fieldA1"));
        assert!(!Name::valid_syntax(""));
        assert!(!Name::valid_syntax("1field"));
        assert!(!Name::valid_syntax("field alias"));
        assert!(!Name::valid_syntax("è_é"));
    }

    #[test]
    fn static_and_heap_names_compare_equal() {
        let heap = Name::new("Query").unwrap();
        let stat = name!(Query);
        assert_eq!(heap, stat);
        assert_eq!(heap, "Query");

        let mut set = std::collections::HashSet::new();
        set.insert(heap);
        assert!(set.contains("Query"));
        assert!(set.contains(&stat));
    }

    #[test]
    fn invalid_name_error() {
        let err = Name::new("field alias").unwrap_err();
        assert_eq!(err.to_string(), "`field alias` is not a valid GraphQL name");
    }
}

//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. The backend assigns
//! opaque string identifiers, so IDs wrap `String` rather than an integer.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use estoca_core::define_id;
/// define_id!(HouseId);
/// define_id!(ProductId);
///
/// let house_id = HouseId::new("63f2a1");
/// let product_id = ProductId::new("63f2a1");
///
/// // These are different types, so this won't compile:
/// // let _: HouseId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(HouseId);
define_id!(ProductId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_construction() {
        let id = HouseId::new("abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.into_inner(), "abc-123");
    }

    #[test]
    fn test_display() {
        let id = ProductId::new("p-42");
        assert_eq!(format!("{id}"), "p-42");
    }

    #[test]
    fn test_from_conversions() {
        let a = HouseId::from("x");
        let b = HouseId::from("x".to_owned());
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = HouseId::new("63f2a1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"63f2a1\"");

        let parsed: HouseId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}

//! Newtype IDs for type-safe entity references.
//!
//! Saleor identifies every node with an opaque, stable global ID string
//! (base64 of `Type:pk`). The dashboard never inspects these strings; it only
//! passes them back to the API. Use the `define_id!` macro to create wrappers
//! that prevent accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use saleor_dashboard_core::define_id;
/// define_id!(ShopId);
/// define_id!(ChannelId);
///
/// let shop_id = ShopId::new("U2hvcDox");
/// let channel_id = ChannelId::new("U2hvcDox");
///
/// // These are different types, so this won't compile:
/// // let _: ShopId = channel_id;
/// assert_eq!(shop_id.as_str(), channel_id.as_str());
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
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from an opaque global ID string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the underlying ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the ID string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
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

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define catalogue entity IDs
define_id!(ProductId);
define_id!(VariantId);
define_id!(ProductTypeId);
define_id!(AttributeId);
define_id!(AttributeValueId);
define_id!(CategoryId);
define_id!(CollectionId);
define_id!(ImageId);
define_id!(WarehouseId);
define_id!(StockId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_transparent_on_the_wire() {
        let id = ProductId::new("UHJvZHVjdDo3Mg==");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"UHJvZHVjdDo3Mg==\"");

        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display_is_the_raw_string() {
        let id = WarehouseId::from("V2FyZWhvdXNlOjE=");
        assert_eq!(id.to_string(), "V2FyZWhvdXNlOjE=");
        assert_eq!(String::from(id), "V2FyZWhvdXNlOjE=");
    }
}

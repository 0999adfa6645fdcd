//! Private metadata lookups.

catalogue_query! {
    /// A user's private metadata.
    UserWithMetadata {
        key: "user-private-metadata",
        operation: "getUserPrivateMetadata",
        source: "queries/user_private_metadata.graphql",
        fragments: [],
        module: user_with_metadata,
    }
}

catalogue_query! {
    /// A product's private metadata.
    ProductPrivateMetadata {
        key: "product-private-metadata",
        operation: "getProductPrivateMetadata",
        source: "queries/product_private_metadata.graphql",
        fragments: [],
        module: product_private_metadata,
    }
}

/// `{ privateMetadata { key value } }` on any object.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateMetadata {
    pub private_metadata: saleor_dashboard_core::MetadataMap,
}

pub mod user_with_metadata {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::UserId;

    use super::PrivateMetadata;
    use crate::saleor::catalogue::CatalogueVariables;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: UserId,
    }

    impl CatalogueVariables for Variables {
        fn example() -> Self {
            Self {
                id: UserId::new("VXNlcjox"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub user: Option<PrivateMetadata>,
    }
}

pub mod product_private_metadata {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::ProductId;

    use super::PrivateMetadata;
    use crate::saleor::catalogue::CatalogueVariables;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: ProductId,
    }

    impl CatalogueVariables for Variables {
        fn example() -> Self {
            Self {
                id: ProductId::new("UHJvZHVjdDox"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub product: Option<PrivateMetadata>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saleor::catalogue::CatalogueQuery;

    #[test]
    fn test_user_metadata_response() {
        let data: user_with_metadata::ResponseData = serde_json::from_value(serde_json::json!({
            "user": {"privateMetadata": [{"key": "erp.id", "value": "42"}]}
        }))
        .expect("deserialize");
        let user = data.user.expect("user");
        assert_eq!(user.private_metadata.get("erp.id"), Some("42"));
    }

    #[test]
    fn test_missing_product_is_none() {
        let data: product_private_metadata::ResponseData =
            serde_json::from_value(serde_json::json!({"product": null})).expect("deserialize");
        assert!(data.product.is_none());
    }

    #[test]
    fn test_wire_names_keep_their_casing() {
        assert_eq!(UserWithMetadata::OPERATION_NAME, "getUserPrivateMetadata");
        assert!(UserWithMetadata::document().starts_with("query getUserPrivateMetadata("));
        assert_eq!(
            ProductPrivateMetadata::OPERATION_NAME,
            "getProductPrivateMetadata"
        );
    }
}

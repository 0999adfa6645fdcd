//! Product variant queries.

use crate::saleor::fragments::{PRODUCT_VARIANT, PRODUCT_VARIANT_ATTRIBUTES, WAREHOUSE};

catalogue_query! {
    /// A variant with its attributes, stock and parent product.
    ProductVariantDetails {
        key: "product-variant-details",
        operation: "ProductVariantDetails",
        source: "queries/product_variant_details.graphql",
        fragments: [PRODUCT_VARIANT],
        module: product_variant_details,
    }
}

catalogue_query! {
    /// What the "create variant" form needs from the parent product.
    ProductVariantCreateData {
        key: "product-variant-create-data",
        operation: "ProductVariantCreateData",
        source: "queries/product_variant_create_data.graphql",
        fragments: [],
        module: product_variant_create_data,
    }
}

catalogue_query! {
    /// Attributes and warehouses for the bulk variant creator.
    CreateMultipleVariantsData {
        key: "create-multiple-variants-data",
        operation: "CreateMultipleVariantsData",
        source: "queries/create_multiple_variants_data.graphql",
        fragments: [PRODUCT_VARIANT_ATTRIBUTES, WAREHOUSE],
        module: create_multiple_variants_data,
    }
}

catalogue_query! {
    /// How many variants already use a SKU.
    ProductVariantsSkus {
        key: "product-variants-skus",
        operation: "ProductVariantsSkus",
        source: "queries/product_variants_skus.graphql",
        fragments: [],
        module: product_variants_skus,
    }
}

pub mod product_variant_details {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::VariantId;

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::fragments::ProductVariant;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: VariantId,
    }

    impl CatalogueVariables for Variables {
        fn example() -> Self {
            Self {
                id: VariantId::new("UHJvZHVjdFZhcmlhbnQ6MQ=="),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_variant: Option<ProductVariant>,
    }
}

pub mod product_variant_create_data {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::{ProductId, ProductTypeId};

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::fragments::{SiblingVariant, VariantAttribute};
    use crate::saleor::types::{Image, Thumbnail};

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        /// Parent product.
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
        pub product: Option<ParentProduct>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ParentProduct {
        pub id: ProductId,
        pub images: Option<Vec<Option<Image>>>,
        pub name: String,
        pub product_type: ParentProductType,
        pub thumbnail: Option<Thumbnail>,
        pub variants: Option<Vec<Option<SiblingVariant>>>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ParentProductType {
        pub id: ProductTypeId,
        pub variant_attributes: Option<Vec<Option<VariantAttribute>>>,
    }

    impl ParentProductType {
        /// Variant attributes the form must ask for.
        pub fn required_attributes(&self) -> impl Iterator<Item = &VariantAttribute> {
            self.variant_attributes
                .iter()
                .flatten()
                .flatten()
                .filter(|attribute| attribute.value_required.unwrap_or(false))
        }
    }
}

pub mod create_multiple_variants_data {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::ProductId;

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::fragments::{ProductVariantAttributes, Warehouse};
    use crate::saleor::types::Connection;

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
        pub product: Option<ProductVariantAttributes>,
        /// First 20 warehouses.
        pub warehouses: Option<Connection<Warehouse>>,
    }
}

pub mod product_variants_skus {
    use serde::{Deserialize, Serialize};

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::types::CountOnly;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        pub sku: String,
    }

    impl CatalogueVariables for Variables {
        fn example() -> Self {
            Self {
                sku: "JUICE-1L".to_string(),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_variants_skus: Option<CountOnly>,
    }

    impl ResponseData {
        /// Whether some variant already carries the SKU.
        #[must_use]
        pub fn is_taken(&self) -> bool {
            self.product_variants_skus
                .and_then(|count| count.total_count)
                .is_some_and(|n| n > 0)
        }
    }
}

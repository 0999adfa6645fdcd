//! Product list, detail and lookup queries.

use crate::saleor::fragments::{MONEY, PRODUCT_DETAILS, PRODUCT_SUMMARY, TAX_TYPE};

catalogue_query! {
    /// Options for the product list filter bar.
    InitialProductFilterData {
        key: "initial-product-filter-data",
        operation: "InitialProductFilterData",
        source: "queries/initial_product_filter_data.graphql",
        fragments: [],
        module: initial_product_filter_data,
    }
}

catalogue_query! {
    /// One page of the product list.
    ProductList {
        key: "product-list",
        operation: "ProductList",
        source: "queries/product_list.graphql",
        fragments: [PRODUCT_SUMMARY, MONEY],
        module: product_list,
    }
}

catalogue_query! {
    /// Number of products in the store.
    CountAllProducts {
        key: "count-all-products",
        operation: "CountAllProducts",
        source: "queries/count_all_products.graphql",
        fragments: [],
        module: count_all_products,
    }
}

catalogue_query! {
    /// A product with everything its detail page shows.
    ProductDetails {
        key: "product-details",
        operation: "ProductDetails",
        source: "queries/product_details.graphql",
        fragments: [PRODUCT_DETAILS, TAX_TYPE],
        module: product_details,
    }
}

catalogue_query! {
    /// One product image plus small thumbnails of the rest.
    ProductImageById {
        key: "product-image-by-id",
        operation: "ProductImageById",
        source: "queries/product_image_by_id.graphql",
        fragments: [],
        module: product_image_by_id,
    }
}

catalogue_query! {
    /// Names and default-variant SKUs for a set of products.
    ProductsSkus {
        key: "products-skus",
        operation: "getSkusFromProducts",
        source: "queries/products_skus.graphql",
        fragments: [],
        module: products_skus,
    }
}

pub mod initial_product_filter_data {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::{CategoryId, CollectionId, ProductTypeId};

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::types::{Attribute, CategoryRef, CollectionRef, Connection, ProductTypeRef};

    /// Filters currently applied, so their labels can be resolved.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        /// Selected categories.
        pub categories: Option<Vec<CategoryId>>,
        /// Selected collections.
        pub collections: Option<Vec<CollectionId>>,
        /// Selected product types.
        pub product_types: Option<Vec<ProductTypeId>>,
    }

    impl CatalogueVariables for Variables {
        fn example() -> Self {
            Self::default()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        /// Attributes filterable in the dashboard.
        pub attributes: Option<Connection<Attribute>>,
        pub categories: Option<Connection<CategoryRef>>,
        pub collections: Option<Connection<CollectionRef>>,
        pub product_types: Option<Connection<ProductTypeRef>>,
    }
}

pub mod product_list {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::{
        AttributeId, CategoryId, CollectionId, PageRequest, PaginationError, ProductId,
        ProductTypeId,
    };

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::fragments::{ProductPricing, ProductSummary};
    use crate::saleor::types::{JsonString, PagedConnection};

    /// Page, filter and sort order of the product list.
    ///
    /// Paging goes one way per request: `first`/`after` or `last`/`before`.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub first: Option<i64>,
        pub after: Option<String>,
        pub last: Option<i64>,
        pub before: Option<String>,
        pub filter: Option<ProductFilterInput>,
        pub sort: Option<ProductOrder>,
    }

    impl Variables {
        /// Unfiltered, unsorted page.
        #[must_use]
        pub fn new(page: PageRequest) -> Self {
            let (first, after, last, before) = page.into_parts();
            Self {
                first,
                after,
                last,
                before,
                filter: None,
                sort: None,
            }
        }

        /// Narrow the list.
        #[must_use]
        pub fn with_filter(mut self, filter: ProductFilterInput) -> Self {
            self.filter = Some(filter);
            self
        }

        /// Order the list.
        #[must_use]
        pub fn with_sort(mut self, sort: ProductOrder) -> Self {
            self.sort = Some(sort);
            self
        }

        /// The validated page this request asks for.
        ///
        /// # Errors
        ///
        /// Returns a [`PaginationError`] when both directions are mixed or no
        /// usable page size is given.
        pub fn page(&self) -> Result<PageRequest, PaginationError> {
            PageRequest::from_parts(
                self.first,
                self.after.clone(),
                self.last,
                self.before.clone(),
            )
        }
    }

    impl From<PageRequest> for Variables {
        fn from(page: PageRequest) -> Self {
            Self::new(page)
        }
    }

    impl CatalogueVariables for Variables {
        fn validate(&self) -> Result<(), PaginationError> {
            self.page().map(|_| ())
        }

        fn example() -> Self {
            Self::new(PageRequest::first(20))
        }
    }

    /// `ProductFilterInput`. Unset fields are left out of the request.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductFilterInput {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub is_published: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub collections: Option<Vec<CollectionId>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub categories: Option<Vec<CategoryId>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub has_category: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub attributes: Option<Vec<AttributeInput>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub stock_availability: Option<StockAvailability>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub product_types: Option<Vec<ProductTypeId>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub search: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub price: Option<PriceRangeInput>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub minimal_price: Option<PriceRangeInput>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub ids: Option<Vec<ProductId>>,
    }

    /// Attribute filter: products with any of `values` for attribute `slug`.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AttributeInput {
        pub slug: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub values: Option<Vec<String>>,
    }

    /// Inclusive price bounds.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
    pub struct PriceRangeInput {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub gte: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub lte: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum StockAvailability {
        InStock,
        OutOfStock,
    }

    /// `ProductOrder`: sort by a field, or by an attribute's values.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductOrder {
        pub direction: OrderDirection,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub attribute_id: Option<AttributeId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub field: Option<ProductOrderField>,
    }

    impl ProductOrder {
        /// Sort by a product field.
        #[must_use]
        pub const fn by(field: ProductOrderField, direction: OrderDirection) -> Self {
            Self {
                direction,
                attribute_id: None,
                field: Some(field),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum OrderDirection {
        Asc,
        Desc,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum ProductOrderField {
        Name,
        Price,
        MinimalPrice,
        Date,
        Type,
        Published,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub products: Option<PagedConnection<ProductListNode>>,
    }

    /// A list row: the product summary plus its price range.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductListNode {
        #[serde(flatten)]
        pub product: ProductSummary,
        pub pricing: Option<ProductPricing>,
        /// Private metadata serialized as a JSON object string.
        pub json_private_metadata: Option<JsonString>,
    }
}

pub mod count_all_products {
    use serde::{Deserialize, Serialize};

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::types::CountOnly;

    /// No arguments.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {}

    impl CatalogueVariables for Variables {
        fn example() -> Self {
            Self {}
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub products: Option<CountOnly>,
    }
}

pub mod product_details {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::ProductId;

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::fragments::{Product, TaxType};

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

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product: Option<Product>,
        /// Every tax type the store knows, for the tax picker.
        pub tax_types: Option<Vec<Option<TaxType>>>,
    }
}

pub mod product_image_by_id {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::{ImageId, ProductId};

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::types::Image;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub product_id: ProductId,
        pub image_id: ImageId,
    }

    impl CatalogueVariables for Variables {
        fn example() -> Self {
            Self {
                product_id: ProductId::new("UHJvZHVjdDox"),
                image_id: ImageId::new("UHJvZHVjdEltYWdlOjE="),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub product: Option<ImageProduct>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ImageProduct {
        pub id: ProductId,
        pub name: String,
        /// The requested image, `imageById` aliased.
        pub main_image: Option<Image>,
        /// Every image at 48px.
        pub images: Option<Vec<Option<Image>>>,
    }
}

pub mod products_skus {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::ProductId;

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::types::Connection;

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        /// `[ID]`: the list and its items are both nullable.
        pub ids: Option<Vec<Option<ProductId>>>,
    }

    impl CatalogueVariables for Variables {
        fn example() -> Self {
            Self {
                ids: Some(vec![Some(ProductId::new("UHJvZHVjdDox"))]),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub products: Option<Connection<SkuProduct>>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SkuProduct {
        pub name: String,
        pub default_variant: Option<DefaultVariantSku>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DefaultVariantSku {
        pub sku: Option<String>,
    }

    impl ResponseData {
        /// `(product name, default variant SKU)` pairs in API order.
        #[must_use]
        pub fn skus(&self) -> Vec<(&str, Option<&str>)> {
            self.products
                .iter()
                .flat_map(|connection| &connection.edges)
                .map(|edge| {
                    let sku = edge
                        .node
                        .default_variant
                        .as_ref()
                        .and_then(|variant| variant.sku.as_deref());
                    (edge.node.name.as_str(), sku)
                })
                .collect()
        }
    }
}

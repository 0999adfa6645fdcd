//! Catalogue entries.
//!
//! Each entry is a unit struct plus a snake_case module holding its
//! `Variables` and `ResponseData`, the same layout `graphql_client` derives.
//! Required arguments are plain fields; optional ones are `Option` and go out
//! as `null`, which the API reads as "no constraint".

mod attributes;
mod metadata;
mod product_types;
mod products;
mod variants;

pub use attributes::{GridAttributes, grid_attributes};
pub use metadata::{
    PrivateMetadata, ProductPrivateMetadata, UserWithMetadata, product_private_metadata,
    user_with_metadata,
};
pub use product_types::{
    ProductTypeByName, SearchProductTypes, product_type_by_name, search_product_types,
};
pub use products::{
    CountAllProducts, InitialProductFilterData, ProductDetails, ProductImageById, ProductList,
    ProductsSkus, count_all_products, initial_product_filter_data, product_details,
    product_image_by_id, product_list, products_skus,
};
pub use variants::{
    CreateMultipleVariantsData, ProductVariantCreateData, ProductVariantDetails,
    ProductVariantsSkus, create_multiple_variants_data, product_variant_create_data,
    product_variant_details, product_variants_skus,
};

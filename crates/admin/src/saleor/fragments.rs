//! Named fragments shared across the catalogue.
//!
//! Every fragment is defined once, in `graphql/fragments/`, and paired here
//! with the Rust shape its selection deserializes into. A query that spreads
//! a fragment lists the static in its `fragments` and gets the same text as
//! every other query using it.

use serde::{Deserialize, Serialize};

use saleor_dashboard_core::{
    MetadataMap, Money as MoneyAmount, PageInfo, PriceRange, ProductId, ProductTypeId, StockId,
    VariantId,
};

use super::document::Fragment;
use super::types::{
    AttributeValue, CategoryRef, CollectionRef, Image, JsonString, NamedNode, SelectedAttribute,
    Thumbnail, WarehouseRef,
};

// =============================================================================
// Fragment definitions
// =============================================================================

/// `PageInfoFragment on PageInfo`.
pub static PAGE_INFO: Fragment = Fragment {
    name: "PageInfoFragment",
    source: graphql_file!("fragments/page_info.graphql"),
    requires: &[],
};

/// `TaxTypeFragment on TaxType`.
pub static TAX_TYPE: Fragment = Fragment {
    name: "TaxTypeFragment",
    source: graphql_file!("fragments/tax_type.graphql"),
    requires: &[],
};

/// `Money on Money`.
pub static MONEY: Fragment = Fragment {
    name: "Money",
    source: graphql_file!("fragments/money.graphql"),
    requires: &[],
};

/// `ProductFragment on Product`: the list-row view of a product.
pub static PRODUCT_SUMMARY: Fragment = Fragment {
    name: "ProductFragment",
    source: graphql_file!("fragments/product_summary.graphql"),
    requires: &[],
};

/// `MetadataFragment on ObjectWithMetadata`.
pub static METADATA: Fragment = Fragment {
    name: "MetadataFragment",
    source: graphql_file!("fragments/metadata.graphql"),
    requires: &[],
};

/// `StockFragment on Stock`.
pub static STOCK: Fragment = Fragment {
    name: "StockFragment",
    source: graphql_file!("fragments/stock.graphql"),
    requires: &[],
};

/// `WeightFragment on Weight`.
pub static WEIGHT: Fragment = Fragment {
    name: "WeightFragment",
    source: graphql_file!("fragments/weight.graphql"),
    requires: &[],
};

/// `ProductVariantAttributesFragment on Product`.
pub static PRODUCT_VARIANT_ATTRIBUTES: Fragment = Fragment {
    name: "ProductVariantAttributesFragment",
    source: graphql_file!("fragments/product_variant_attributes.graphql"),
    requires: &[&MONEY],
};

/// `Product on Product`: the full detail view of a product.
pub static PRODUCT_DETAILS: Fragment = Fragment {
    name: "Product",
    source: graphql_file!("fragments/product_details.graphql"),
    requires: &[
        &PRODUCT_VARIANT_ATTRIBUTES,
        &METADATA,
        &TAX_TYPE,
        &STOCK,
        &WEIGHT,
    ],
};

/// `ProductVariant on ProductVariant`.
pub static PRODUCT_VARIANT: Fragment = Fragment {
    name: "ProductVariant",
    source: graphql_file!("fragments/product_variant.graphql"),
    requires: &[&METADATA, &STOCK, &WEIGHT],
};

/// `WarehouseFragment on Warehouse`.
pub static WAREHOUSE: Fragment = Fragment {
    name: "WarehouseFragment",
    source: graphql_file!("fragments/warehouse.graphql"),
    requires: &[],
};

/// Every fragment, for lint and listing.
pub static ALL: &[&Fragment] = &[
    &PAGE_INFO,
    &TAX_TYPE,
    &MONEY,
    &PRODUCT_SUMMARY,
    &METADATA,
    &STOCK,
    &WEIGHT,
    &PRODUCT_VARIANT_ATTRIBUTES,
    &PRODUCT_DETAILS,
    &PRODUCT_VARIANT,
    &WAREHOUSE,
];

// =============================================================================
// Fragment shapes
// =============================================================================

/// Selection of `TaxTypeFragment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxType {
    /// Human readable description.
    pub description: Option<String>,
    /// Tax code understood by the tax plugin.
    pub tax_code: Option<String>,
}

/// Selection of `Money`.
pub type Money = MoneyAmount;

/// Selection of `ProductFragment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Small image for list rows.
    pub thumbnail: Option<Thumbnail>,
    /// Whether the product can be bought.
    pub is_available: Option<bool>,
    /// Whether the product is published.
    pub is_published: bool,
    /// Product type.
    pub product_type: ProductTypeSummary,
}

/// Product type as selected by `ProductFragment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeSummary {
    /// Product type ID.
    pub id: ProductTypeId,
    /// Product type name.
    pub name: String,
    /// Whether products of this type have variants.
    pub has_variants: bool,
}

/// Selection of `MetadataFragment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Public metadata.
    pub metadata: MetadataMap,
    /// Private metadata.
    pub private_metadata: MetadataMap,
}

/// Selection of `StockFragment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    /// Stock ID.
    pub id: StockId,
    /// Quantity on hand.
    pub quantity: i64,
    /// Quantity reserved by orders.
    pub quantity_allocated: i64,
    /// Warehouse holding the stock.
    pub warehouse: WarehouseRef,
}

/// Selection of `WeightFragment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Weight unit (`KG`, `LB`, `OZ`, `G`).
    pub unit: String,
    /// Weight value.
    pub value: f64,
}

/// Pricing as selected by `ProductVariantAttributesFragment` and the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    /// Price range before discounts.
    pub price_range_undiscounted: Option<PriceRange>,
}

/// Variant attribute of a product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAttribute {
    /// Attribute ID.
    pub id: saleor_dashboard_core::AttributeId,
    /// Attribute name.
    pub name: Option<String>,
    /// Attribute slug, when selected.
    #[serde(default)]
    pub slug: Option<String>,
    /// Whether a value must be chosen, when selected.
    #[serde(default)]
    pub value_required: Option<bool>,
    /// Permitted values.
    pub values: Option<Vec<Option<AttributeValue>>>,
}

/// Selection of `ProductVariantAttributesFragment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantAttributes {
    /// Product ID.
    pub id: ProductId,
    /// Product-level attributes with their chosen values.
    pub attributes: Vec<SelectedAttribute>,
    /// Product type with its variant attributes.
    pub product_type: ProductTypeVariantAttributes,
    /// Undiscounted price range.
    pub pricing: Option<ProductPricing>,
}

/// Product type as selected by `ProductVariantAttributesFragment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeVariantAttributes {
    /// Product type ID.
    pub id: ProductTypeId,
    /// Attributes that distinguish variants.
    pub variant_attributes: Option<Vec<Option<VariantAttribute>>>,
}

/// Selection of `Product`.
///
/// Spreads `ProductVariantAttributesFragment` and `MetadataFragment`; the
/// server merges overlapping selections (`id`, `productType`), so the shape is
/// written out flat rather than nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product-level attributes with their chosen values.
    pub attributes: Vec<SelectedAttribute>,
    /// Undiscounted price range.
    pub pricing: Option<ProductPricing>,
    /// Public metadata.
    pub metadata: MetadataMap,
    /// Private metadata.
    pub private_metadata: MetadataMap,
    /// Product name.
    pub name: String,
    /// URL-safe slug.
    pub slug: String,
    /// Rich-text description.
    pub description_json: Option<JsonString>,
    /// SEO title.
    pub seo_title: Option<String>,
    /// SEO description.
    pub seo_description: Option<String>,
    /// Default variant.
    pub default_variant: Option<VariantRef>,
    /// Category.
    pub category: Option<CategoryRef>,
    /// Collections the product belongs to.
    pub collections: Option<Vec<Option<CollectionRef>>>,
    /// Whether taxes are charged.
    pub charge_taxes: bool,
    /// Whether the product can be bought.
    pub is_available: Option<bool>,
    /// Whether the product is published.
    pub is_published: bool,
    /// Tax type.
    pub tax_type: Option<TaxType>,
    /// Small image.
    pub thumbnail: Option<Thumbnail>,
    /// Gallery.
    pub images: Option<Vec<Option<Image>>>,
    /// Variants.
    pub variants: Option<Vec<Option<ProductDetailsVariant>>>,
    /// Product type, merged from both selections.
    pub product_type: ProductDetailsType,
    /// Shipping weight.
    pub weight: Option<Weight>,
}

/// A variant reference selecting only `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRef {
    /// Variant ID.
    pub id: VariantId,
}

/// Variant as selected by `Product`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Variant name.
    pub name: String,
    /// Margin percentage.
    pub margin: Option<i64>,
    /// Stock per warehouse.
    pub stocks: Option<Vec<Option<Stock>>>,
    /// Whether inventory is tracked.
    pub track_inventory: bool,
}

/// Product type as selected by `Product` (merged with the attributes fragment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsType {
    /// Product type ID.
    pub id: ProductTypeId,
    /// Product type name.
    pub name: String,
    /// Whether products of this type have variants.
    pub has_variants: bool,
    /// Attributes that distinguish variants.
    pub variant_attributes: Option<Vec<Option<VariantAttribute>>>,
}

/// Selection of `ProductVariant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Public metadata.
    pub metadata: MetadataMap,
    /// Private metadata.
    pub private_metadata: MetadataMap,
    /// Variant attributes with their chosen values.
    pub attributes: Vec<SelectedAttribute>,
    /// Images assigned to the variant.
    pub images: Option<Vec<Option<VariantImage>>>,
    /// Variant name.
    pub name: String,
    /// Parent product.
    pub product: VariantProduct,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Stock per warehouse.
    pub stocks: Option<Vec<Option<Stock>>>,
    /// Whether inventory is tracked.
    pub track_inventory: bool,
    /// Shipping weight.
    pub weight: Option<Weight>,
}

/// Image reference selecting `id` and `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantImage {
    /// Image ID.
    pub id: saleor_dashboard_core::ImageId,
    /// Image URL.
    pub url: String,
}

/// Parent product as selected by `ProductVariant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantProduct {
    /// Product ID.
    pub id: ProductId,
    /// Product gallery.
    pub images: Option<Vec<Option<Image>>>,
    /// Product name.
    pub name: String,
    /// Small image.
    pub thumbnail: Option<Thumbnail>,
    /// Sibling variants.
    pub variants: Option<Vec<Option<SiblingVariant>>>,
}

/// Sibling variant as selected by `ProductVariant` and the variant-create query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Variant name.
    pub name: String,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Variant images.
    pub images: Option<Vec<Option<VariantImage>>>,
}

/// Selection of `WarehouseFragment`.
pub type Warehouse = WarehouseRef;

/// Page info as selected by `PageInfoFragment`.
pub type PageInfoSelection = PageInfo;

/// Product-type reference with an `id` and `name`.
pub type ProductTypeName = NamedNode<ProductTypeId>;

//! Response node shapes shared by several catalogue entries.
//!
//! These mirror the selection sets in `graphql/` and are only ever
//! deserialized from API responses. Nullable schema fields are `Option`.

use serde::{Deserialize, Serialize};

use saleor_dashboard_core::{
    AttributeId, AttributeValueId, CategoryId, CollectionId, ImageId, PageInfo, ProductTypeId,
    WarehouseId,
};

// =============================================================================
// Custom scalar type aliases
// =============================================================================

/// `JSONString` scalar: JSON serialized into a string by the server.
pub type JsonString = String;

// =============================================================================
// Connections
// =============================================================================

/// A connection edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// The node at this edge.
    pub node: N,
}

/// A connection that only selects `edges`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<N> {
    /// Edges of this page.
    pub edges: Vec<Edge<N>>,
}

impl<N> Connection<N> {
    /// Unwrap the nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// A connection selecting `edges`, `pageInfo` and `totalCount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedConnection<N> {
    /// Edges of this page.
    pub edges: Vec<Edge<N>>,
    /// Cursor information.
    pub page_info: PageInfo,
    /// Size of the whole collection, when selected.
    #[serde(default)]
    pub total_count: Option<i64>,
}

impl<N> PagedConnection<N> {
    /// Unwrap the nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// A connection selecting only `totalCount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountOnly {
    /// Size of the whole collection.
    pub total_count: Option<i64>,
}

// =============================================================================
// Attributes
// =============================================================================

/// How an attribute's values are entered in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeInputType {
    /// Pick one value.
    Dropdown,
    /// Pick several values.
    Multiselect,
    /// Upload a file.
    File,
    /// Reference another object.
    Reference,
    /// Any input type this client does not know.
    #[serde(other)]
    Other,
}

/// A permitted attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Value ID.
    pub id: AttributeValueId,
    /// Display name.
    pub name: Option<String>,
    /// URL-safe slug.
    pub slug: Option<String>,
}

/// An attribute with its ordered set of permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute ID.
    pub id: AttributeId,
    /// Display name.
    pub name: Option<String>,
    /// URL-safe slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Input widget, when selected.
    #[serde(default)]
    pub input_type: Option<AttributeInputType>,
    /// Whether a value must be chosen, when selected.
    #[serde(default)]
    pub value_required: Option<bool>,
    /// Permitted values, in API order.
    #[serde(default)]
    pub values: Option<Vec<Option<AttributeValue>>>,
}

impl Attribute {
    /// Permitted values with nulls dropped.
    pub fn values(&self) -> impl Iterator<Item = &AttributeValue> {
        self.values.iter().flatten().flatten()
    }
}

/// An attribute together with the values chosen for an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAttribute {
    /// The attribute.
    pub attribute: Attribute,
    /// Values assigned to the object.
    pub values: Vec<Option<AttributeValue>>,
}

// =============================================================================
// Small nodes
// =============================================================================

/// A node that selects only `id` and `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedNode<I> {
    /// Node ID.
    pub id: I,
    /// Display name.
    pub name: String,
}

/// A category reference.
pub type CategoryRef = NamedNode<CategoryId>;

/// A collection reference.
pub type CollectionRef = NamedNode<CollectionId>;

/// A product type reference.
pub type ProductTypeRef = NamedNode<ProductTypeId>;

/// A thumbnail selecting only `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Image URL.
    pub url: String,
}

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image ID.
    pub id: ImageId,
    /// Alt text, when selected.
    #[serde(default)]
    pub alt: Option<String>,
    /// Position in the product gallery, when selected.
    #[serde(default)]
    pub sort_order: Option<i64>,
    /// Image URL.
    pub url: String,
}

/// A warehouse reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseRef {
    /// Warehouse ID.
    pub id: WarehouseId,
    /// Warehouse name.
    pub name: String,
}

//! The query catalogue.
//!
//! Every operation is a unit struct implementing [`CatalogueQuery`]. The
//! static [`CATALOGUE`] lists them by key for callers that only know an entry
//! by name (the CLI, the lint pass).

use graphql_client::GraphQLQuery;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use saleor_dashboard_core::PaginationError;

use super::SaleorError;
use super::lint::OperationKind;
use super::queries::{
    CountAllProducts, CreateMultipleVariantsData, GridAttributes, InitialProductFilterData,
    ProductDetails, ProductImageById, ProductList, ProductPrivateMetadata, ProductTypeByName,
    ProductVariantCreateData, ProductVariantDetails, ProductVariantsSkus, ProductsSkus,
    SearchProductTypes, UserWithMetadata,
};

/// Variables of a catalogue entry.
pub trait CatalogueVariables: Serialize + DeserializeOwned {
    /// Check argument combinations the schema alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns a [`PaginationError`] when paging arguments are inconsistent.
    fn validate(&self) -> Result<(), PaginationError> {
        Ok(())
    }

    /// A representative value, used for listing and shape checks.
    fn example() -> Self;
}

/// A query declared in the catalogue.
pub trait CatalogueQuery: GraphQLQuery<Variables: CatalogueVariables> + 'static {
    /// Stable kebab-case key.
    const KEY: &'static str;
    /// Operation name sent on the wire.
    const OPERATION_NAME: &'static str;
    /// Operation kind.
    const KIND: OperationKind = OperationKind::Query;

    /// Full document: fragments followed by the operation.
    fn document() -> &'static str;
}

/// Type-erased view of a catalogue entry.
#[derive(Debug, Clone, Copy)]
pub struct CatalogueEntry {
    /// Stable kebab-case key.
    pub key: &'static str,
    /// Operation name sent on the wire.
    pub operation_name: &'static str,
    /// Operation kind.
    pub kind: OperationKind,
    document: fn() -> &'static str,
    check: fn(&Value) -> Result<Value, SaleorError>,
    example: fn() -> Result<Value, serde_json::Error>,
}

impl CatalogueEntry {
    /// Erase a concrete query.
    #[must_use]
    pub const fn of<Q: CatalogueQuery>() -> Self {
        Self {
            key: Q::KEY,
            operation_name: Q::OPERATION_NAME,
            kind: Q::KIND,
            document: Q::document,
            check: check_variables::<Q>,
            example: example_variables::<Q>,
        }
    }

    /// Full document text.
    #[must_use]
    pub fn document(&self) -> &'static str {
        (self.document)()
    }

    /// Parse JSON variables into the entry's typed variables, validate them
    /// and serialize them back.
    ///
    /// The returned value carries only declared variables and known input
    /// fields; anything else in `variables` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SaleorError::Parse`] when the JSON does not match the
    /// variables shape, or [`SaleorError::Contract`] when validation fails.
    pub fn check(&self, variables: &Value) -> Result<Value, SaleorError> {
        (self.check)(variables)
    }

    /// Example variables, serialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the example fails to serialize.
    pub fn example(&self) -> Result<Value, serde_json::Error> {
        (self.example)()
    }
}

fn check_variables<Q: CatalogueQuery>(variables: &Value) -> Result<Value, SaleorError> {
    let typed = <Q::Variables as Deserialize>::deserialize(variables)?;
    typed.validate()?;
    Ok(serde_json::to_value(typed)?)
}

fn example_variables<Q: CatalogueQuery>() -> Result<Value, serde_json::Error> {
    serde_json::to_value(<Q::Variables as CatalogueVariables>::example())
}

/// Every catalogue entry, in dashboard order.
pub static CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry::of::<InitialProductFilterData>(),
    CatalogueEntry::of::<ProductList>(),
    CatalogueEntry::of::<CountAllProducts>(),
    CatalogueEntry::of::<ProductDetails>(),
    CatalogueEntry::of::<ProductVariantDetails>(),
    CatalogueEntry::of::<ProductVariantCreateData>(),
    CatalogueEntry::of::<ProductImageById>(),
    CatalogueEntry::of::<GridAttributes>(),
    CatalogueEntry::of::<CreateMultipleVariantsData>(),
    CatalogueEntry::of::<ProductVariantsSkus>(),
    CatalogueEntry::of::<UserWithMetadata>(),
    CatalogueEntry::of::<ProductsSkus>(),
    CatalogueEntry::of::<ProductPrivateMetadata>(),
    CatalogueEntry::of::<ProductTypeByName>(),
    CatalogueEntry::of::<SearchProductTypes>(),
];

/// Look an entry up by key.
///
/// # Errors
///
/// Returns [`SaleorError::UnknownEntry`] when no entry has this key.
pub fn find(key: &str) -> Result<&'static CatalogueEntry, SaleorError> {
    CATALOGUE
        .iter()
        .find(|entry| entry.key == key)
        .ok_or_else(|| SaleorError::UnknownEntry(key.to_string()))
}

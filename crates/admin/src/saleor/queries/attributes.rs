//! Attribute queries for the product grid.

use crate::saleor::fragments::PAGE_INFO;

catalogue_query! {
    /// Attributes that can be shown as product grid columns, plus the ones
    /// already selected.
    GridAttributes {
        key: "grid-attributes",
        operation: "GridAttributes",
        source: "queries/grid_attributes.graphql",
        fragments: [PAGE_INFO],
        module: grid_attributes,
    }
}

pub mod grid_attributes {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::{AttributeId, PageRequest, PaginationError};

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::types::{Connection, NamedNode, PagedConnection};

    /// Forward-only paging over grid-capable attributes.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        pub first: i64,
        pub after: Option<String>,
        /// Columns currently shown.
        pub ids: Vec<AttributeId>,
    }

    impl Variables {
        /// First page of `first` attributes, resolving `ids` as well.
        #[must_use]
        pub fn new(first: i64, ids: Vec<AttributeId>) -> Self {
            Self {
                first,
                after: None,
                ids,
            }
        }
    }

    impl CatalogueVariables for Variables {
        fn validate(&self) -> Result<(), PaginationError> {
            PageRequest::from_parts(Some(self.first), self.after.clone(), None, None).map(|_| ())
        }

        fn example() -> Self {
            Self::new(10, Vec::new())
        }
    }

    pub type GridAttribute = NamedNode<AttributeId>;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        /// `attributes(filter: { availableInGrid: true, isVariantOnly: false })`.
        pub available_in_grid: Option<PagedConnection<GridAttribute>>,
        /// `attributes(first: 25, filter: { ids: $ids })`.
        pub grid: Option<Connection<GridAttribute>>,
    }
}

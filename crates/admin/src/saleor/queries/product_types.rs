//! Product type lookup and search.
//!
//! Both operations are named `SearchProductTypes` on the wire; they differ in
//! selection and paging, so each gets its own Rust type and catalogue key.

use crate::saleor::search::{SearchPage, SearchQuery};
use crate::saleor::fragments::{PAGE_INFO, TAX_TYPE};

catalogue_query! {
    /// Product types matching a name, without paging.
    ProductTypeByName {
        key: "product-type-by-name",
        operation: "SearchProductTypes",
        source: "queries/product_type_by_name.graphql",
        fragments: [],
        module: product_type_by_name,
    }
}

catalogue_query! {
    /// Product type picker search with "load more".
    SearchProductTypes {
        key: "search-product-types",
        operation: "SearchProductTypes",
        source: "queries/search_product_types.graphql",
        fragments: [TAX_TYPE, PAGE_INFO],
        module: search_product_types,
    }
}

impl SearchQuery for SearchProductTypes {
    type Node = search_product_types::SearchedProductType;

    fn variables(term: &str, first: i64, after: Option<String>) -> Self::Variables {
        search_product_types::Variables {
            after,
            first,
            query: term.to_string(),
        }
    }

    fn into_page(data: Self::ResponseData) -> SearchPage<Self::Node> {
        data.search.map_or_else(SearchPage::default, |connection| SearchPage {
            page_info: connection.page_info.clone(),
            nodes: connection.into_nodes(),
        })
    }
}

pub mod product_type_by_name {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::{PageRequest, PaginationError, ProductTypeId};

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::types::Connection;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        pub first: i64,
        pub query: String,
    }

    impl CatalogueVariables for Variables {
        fn validate(&self) -> Result<(), PaginationError> {
            PageRequest::from_parts(Some(self.first), None, None, None).map(|_| ())
        }

        fn example() -> Self {
            Self {
                first: 1,
                query: "Beverage".to_string(),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ProductTypeMatch {
        pub id: ProductTypeId,
        pub name: String,
        pub slug: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub search: Option<Connection<ProductTypeMatch>>,
    }

    impl ResponseData {
        /// The match whose name equals `name`, ignoring case.
        ///
        /// The API search is a substring match; callers resolving a name to
        /// an ID want the exact one.
        #[must_use]
        pub fn named(&self, name: &str) -> Option<&ProductTypeMatch> {
            self.search
                .iter()
                .flat_map(|connection| &connection.edges)
                .map(|edge| &edge.node)
                .find(|node| node.name.eq_ignore_ascii_case(name))
        }
    }
}

pub mod search_product_types {
    use serde::{Deserialize, Serialize};

    use saleor_dashboard_core::{PageRequest, PaginationError, ProductTypeId};

    use crate::saleor::catalogue::CatalogueVariables;
    use crate::saleor::fragments::TaxType;
    use crate::saleor::types::{Attribute, PagedConnection};

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Variables {
        pub after: Option<String>,
        pub first: i64,
        pub query: String,
    }

    impl CatalogueVariables for Variables {
        fn validate(&self) -> Result<(), PaginationError> {
            PageRequest::from_parts(Some(self.first), self.after.clone(), None, None).map(|_| ())
        }

        fn example() -> Self {
            Self {
                after: None,
                first: 20,
                query: String::new(),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SearchedProductType {
        pub id: ProductTypeId,
        pub name: String,
        pub has_variants: bool,
        pub slug: String,
        pub product_attributes: Option<Vec<Option<Attribute>>>,
        pub tax_type: Option<TaxType>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub search: Option<PagedConnection<SearchedProductType>>,
    }
}

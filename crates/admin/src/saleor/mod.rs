//! Saleor GraphQL API access.
//!
//! # Architecture
//!
//! - Every operation the dashboard sends lives in `graphql/` as a plain
//!   `.graphql` document, next to the fragments it spreads
//! - [`catalogue`] pairs each document with typed `Variables` and
//!   `ResponseData` through `graphql_client::GraphQLQuery`
//! - [`SaleorClient`] POSTs request bodies and hands back responses or
//!   failures unmodified (no caching, batching or retry)
//! - [`TopLevelSearch`] drives term search with cursor "load more"
//!
//! # Example
//!
//! ```rust,ignore
//! use saleor_dashboard_admin::saleor::{SaleorClient, queries::{ProductList, product_list}};
//! use saleor_dashboard_core::PageRequest;
//!
//! let client = SaleorClient::new(&config.saleor)?;
//! let page = client
//!     .query::<ProductList>(product_list::Variables::new(PageRequest::first(10)))
//!     .await?;
//! ```

/// Load a document from the crate's `graphql/` directory.
macro_rules! graphql_file {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/graphql/", $path))
    };
}

/// Declare a catalogue entry backed by a `.graphql` document.
///
/// Generates the unit struct, its `GraphQLQuery` impl and its
/// `CatalogueQuery` impl. The document is composed with its fragments on
/// first use and cached for the life of the process.
macro_rules! catalogue_query {
    (
        $(#[$meta:meta])*
        $name:ident {
            key: $key:literal,
            operation: $operation:literal,
            source: $path:literal,
            fragments: [$($fragment:expr),* $(,)?],
            module: $module:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl graphql_client::GraphQLQuery for $name {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(
                variables: Self::Variables,
            ) -> graphql_client::QueryBody<Self::Variables> {
                graphql_client::QueryBody {
                    variables,
                    query: <Self as $crate::saleor::catalogue::CatalogueQuery>::document(),
                    operation_name: $operation,
                }
            }
        }

        impl $crate::saleor::catalogue::CatalogueQuery for $name {
            const KEY: &'static str = $key;
            const OPERATION_NAME: &'static str = $operation;

            fn document() -> &'static str {
                static DOCUMENT: std::sync::LazyLock<String> = std::sync::LazyLock::new(|| {
                    $crate::saleor::document::compose(
                        graphql_file!($path),
                        &[$(&$fragment),*],
                    )
                });
                &DOCUMENT
            }
        }
    };
}

pub mod catalogue;
mod client;
pub mod document;
pub mod fragments;
pub mod lint;
pub mod queries;
pub mod search;
pub mod types;

pub use catalogue::{CATALOGUE, CatalogueEntry, CatalogueQuery, CatalogueVariables};
pub use client::SaleorClient;
pub use search::{SearchPage, SearchQuery, TopLevelSearch};

/// A GraphQL error as returned by the API, kept verbatim.
pub use graphql_client::Error as GraphQLError;

use saleor_dashboard_core::PaginationError;
use thiserror::Error;

/// Errors that can occur when talking to the Saleor API.
#[derive(Debug, Error)]
pub enum SaleorError {
    /// Variables broke the paging contract; nothing was sent.
    #[error("Invalid variables: {0}")]
    Contract(#[from] PaginationError),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status.
        status: reqwest::StatusCode,
        /// Response body, as text.
        body: String,
    },

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Neither data nor errors came back.
    #[error("No data in response")]
    NoData,

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No catalogue entry with this key.
    #[error("Unknown catalogue entry: {0}")]
    UnknownEntry(String),
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

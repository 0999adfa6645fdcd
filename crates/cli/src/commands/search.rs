//! Top-level search from the command line.
//!
//! # Usage
//!
//! ```bash
//! sd-cli search product-types bev --first 5 --pages 3
//! ```

use saleor_dashboard_admin::config::{ConfigError, SaleorApiConfig};
use saleor_dashboard_admin::saleor::queries::SearchProductTypes;
use saleor_dashboard_admin::saleor::{SaleorClient, SaleorError, TopLevelSearch};
use thiserror::Error;

/// Errors from `search`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// API configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request failed or the API reported errors.
    #[error(transparent)]
    Saleor(#[from] SaleorError),
}

/// Search product types, loading up to `pages` pages of `first` results.
///
/// # Errors
///
/// Returns `SearchError` for configuration or API failures.
pub async fn product_types(term: &str, first: i64, pages: u32) -> Result<(), SearchError> {
    let config = SaleorApiConfig::from_env()?;
    let client = SaleorClient::new(&config)?;

    let mut search = TopLevelSearch::<SearchProductTypes>::new(client).with_page_size(first);
    search.search(term).await?;

    let mut loaded = 1;
    while loaded < pages && search.load_more().await? {
        loaded += 1;
    }

    tracing::info!(
        term,
        pages = loaded,
        results = search.results().len(),
        has_more = search.has_more(),
        "Search finished"
    );

    #[allow(clippy::print_stdout)]
    {
        for product_type in search.results() {
            println!(
                "{}\t{}\t{}",
                product_type.id,
                product_type.slug,
                product_type.name
            );
        }
        if let Some(cursor) = search
            .page_info()
            .filter(|info| info.has_next_page)
            .and_then(|info| info.end_cursor.as_deref())
        {
            println!("# more results after {cursor}");
        }
    }
    Ok(())
}

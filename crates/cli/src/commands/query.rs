//! Run a catalogue entry against the configured API.
//!
//! # Usage
//!
//! ```bash
//! sd-cli query product-list --variables '{"first": 10}'
//! sd-cli query count-all-products
//! ```
//!
//! # Environment Variables
//!
//! - `SALEOR_API_URL` - GraphQL endpoint
//! - `SALEOR_API_TOKEN` - Optional bearer token

use saleor_dashboard_admin::config::{ConfigError, SaleorApiConfig};
use saleor_dashboard_admin::saleor::{SaleorClient, SaleorError, catalogue};
use serde_json::Value;
use thiserror::Error;

/// Errors from `query`.
#[derive(Debug, Error)]
pub enum QueryError {
    /// API configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request failed or the API reported errors.
    #[error(transparent)]
    Saleor(#[from] SaleorError),

    /// `--variables` is not valid JSON, or the result failed to print.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `--variables` is JSON but not an object.
    #[error("Variables must be a JSON object")]
    NotAnObject,
}

/// Parse `--variables`, falling back to the entry's example.
fn parse_variables(raw: Option<&str>, example: Value) -> Result<Value, QueryError> {
    let Some(raw) = raw else {
        return Ok(example);
    };
    let variables: Value = serde_json::from_str(raw)?;
    if variables.is_object() {
        Ok(variables)
    } else {
        Err(QueryError::NotAnObject)
    }
}

/// Run `key` and print the response data as pretty JSON.
///
/// # Errors
///
/// Returns `QueryError` for unknown keys, bad variables, configuration or
/// API failures.
pub async fn run(key: &str, variables: Option<&str>) -> Result<(), QueryError> {
    let entry = catalogue::find(key)?;
    let variables = parse_variables(variables, entry.example()?)?;

    let config = SaleorApiConfig::from_env()?;
    let client = SaleorClient::new(&config)?;
    tracing::info!(key, endpoint = %client.endpoint(), "Running catalogue entry");

    let data = client.query_entry(entry, variables).await?;
    let output = serde_json::to_string_pretty(&data)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}

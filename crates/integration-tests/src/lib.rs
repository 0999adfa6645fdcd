//! Integration tests for the Saleor dashboard catalogue.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p saleor-dashboard-integration-tests
//! ```
//!
//! No live Saleor instance is needed: API tests run against an `httpmock`
//! server standing in for the GraphQL endpoint.
//!
//! # Test Categories
//!
//! - `catalogue_contract` - Documents, variables and fragments agree
//! - `client_dispatch` - Wire format of requests and error mapping
//! - `warehouse_card` - The "assign to shop" card and its routes
//! - `catalogue_route` - Catalogue entries dispatched through the server

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use saleor_dashboard_admin::config::{AdminConfig, SaleorApiConfig};
use saleor_dashboard_admin::i18n::Messages;
use saleor_dashboard_admin::saleor::SaleorClient;
use saleor_dashboard_admin::state::AppState;
use secrecy::SecretString;
use url::Url;

/// Path the mock GraphQL endpoint is served on.
pub const GRAPHQL_PATH: &str = "/graphql/";

/// API configuration pointing at `base_url` + [`GRAPHQL_PATH`].
///
/// # Panics
///
/// Panics if `base_url` is not a valid URL.
#[must_use]
pub fn api_config(base_url: &str, token: Option<&str>) -> SaleorApiConfig {
    let url = Url::parse(&format!("{base_url}{GRAPHQL_PATH}")).expect("valid mock url");
    SaleorApiConfig {
        url,
        token: token.map(|t| SecretString::from(t.to_string())),
        timeout: Duration::from_secs(5),
    }
}

/// Client for a mock server at `base_url`.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client(base_url: &str, token: Option<&str>) -> SaleorClient {
    SaleorClient::new(&api_config(base_url, token)).expect("client builds")
}

/// Handler state with the built-in catalogues and an unreachable API.
///
/// # Panics
///
/// Panics if the built-in catalogues fail to load.
#[must_use]
pub fn app_state(default_locale: Option<&str>) -> AppState {
    app_state_for_api("http://127.0.0.1:9", default_locale)
}

/// Handler state whose Saleor client talks to a mock server at `base_url`.
///
/// # Panics
///
/// Panics if the built-in catalogues fail to load.
#[must_use]
pub fn app_state_for_api(base_url: &str, default_locale: Option<&str>) -> AppState {
    let saleor = api_config(base_url, None);
    let config = AdminConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 3001,
        default_locale: default_locale.map(ToString::to_string),
        saleor: saleor.clone(),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    };
    let messages = Messages::builtin()
        .expect("embedded catalogues parse")
        .with_default_locale(default_locale);
    let client = SaleorClient::new(&saleor).expect("client builds");

    AppState::new(config, client, messages)
}

//! GraphQL executor for the Saleor API.
//!
//! Serializes a request body, POSTs it and returns what came back. There is
//! no caching, normalisation, batching or retry here.

use std::sync::Arc;

use graphql_client::{QueryBody, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::config::SaleorApiConfig;

use super::{CatalogueEntry, CatalogueQuery, CatalogueVariables, SaleorError};

/// Saleor GraphQL API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct SaleorClient {
    inner: Arc<SaleorClientInner>,
}

struct SaleorClientInner {
    client: reqwest::Client,
    endpoint: Url,
    token: Option<SecretString>,
}

impl std::fmt::Debug for SaleorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleorClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("authenticated", &self.inner.token.is_some())
            .finish_non_exhaustive()
    }
}

impl SaleorClient {
    /// Create a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `SaleorError::Http` if the HTTP client cannot be built.
    pub fn new(config: &SaleorApiConfig) -> Result<Self, SaleorError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(SaleorClientInner {
                client,
                endpoint: config.url.clone(),
                token: config.token.clone(),
            }),
        })
    }

    /// The GraphQL endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Run a catalogue query and return its data.
    ///
    /// # Errors
    ///
    /// - `SaleorError::Contract` if the variables fail validation (nothing is sent)
    /// - `SaleorError::Http` / `SaleorError::Status` for transport failures
    /// - `SaleorError::GraphQL` if the response carries any errors
    /// - `SaleorError::NoData` if it carries neither data nor errors
    pub async fn query<Q: CatalogueQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, SaleorError> {
        let response = self.query_response::<Q>(variables).await?;
        into_data(response)
    }

    /// Run a catalogue query and return the whole response, data and errors
    /// together, for callers that can use partial data.
    ///
    /// # Errors
    ///
    /// Returns `SaleorError::Contract` for invalid variables and
    /// transport or parse errors; GraphQL errors are left in the response.
    #[instrument(skip(self, variables), fields(operation = Q::OPERATION_NAME))]
    pub async fn query_response<Q: CatalogueQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Response<Q::ResponseData>, SaleorError> {
        variables.validate()?;
        let body = Q::build_query(variables);
        self.dispatch(&body).await
    }

    /// Run a catalogue entry with JSON variables and return the JSON data.
    ///
    /// The variables are checked against the entry's typed variables first,
    /// so paging rules apply exactly as for [`query`](Self::query), and only
    /// the declared variables are sent.
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query), plus `SaleorError::Parse` when the
    /// variables do not fit the entry.
    #[instrument(skip(self, entry, variables), fields(operation = entry.operation_name))]
    pub async fn query_entry(
        &self,
        entry: &CatalogueEntry,
        variables: Value,
    ) -> Result<Value, SaleorError> {
        let variables = entry.check(&variables)?;
        let body = QueryBody {
            variables,
            query: entry.document(),
            operation_name: entry.operation_name,
        };
        let response = self.dispatch::<_, Value>(&body).await?;
        into_data(response)
    }

    async fn dispatch<V, D>(&self, body: &QueryBody<V>) -> Result<Response<D>, SaleorError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let mut request = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(body);
        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            // Saleor reports document validation failures as 400 with a
            // regular GraphQL error payload.
            if let Ok(Response {
                errors: Some(errors),
                ..
            }) = serde_json::from_slice::<Response<Value>>(&bytes)
                && !errors.is_empty()
            {
                tracing::warn!(%status, count = errors.len(), "Saleor rejected the request");
                return Err(SaleorError::GraphQL(errors));
            }

            tracing::warn!(%status, "Saleor returned an error status");
            return Err(SaleorError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let response: Response<D> = serde_json::from_slice(&bytes)?;
        if let Some(errors) = &response.errors {
            tracing::debug!(count = errors.len(), "Response carries GraphQL errors");
        }
        Ok(response)
    }
}

fn into_data<D>(response: Response<D>) -> Result<D, SaleorError> {
    if let Some(errors) = response.errors
        && !errors.is_empty()
    {
        return Err(SaleorError::GraphQL(errors));
    }
    response.data.ok_or(SaleorError::NoData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saleor::GraphQLError;
    use crate::saleor::queries::{ProductList, product_list};
    use saleor_dashboard_core::PaginationError;

    fn error_messages(errors: &[GraphQLError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    fn client_for(url: &str) -> SaleorClient {
        SaleorClient::new(&SaleorApiConfig::for_url(
            Url::parse(url).expect("valid url"),
        ))
        .expect("client builds")
    }

    #[test]
    fn test_into_data_prefers_errors() {
        let response: Response<Value> = serde_json::from_value(serde_json::json!({
            "data": {"product": null},
            "errors": [{"message": "Not allowed"}]
        }))
        .expect("deserialize");

        let err = into_data(response).expect_err("errors win");
        assert!(matches!(&err, SaleorError::GraphQL(errors) if error_messages(errors) == ["Not allowed"]));
    }

    #[test]
    fn test_into_data_without_data() {
        let response: Response<Value> =
            serde_json::from_value(serde_json::json!({})).expect("deserialize");
        assert!(matches!(into_data(response), Err(SaleorError::NoData)));
    }

    #[test]
    fn test_debug_hides_token() {
        let mut config =
            SaleorApiConfig::for_url(Url::parse("https://shop.example.com/graphql/").expect("url"));
        config.token = Some(SecretString::from("secret-app-token"));
        let client = SaleorClient::new(&config).expect("client builds");

        let debug = format!("{client:?}");
        assert!(debug.contains("authenticated: true"));
        assert!(!debug.contains("secret-app-token"));
    }

    #[tokio::test]
    async fn test_mixed_paging_is_rejected_before_dispatch() {
        // Nothing listens on port 9; a dispatched request would fail with Http.
        let client = client_for("http://127.0.0.1:9/graphql/");
        let variables = product_list::Variables {
            first: Some(10),
            last: Some(10),
            ..Default::default()
        };

        let result = client.query::<ProductList>(variables).await;
        assert!(matches!(
            result,
            Err(SaleorError::Contract(PaginationError::MixedDirections))
        ));
    }
}

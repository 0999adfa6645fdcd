//! Top-level search with cursor-driven "load more".
//!
//! A [`TopLevelSearch`] keeps one search term and the results fetched so far.
//! [`TopLevelSearch::search`] starts over; [`TopLevelSearch::load_more`]
//! appends the next page while the API reports one.

use std::marker::PhantomData;

use saleor_dashboard_core::{PageInfo, PageRequest};
use tracing::instrument;

use super::{CatalogueQuery, SaleorClient, SaleorError};

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage<N> {
    /// Nodes in API order.
    pub nodes: Vec<N>,
    /// Cursor information for this page.
    pub page_info: PageInfo,
}

impl<N> Default for SearchPage<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

/// A catalogue query usable as a top-level search.
pub trait SearchQuery: CatalogueQuery {
    /// A single result.
    type Node;

    /// Variables for one page of `term`.
    fn variables(term: &str, first: i64, after: Option<String>) -> Self::Variables;

    /// Extract the page from a response.
    fn into_page(data: Self::ResponseData) -> SearchPage<Self::Node>;
}

/// Search state for one query type.
pub struct TopLevelSearch<Q: SearchQuery> {
    client: SaleorClient,
    first: i64,
    term: String,
    results: Vec<Q::Node>,
    page_info: Option<PageInfo>,
    _query: PhantomData<fn() -> Q>,
}

impl<Q: SearchQuery> TopLevelSearch<Q> {
    /// Create an empty search with the default page size.
    #[must_use]
    pub const fn new(client: SaleorClient) -> Self {
        Self {
            client,
            first: DEFAULT_PAGE_SIZE,
            term: String::new(),
            results: Vec::new(),
            page_info: None,
            _query: PhantomData,
        }
    }

    /// Use a different page size for subsequent requests.
    #[must_use]
    pub fn with_page_size(mut self, first: i64) -> Self {
        self.first = first;
        self
    }

    /// Replace the term and fetch its first page.
    ///
    /// Previous results are dropped before the request, so a failed search
    /// leaves the state empty rather than showing stale results.
    ///
    /// # Errors
    ///
    /// Returns the executor's error unchanged.
    #[instrument(skip(self, term), fields(operation = Q::OPERATION_NAME))]
    pub async fn search(&mut self, term: impl Into<String>) -> Result<&[Q::Node], SaleorError> {
        self.term = term.into();
        self.results.clear();
        self.page_info = None;

        self.fetch(None).await?;
        Ok(&self.results)
    }

    /// Fetch and append the next page.
    ///
    /// Returns `false` without a request when there is nothing more to load.
    ///
    /// # Errors
    ///
    /// Returns the executor's error unchanged; already loaded results are kept.
    #[instrument(skip(self), fields(operation = Q::OPERATION_NAME))]
    pub async fn load_more(&mut self) -> Result<bool, SaleorError> {
        let Some(after) = self.next_cursor() else {
            return Ok(false);
        };
        self.fetch(Some(after)).await?;
        Ok(true)
    }

    async fn fetch(&mut self, after: Option<String>) -> Result<(), SaleorError> {
        let variables = Q::variables(&self.term, self.first, after);
        let data = self.client.query::<Q>(variables).await?;
        let page = Q::into_page(data);

        tracing::debug!(
            term = %self.term,
            fetched = page.nodes.len(),
            has_next = page.page_info.has_next_page,
            "Search page loaded"
        );

        self.results.extend(page.nodes);
        self.page_info = Some(page.page_info);
        Ok(())
    }

    fn next_cursor(&self) -> Option<String> {
        match self.page_info.as_ref()?.next(self.first)? {
            PageRequest::Forward { after, .. } => after,
            PageRequest::Backward { .. } => None,
        }
    }

    /// Current term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Results loaded so far.
    #[must_use]
    pub fn results(&self) -> &[Q::Node] {
        &self.results
    }

    /// Whether [`load_more`](Self::load_more) would fetch anything.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// Cursor information of the last page.
    #[must_use]
    pub const fn page_info(&self) -> Option<&PageInfo> {
        self.page_info.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SaleorApiConfig;
    use crate::saleor::queries::SearchProductTypes;

    fn offline_client() -> SaleorClient {
        SaleorClient::new(&SaleorApiConfig::for_url(
            url::Url::parse("http://127.0.0.1:9/graphql/").expect("valid url"),
        ))
        .expect("client builds")
    }

    #[test]
    fn test_new_search_is_empty() {
        let search = TopLevelSearch::<SearchProductTypes>::new(offline_client());
        assert!(search.results().is_empty());
        assert!(!search.has_more());
        assert_eq!(search.term(), "");
        assert!(search.page_info().is_none());
    }

    #[tokio::test]
    async fn test_load_more_before_search_is_noop() {
        let mut search = TopLevelSearch::<SearchProductTypes>::new(offline_client());
        let loaded = search.load_more().await.expect("no request made");
        assert!(!loaded);
    }

    #[tokio::test]
    async fn test_failed_search_clears_results() {
        let mut search =
            TopLevelSearch::<SearchProductTypes>::new(offline_client()).with_page_size(5);
        let result = search.search("bev").await;
        assert!(matches!(result, Err(SaleorError::Http(_))));
        assert_eq!(search.term(), "bev");
        assert!(search.results().is_empty());
    }
}

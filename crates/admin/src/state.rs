//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::i18n::Messages;
use crate::saleor::SaleorClient;

/// Application state shared across all handlers.
///
/// Cheap to clone; every clone points at the same inner state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    saleor: SaleorClient,
    messages: Messages,
}

impl AppState {
    /// Bundle the configuration, API client and message catalogues.
    #[must_use]
    pub fn new(config: AdminConfig, saleor: SaleorClient, messages: Messages) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                saleor,
                messages,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn saleor(&self) -> &SaleorClient {
        &self.inner.saleor
    }

    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.inner.messages
    }
}

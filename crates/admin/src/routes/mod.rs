//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                  - Health check
//!
//! # Warehouses
//! GET  /warehouses/{id}/assign-shop             - Warehouse page with the "assign to shop" card
//! GET  /components/warehouse-assign-to-shop     - The card alone, as an HTML partial
//!
//! # Catalogue
//! POST /api/catalogue/{key}                     - Run a catalogue entry, JSON variables in, JSON data out
//! ```
//!
//! Every page accepts an optional `?locale=` parameter; without it the
//! configured `DASHBOARD_LOCALE` applies.

use std::sync::LazyLock;

use axum::{Router, routing::get};
use regex::Regex;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

pub mod catalogue;
pub mod warehouses;

/// BCP 47-ish tag: a language subtag plus optional region or script subtags.
static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,8}(?:[-_][A-Za-z0-9]{1,8})*$").expect("Invalid regex")
});

/// Query parameters shared by localized pages.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    /// Requested locale, e.g. `pl` or `pl-PL`.
    pub locale: Option<String>,
}

impl LocaleQuery {
    /// The requested locale, rejecting anything that is not a locale tag.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for a malformed tag.
    pub fn locale(&self) -> Result<Option<&str>, AppError> {
        let Some(locale) = self.locale.as_deref().filter(|l| !l.is_empty()) else {
            return Ok(None);
        };

        if LOCALE_PATTERN.is_match(locale) {
            Ok(Some(locale))
        } else {
            Err(AppError::BadRequest(format!("invalid locale: {locale}")))
        }
    }
}

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(warehouses::router())
        .merge(catalogue::router())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the Saleor API.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(locale: &str) -> LocaleQuery {
        LocaleQuery {
            locale: Some(locale.to_string()),
        }
    }

    #[test]
    fn test_locale_accepts_tags() {
        assert_eq!(query("pl").locale().expect("valid"), Some("pl"));
        assert_eq!(query("pl-PL").locale().expect("valid"), Some("pl-PL"));
        assert_eq!(query("en_GB").locale().expect("valid"), Some("en_GB"));
    }

    #[test]
    fn test_locale_missing_or_empty() {
        assert_eq!(LocaleQuery::default().locale().expect("valid"), None);
        assert_eq!(query("").locale().expect("valid"), None);
    }

    #[test]
    fn test_locale_rejects_garbage() {
        assert!(matches!(
            query("<script>").locale(),
            Err(AppError::BadRequest(_))
        ));
        assert!(query("p").locale().is_err());
    }
}

//! Cursor-based pagination.
//!
//! Saleor list fields follow the Relay connection model: a page is requested
//! either forward (`first`/`after`) or backward (`last`/`before`), and every
//! connection answers with the same [`PageInfo`] shape. The API's behaviour
//! when both directions are mixed in one call is undefined, so
//! [`PageRequest::from_parts`] refuses to build such a request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when page arguments violate the cursor contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Forward and backward arguments were combined in one request.
    #[error("cannot combine forward (first/after) and backward (last/before) paging")]
    MixedDirections,
    /// A cursor was given without a page size.
    #[error("a page size (first or last) is required")]
    MissingPageSize,
    /// Page size must be positive.
    #[error("page size must be positive, got {0}")]
    NonPositivePageSize(i64),
}

/// Pagination information returned with every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether there are more items after this page.
    pub has_next_page: bool,
    /// Whether there are items before this page.
    pub has_previous_page: bool,
    /// Cursor for the first item.
    pub start_cursor: Option<String>,
    /// Cursor for the last item.
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// Request for the page following this one, if any.
    #[must_use]
    pub fn next(&self, first: i64) -> Option<PageRequest> {
        if !self.has_next_page {
            return None;
        }
        Some(PageRequest::Forward {
            first,
            after: self.end_cursor.clone(),
        })
    }

    /// Request for the page preceding this one, if any.
    #[must_use]
    pub fn previous(&self, last: i64) -> Option<PageRequest> {
        if !self.has_previous_page {
            return None;
        }
        Some(PageRequest::Backward {
            last,
            before: self.start_cursor.clone(),
        })
    }
}

/// A validated page request in exactly one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Page forward from `after` (or from the start).
    Forward {
        /// Number of items to return.
        first: i64,
        /// Cursor to start after.
        after: Option<String>,
    },
    /// Page backward from `before` (or from the end).
    Backward {
        /// Number of items to return.
        last: i64,
        /// Cursor to end before.
        before: Option<String>,
    },
}

impl PageRequest {
    /// The first `n` items.
    #[must_use]
    pub const fn first(n: i64) -> Self {
        Self::Forward {
            first: n,
            after: None,
        }
    }

    /// The last `n` items.
    #[must_use]
    pub const fn last(n: i64) -> Self {
        Self::Backward {
            last: n,
            before: None,
        }
    }

    /// Build a request from the four raw connection arguments.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::MixedDirections`] if any forward argument is
    /// combined with any backward argument, [`PaginationError::MissingPageSize`]
    /// if neither `first` nor `last` is given, and
    /// [`PaginationError::NonPositivePageSize`] for a size below 1.
    pub fn from_parts(
        first: Option<i64>,
        after: Option<String>,
        last: Option<i64>,
        before: Option<String>,
    ) -> Result<Self, PaginationError> {
        let forward = first.is_some() || after.is_some();
        let backward = last.is_some() || before.is_some();

        if forward && backward {
            return Err(PaginationError::MixedDirections);
        }

        match (first, last) {
            (Some(n), _) | (_, Some(n)) if n < 1 => Err(PaginationError::NonPositivePageSize(n)),
            (Some(first), None) => Ok(Self::Forward { first, after }),
            (None, Some(last)) => Ok(Self::Backward { last, before }),
            _ => Err(PaginationError::MissingPageSize),
        }
    }

    /// Split back into `(first, after, last, before)` connection arguments.
    #[must_use]
    pub fn into_parts(self) -> (Option<i64>, Option<String>, Option<i64>, Option<String>) {
        match self {
            Self::Forward { first, after } => (Some(first), after, None, None),
            Self::Backward { last, before } => (None, None, Some(last), before),
        }
    }

    /// Number of items requested.
    #[must_use]
    pub const fn size(&self) -> i64 {
        match self {
            Self::Forward { first, .. } => *first,
            Self::Backward { last, .. } => *last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_forward() {
        let page = PageRequest::from_parts(Some(10), None, None, None).expect("valid");
        assert_eq!(page, PageRequest::first(10));
        assert_eq!(page.into_parts(), (Some(10), None, None, None));
    }

    #[test]
    fn test_backward_page() {
        let page =
            PageRequest::from_parts(None, None, Some(5), Some("YXJyYXljb25uZWN0aW9uOjk=".into()))
                .expect("valid");
        assert_eq!(page.size(), 5);
        assert!(matches!(page, PageRequest::Backward { .. }));
    }

    #[test]
    fn test_first_and_last_rejected() {
        assert_eq!(
            PageRequest::from_parts(Some(10), None, Some(10), None),
            Err(PaginationError::MixedDirections)
        );
    }

    #[test]
    fn test_cursor_from_other_direction_rejected() {
        assert_eq!(
            PageRequest::from_parts(Some(10), None, None, Some("c".into())),
            Err(PaginationError::MixedDirections)
        );
        assert_eq!(
            PageRequest::from_parts(None, Some("c".into()), Some(3), None),
            Err(PaginationError::MixedDirections)
        );
    }

    #[test]
    fn test_missing_and_bad_sizes() {
        assert_eq!(
            PageRequest::from_parts(None, None, None, None),
            Err(PaginationError::MissingPageSize)
        );
        assert_eq!(
            PageRequest::from_parts(None, Some("c".into()), None, None),
            Err(PaginationError::MissingPageSize)
        );
        assert_eq!(
            PageRequest::from_parts(Some(0), None, None, None),
            Err(PaginationError::NonPositivePageSize(0))
        );
    }

    #[test]
    fn test_page_info_wire_shape() {
        let info: PageInfo = serde_json::from_value(serde_json::json!({
            "hasNextPage": true,
            "hasPreviousPage": false,
            "startCursor": "YQ==",
            "endCursor": "Yg=="
        }))
        .expect("deserialize");

        assert_eq!(info.next(20), Some(PageRequest::Forward {
            first: 20,
            after: Some("Yg==".into())
        }));
        assert_eq!(info.previous(20), None);
    }
}

//! Core types for the Saleor dashboard.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod metadata;
pub mod money;
pub mod pagination;

pub use id::*;
pub use metadata::{MetadataItem, MetadataMap};
pub use money::{Money, PriceRange, TaxedMoney};
pub use pagination::{PageInfo, PageRequest, PaginationError};

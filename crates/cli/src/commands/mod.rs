//! CLI command implementations.

pub mod catalogue;
pub mod query;
pub mod render;
pub mod search;

//! Saleor Dashboard Core - Shared types library.
//!
//! This crate provides the data shapes shared by every dashboard component:
//! - `admin` - Query catalogue, GraphQL executor and dashboard views
//! - `cli` - Command-line tools for inspecting and running the catalogue
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! Every entity here is owned by the remote Saleor API; these types only
//! describe what is requested and what comes back.
//!
//! # Modules
//!
//! - [`types`] - Opaque IDs, cursor pagination, metadata and money

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

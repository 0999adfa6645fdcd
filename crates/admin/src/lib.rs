//! Saleor Dashboard admin library.
//!
//! This crate provides the dashboard's Saleor-facing pieces as a library,
//! allowing them to be tested and reused by the CLI:
//! - [`saleor`] - Query catalogue, fragments, executor and top-level search
//! - [`components`] - Stateless views rendered with askama
//! - [`i18n`] - Message catalogues for display text
//! - [`routes`] - axum router serving the views
//!
//! Every entity is owned by the remote Saleor API; nothing here persists
//! data.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod saleor;
pub mod state;

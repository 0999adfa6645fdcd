//! Reusable view components.
//!
//! Components render to HTML fragments that pages embed; their text comes
//! from the message catalogues in [`crate::i18n`].

pub mod warehouse_assign_to_shop;

pub use warehouse_assign_to_shop::WarehouseAssignToShop;

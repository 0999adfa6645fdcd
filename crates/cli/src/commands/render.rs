//! Render view components to stdout.
//!
//! # Usage
//!
//! ```bash
//! sd-cli render warehouse-assign-to-shop --locale pl
//! ```

use askama::Template;
use saleor_dashboard_admin::components::WarehouseAssignToShop;
use saleor_dashboard_admin::i18n::{I18nError, Messages};
use thiserror::Error;

/// Errors from `render`.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A built-in catalogue failed to load.
    #[error(transparent)]
    Messages(#[from] I18nError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Render the card's HTML.
fn warehouse_card(locale: Option<&str>) -> Result<String, RenderError> {
    let messages = Messages::builtin()?;
    Ok(WarehouseAssignToShop::new(&messages, locale).render()?)
}

/// Print the "assign to shop" card.
///
/// # Errors
///
/// Returns `RenderError` if the catalogues or the template fail.
pub fn warehouse_assign_to_shop(locale: Option<&str>) -> Result<(), RenderError> {
    let html = warehouse_card(locale)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{html}");
    }
    Ok(())
}

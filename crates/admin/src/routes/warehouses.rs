//! Warehouse route handlers.
//!
//! Warehouses are owned by the Saleor API; these pages only render the
//! dashboard's own static content for a warehouse ID.

use askama::Template;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::Html,
    routing::get,
};
use saleor_dashboard_core::WarehouseId;
use tracing::instrument;

use crate::components::WarehouseAssignToShop;
use crate::components::warehouse_assign_to_shop::TITLE;
use crate::error::AppError;
use crate::state::AppState;

use super::LocaleQuery;

// =============================================================================
// Templates
// =============================================================================

/// Warehouse page embedding the "assign to shop" card.
#[derive(Template)]
#[template(path = "warehouses/assign_to_shop.html")]
pub struct AssignToShopPageTemplate {
    pub lang: String,
    pub title: String,
    pub warehouse_id: WarehouseId,
    pub card: String,
}

// =============================================================================
// Router
// =============================================================================

/// Build the warehouse router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/warehouses/{id}/assign-shop", get(assign_to_shop_page))
        .route(
            "/components/warehouse-assign-to-shop",
            get(assign_to_shop_card),
        )
}

/// Locale requested, else the configured default.
fn resolve_locale<'a>(
    state: &'a AppState,
    query: &'a LocaleQuery,
) -> Result<Option<&'a str>, AppError> {
    Ok(query.locale()?.or(state.config().default_locale.as_deref()))
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the card as an HTML partial.
#[instrument(skip(state))]
async fn assign_to_shop_card(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Result<Html<String>, AppError> {
    let locale = resolve_locale(&state, &query)?;
    let card = WarehouseAssignToShop::new(state.messages(), locale);
    Ok(Html(card.render()?))
}

/// Render the warehouse page with the card.
#[instrument(skip(state), fields(warehouse_id = %id))]
async fn assign_to_shop_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<Html<String>, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::NotFound("warehouse".to_string()));
    }

    let locale = resolve_locale(&state, &query)?;
    let messages = state.messages();
    let card = WarehouseAssignToShop::new(messages, locale).render()?;

    let template = AssignToShopPageTemplate {
        lang: locale
            .and_then(|l| l.split(['-', '_']).next())
            .unwrap_or("en")
            .to_lowercase(),
        title: messages.format(locale, &TITLE).to_string(),
        warehouse_id: WarehouseId::new(id),
        card,
    };

    Ok(Html(template.render()?))
}

//! Placeholder card shown on a warehouse that no shop uses yet.

use askama::Template;

use crate::i18n::{MessageDescriptor, Messages};

/// Card title.
pub const TITLE: MessageDescriptor = MessageDescriptor {
    id: "warehouse.assignToShop.title",
    default_message: "Przydziel magazyn",
    description: Some("Shop assigned to"),
};

/// Card body.
pub const NO_SHOP: MessageDescriptor = MessageDescriptor {
    id: "warehouse.assignToShop.noShop",
    default_message: "This warehouse has no shop assigned.",
    description: None,
};

/// "Assign to shop" card.
///
/// Stateless: the same messages and locale always render the same markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Template)]
#[template(path = "components/warehouse_assign_to_shop.html")]
pub struct WarehouseAssignToShop<'a> {
    /// Card heading.
    pub title: &'a str,
    /// Secondary text under the heading.
    pub message: &'a str,
}

impl<'a> WarehouseAssignToShop<'a> {
    /// Resolve the card's text for `locale`.
    #[must_use]
    pub fn new(messages: &'a Messages, locale: Option<&str>) -> Self {
        Self {
            title: messages.format(locale, &TITLE),
            message: messages.format(locale, &NO_SHOP),
        }
    }
}

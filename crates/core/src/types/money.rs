//! Monetary amounts using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount in a given currency.
///
/// Saleor sends `amount` as a JSON float; it is read into a [`Decimal`]
/// so that display and comparisons do not drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// Gross amount of a taxed price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxedMoney {
    /// Amount including tax.
    pub gross: Money,
}

/// Lowest and highest price of a product's variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Cheapest variant.
    pub start: Option<TaxedMoney>,
    /// Most expensive variant.
    pub stop: Option<TaxedMoney>,
}

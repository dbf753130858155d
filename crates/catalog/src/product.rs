//! A single inventory line item.

use serde::{Deserialize, Serialize};

use tindahan_core::{DomainResult, Money, StockStatus};

/// One product on the shelf.
///
/// The brand name acts as the display identifier; neither it nor the category
/// label is guaranteed unique. Quantity and price are non-negative by type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    category: String,
    brand: String,
    quantity: u32,
    unit_price: Money,
}

impl Product {
    pub fn new(
        category: impl Into<String>,
        brand: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            category: category.into(),
            brand: brand.into(),
            quantity,
            unit_price,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Stock level classification for this record.
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity)
    }

    /// Value of the units on hand (quantity × unit price).
    pub fn line_value(&self) -> DomainResult<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

//! Stock level classification.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Quantities strictly below this count as low stock. Exclusive bound.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Classification of an on-hand quantity against [`LOW_STOCK_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classify an on-hand quantity.
    ///
    /// `OutOfStock` iff the quantity is exactly zero; `LowStock` iff it is
    /// between 1 and 4 inclusive; `InStock` otherwise.
    pub fn classify(quantity: u32) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Whether this level belongs in the low-stock alert.
    pub fn needs_restock(&self) -> bool {
        matches!(self, Self::OutOfStock | Self::LowStock)
    }

    /// Human-readable label used in rendered tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::InStock => "In Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

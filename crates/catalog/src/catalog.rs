//! The store's product collection and its read-only aggregations.

use serde::{Deserialize, Serialize};

use tindahan_core::{DomainResult, Money};

use crate::product::Product;

/// Ordered collection of [`Product`] records.
///
/// Insertion order is preserved and significant: every rendered table lists
/// records in catalog order. The collection is built once and never mutated
/// afterwards; there is deliberately no add/edit/remove API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The store's fixed shelf contents.
    pub fn seed() -> Self {
        Self::new(vec![
            Product::new("Snacks", "Piattos", 12, Money::from_pesos(20)),
            Product::new("Drinks", "Coke", 3, Money::from_pesos(15)),
            Product::new("Canned Goods", "555 Sardines", 0, Money::from_pesos(25)),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of distinct product lines on the shelf.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Total units on hand across all products.
    pub fn total_items(&self) -> u64 {
        self.products
            .iter()
            .map(|p| u64::from(p.quantity()))
            .sum()
    }

    /// Total peso value of the stock (sum of quantity × unit price).
    pub fn total_value(&self) -> DomainResult<Money> {
        let mut total = Money::ZERO;
        for product in &self.products {
            total = total.checked_add(product.line_value()?)?;
        }
        Ok(total)
    }

    /// Records below the low-stock threshold, in catalog order.
    pub fn low_stock(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.status().needs_restock())
    }

    pub fn low_stock_count(&self) -> usize {
        self.low_stock().count()
    }
}

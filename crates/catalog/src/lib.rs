//! Products domain module.
//!
//! This crate holds the store's product records and the read-only aggregations
//! over them, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::Product;

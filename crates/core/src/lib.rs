//! `tindahan-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod money;
pub mod status;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use status::{LOW_STOCK_THRESHOLD, StockStatus};
pub use value_object::ValueObject;

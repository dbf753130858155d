//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Display and
/// host-surface concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Money arithmetic exceeded the representable range.
    #[error("money arithmetic overflowed during {0}")]
    MoneyOverflow(&'static str),
}

impl DomainError {
    pub fn overflow(op: &'static str) -> Self {
        Self::MoneyOverflow(op)
    }
}

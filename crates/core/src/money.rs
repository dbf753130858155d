//! Monetary amounts in Philippine pesos.
//!
//! Amounts are held in centavos (smallest currency unit) so that summation and
//! per-unit multiplication stay exact integer math with no float drift.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Peso currency symbol (U+20B1).
pub const PESO_SIGN: char = '\u{20B1}';

/// A non-negative peso amount, stored as whole centavos.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    /// Whole-peso constructor; `from_pesos(20)` is ₱20.00.
    pub fn from_pesos(pesos: u32) -> Self {
        Self(u64::from(pesos) * 100)
    }

    pub fn centavos(&self) -> u64 {
        self.0
    }

    /// Sum with another amount, failing on overflow instead of wrapping.
    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::overflow("addition"))
    }

    /// Multiply by a unit count (quantity × unit price).
    pub fn checked_mul(self, quantity: u32) -> DomainResult<Money> {
        self.0
            .checked_mul(u64::from(quantity))
            .map(Money)
            .ok_or_else(|| DomainError::overflow("multiplication"))
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    /// Renders with the peso sign and exactly two fractional digits,
    /// e.g. `₱285.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PESO_SIGN}{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

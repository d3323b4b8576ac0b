//! Derived invoice totals.
//!
//! # Invariants
//! - `total == subtotal + surcharge` always holds.
//! - Totals are recomputed per request from the reference date and
//!   enrollment parameters; they are never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Breakdown of one monthly amount payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotal {
    pub subtotal: Decimal,
    pub surcharge: Decimal,
    pub total: Decimal,
}

impl InvoiceTotal {
    /// Builds a total from its parts, keeping the sum invariant.
    pub fn new(subtotal: Decimal, surcharge: Decimal) -> Self {
        Self {
            subtotal,
            surcharge,
            total: subtotal + surcharge,
        }
    }

    /// Display-time rounding to 2 fractional digits.
    ///
    /// Calculation paths keep full precision; round only when rendering
    /// amounts or building payment links.
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: self.subtotal.round_dp(2),
            surcharge: self.surcharge.round_dp(2),
            total: self.total.round_dp(2),
        }
    }
}

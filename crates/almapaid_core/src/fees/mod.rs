//! Monthly fee and late-surcharge computation.
//!
//! # Responsibility
//! - Provide the two deployment calculation modes as pure functions.
//!
//! # Invariants
//! - Calculators never read or write shared state; identical inputs give
//!   identical outputs.
//! - Invalid inputs fail with a validation error, never a silent clamp.

pub mod calculator;

//! Payment-link collaborators at the interface level.
//!
//! # Responsibility
//! - Build the two payment surfaces (gateway checkout, bank deep-link)
//!   from a computed total and a reference string.
//! - Detect the return-trip signal after a gateway redirect.
//!
//! # Invariants
//! - The core never performs the gateway HTTP call itself; providers
//!   implement [`links::CheckoutLinkProvider`] outside this crate.
//! - Link failures are orthogonal to fee calculation results.

pub mod links;
pub mod return_trip;

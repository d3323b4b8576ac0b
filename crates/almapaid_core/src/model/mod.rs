//! Domain model for students, enrollments and derived invoice totals.
//!
//! # Responsibility
//! - Define the canonical records billing logic operates on.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Records are immutable snapshots per request; nothing in the model
//!   layer mutates persisted state.
//! - Invoice totals are derived, never stored.

pub mod enrollment;
pub mod invoice;
pub mod student;

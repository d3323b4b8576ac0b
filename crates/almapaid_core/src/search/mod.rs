//! Student search entry points.
//!
//! # Responsibility
//! - Narrow a roster to the students matching a staff-typed term.
//! - Keep matching pure and in-process; no storage coupling.

pub mod matcher;

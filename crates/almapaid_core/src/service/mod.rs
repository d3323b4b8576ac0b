//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate matcher, repositories and calculators into the staff
//!   search-and-pay flow.
//! - Keep caller layers (CLI, web) decoupled from storage details.

pub mod billing_service;

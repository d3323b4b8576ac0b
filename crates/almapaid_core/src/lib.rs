//! Core domain logic for AlmaPaid workshop billing.
//! This crate is the single source of truth for matching and fee rules.

pub mod config;
pub mod db;
pub mod fees;
pub mod logging;
pub mod model;
pub mod payment;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{
    load_settings, parse_settings, BankSettings, BillingMode, ConfigError, GatewaySettings,
    Settings,
};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use fees::calculator::{daily_percent_due, flat_cutoff_due, FeeError, FeeResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::enrollment::{Enrollment, EnrollmentId, EnrollmentValidationError};
pub use model::invoice::InvoiceTotal;
pub use model::student::{Student, StudentId, StudentValidationError, SEARCHABLE_FIELDS};
pub use payment::links::{
    bank_link, bank_transfer_uri, gateway_preference, preference_payload, CheckoutLinkProvider,
    CheckoutRequest, LinkError, PreferencePayload,
};
pub use payment::return_trip::ReturnSignal;
pub use repo::enrollment_repo::{EnrollmentRepository, SqliteEnrollmentRepository};
pub use repo::payment_repo::{PaymentRepository, Settlement, SqlitePaymentRepository};
pub use repo::student_repo::{SqliteStudentRepository, StudentRepository};
pub use repo::{RepoError, RepoResult};
pub use search::matcher::match_students;
pub use service::billing_service::{
    BillingError, BillingService, MonthlyDue, SearchOutcome,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for students,
//!   enrollments and payment settlements.
//! - Isolate SQL details from service/business orchestration.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::enrollment::EnrollmentValidationError;
use crate::model::student::StudentValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod enrollment_repo;
pub mod payment_repo;
pub mod student_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Shared error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    InvalidStudent(StudentValidationError),
    InvalidEnrollment(EnrollmentValidationError),
    InvalidSettlement(String),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStudent(err) => write!(f, "{err}"),
            Self::InvalidEnrollment(err) => write!(f, "{err}"),
            Self::InvalidSettlement(message) => write!(f, "invalid settlement: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidStudent(err) => Some(err),
            Self::InvalidEnrollment(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidSettlement(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<StudentValidationError> for RepoError {
    fn from(value: StudentValidationError) -> Self {
        Self::InvalidStudent(value)
    }
}

impl From<EnrollmentValidationError> for RepoError {
    fn from(value: EnrollmentValidationError) -> Self {
        Self::InvalidEnrollment(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

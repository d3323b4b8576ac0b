//! Billing use-case service.
//!
//! # Responsibility
//! - Run the staff flow: search term -> student -> monthly due.
//! - Apply the deployment billing mode without merging the two modes.
//!
//! # Invariants
//! - An empty search term short-circuits before the matcher runs.
//! - Fees are only calculated for a uniquely matched student.
//! - Zero enrollments is an informational condition, not an error.

use crate::config::BillingMode;
use crate::fees::calculator::{daily_percent_due, flat_cutoff_due, FeeError};
use crate::model::invoice::InvoiceTotal;
use crate::model::student::{Student, StudentId};
use crate::repo::enrollment_repo::EnrollmentRepository;
use crate::repo::student_repo::StudentRepository;
use crate::repo::RepoError;
use crate::search::matcher::match_students;
use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Cardinality of a roster search, driving caller branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing matched (or the term was empty).
    NoMatch,
    /// Exactly one student; fee calculation may proceed.
    Unique(Student),
    /// Several students; caller shows a disambiguation list and does
    /// not calculate fees for any of them.
    Ambiguous(Vec<Student>),
}

/// Result of a monthly-due computation for one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthlyDue {
    /// The student has no enrollments for the period. Informational,
    /// distinct from a validation error.
    NothingDue,
    Due(InvoiceTotal),
}

/// Failure in the billing flow.
#[derive(Debug)]
pub enum BillingError {
    Repo(RepoError),
    Fee(FeeError),
}

impl Display for BillingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Fee(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BillingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Fee(err) => Some(err),
        }
    }
}

impl From<RepoError> for BillingError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<FeeError> for BillingError {
    fn from(value: FeeError) -> Self {
        Self::Fee(value)
    }
}

/// Use-case service for the search-and-pay flow.
pub struct BillingService<S: StudentRepository, E: EnrollmentRepository> {
    students: S,
    enrollments: E,
    mode: BillingMode,
}

impl<S: StudentRepository, E: EnrollmentRepository> BillingService<S, E> {
    pub fn new(students: S, enrollments: E, mode: BillingMode) -> Self {
        Self {
            students,
            enrollments,
            mode,
        }
    }

    /// Searches the roster for a staff-typed term.
    ///
    /// Empty or whitespace-only terms return [`SearchOutcome::NoMatch`]
    /// without loading the roster.
    pub fn search(&self, term: &str) -> Result<SearchOutcome, BillingError> {
        if term.trim().is_empty() {
            return Ok(SearchOutcome::NoMatch);
        }

        let roster = self.students.list_students()?;
        let mut matched: Vec<Student> = match_students(term, &roster)
            .into_iter()
            .cloned()
            .collect();

        info!(
            "event=student_search module=billing status=ok matches={}",
            matched.len()
        );

        Ok(match matched.len() {
            0 => SearchOutcome::NoMatch,
            1 => SearchOutcome::Unique(matched.remove(0)),
            _ => SearchOutcome::Ambiguous(matched),
        })
    }

    /// Computes what one student owes for the month of `reference`.
    ///
    /// Mode A applies each enrollment's own due day and daily
    /// percentage, then sums. Mode B applies one flat surcharge over the
    /// summed subtotal once the configured cutoff is reached.
    pub fn monthly_due(
        &self,
        student_id: StudentId,
        reference: NaiveDate,
    ) -> Result<MonthlyDue, BillingError> {
        let enrollments = self.enrollments.list_for_student(student_id)?;
        if enrollments.is_empty() {
            return Ok(MonthlyDue::NothingDue);
        }

        let invoice = match &self.mode {
            BillingMode::DailyPercent => {
                let mut subtotal = Decimal::ZERO;
                let mut surcharge = Decimal::ZERO;
                for enrollment in &enrollments {
                    let due = daily_percent_due(
                        enrollment.monthly_fee,
                        enrollment.due_day,
                        enrollment.daily_late_pct,
                        reference,
                    )?;
                    subtotal += due.subtotal;
                    surcharge += due.surcharge;
                }
                InvoiceTotal::new(subtotal, surcharge)
            }
            BillingMode::FlatCutoff { cutoff, surcharge } => {
                let subtotal: Decimal = enrollments
                    .iter()
                    .map(|enrollment| enrollment.monthly_fee)
                    .sum();
                flat_cutoff_due(subtotal, reference, *cutoff, *surcharge)?
            }
        };

        info!(
            "event=monthly_due module=billing status=ok student={student_id} courses={} total={}",
            enrollments.len(),
            invoice.total
        );

        Ok(MonthlyDue::Due(invoice))
    }

    /// Reference string correlating payment links with this student.
    ///
    /// DNI when registered, stable ID otherwise.
    pub fn payment_reference(&self, student: &Student) -> String {
        student
            .dni
            .clone()
            .unwrap_or_else(|| student.id.to_string())
    }
}

//! Enrollment domain model.
//!
//! # Responsibility
//! - Carry the billing parameters of one student/course pairing.
//!
//! # Invariants
//! - `due_day` stays within 1..=31; clamping to the actual month length
//!   happens at calculation time, not here.
//! - `monthly_fee` and `daily_late_pct` are never negative.

use crate::model::student::StudentId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an enrollment record.
pub type EnrollmentId = Uuid;

/// One course a student is enrolled in, with its monthly billing terms.
///
/// `daily_late_pct` is only consulted in the per-day-late deployment
/// mode; flat-cutoff deployments take their surcharge from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub course_title: String,
    /// Base fee for one calendar month, in the deployment currency.
    pub monthly_fee: Decimal,
    /// Day-of-month the fee is due, 1..=31.
    pub due_day: u8,
    /// Percentage of the base fee added per day overdue (e.g. `1` = 1%).
    pub daily_late_pct: Decimal,
}

/// Validation failure for enrollment records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentValidationError {
    BlankCourseTitle,
    NegativeFee(Decimal),
    DueDayOutOfRange(u8),
    NegativeLatePct(Decimal),
}

impl Display for EnrollmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankCourseTitle => write!(f, "course title must not be blank"),
            Self::NegativeFee(fee) => write!(f, "monthly fee must not be negative, got {fee}"),
            Self::DueDayOutOfRange(day) => {
                write!(f, "due day must be within 1..=31, got {day}")
            }
            Self::NegativeLatePct(pct) => {
                write!(f, "daily late percentage must not be negative, got {pct}")
            }
        }
    }
}

impl Error for EnrollmentValidationError {}

impl Enrollment {
    /// Creates an enrollment with a generated stable ID and no late
    /// percentage.
    pub fn new(
        student_id: StudentId,
        course_title: impl Into<String>,
        monthly_fee: Decimal,
        due_day: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            course_title: course_title.into(),
            monthly_fee,
            due_day,
            daily_late_pct: Decimal::ZERO,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), EnrollmentValidationError> {
        if self.course_title.trim().is_empty() {
            return Err(EnrollmentValidationError::BlankCourseTitle);
        }
        if self.monthly_fee < Decimal::ZERO {
            return Err(EnrollmentValidationError::NegativeFee(self.monthly_fee));
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(EnrollmentValidationError::DueDayOutOfRange(self.due_day));
        }
        if self.daily_late_pct < Decimal::ZERO {
            return Err(EnrollmentValidationError::NegativeLatePct(
                self.daily_late_pct,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Enrollment, EnrollmentValidationError};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn valid_enrollment_passes() {
        let enrollment = Enrollment::new(Uuid::new_v4(), "Taller de pintura", dec!(5000), 10);
        assert_eq!(enrollment.validate(), Ok(()));
    }

    #[test]
    fn due_day_zero_is_rejected() {
        let enrollment = Enrollment::new(Uuid::new_v4(), "Taller", dec!(5000), 0);
        assert_eq!(
            enrollment.validate(),
            Err(EnrollmentValidationError::DueDayOutOfRange(0))
        );
    }

    #[test]
    fn due_day_32_is_rejected() {
        let enrollment = Enrollment::new(Uuid::new_v4(), "Taller", dec!(5000), 32);
        assert_eq!(
            enrollment.validate(),
            Err(EnrollmentValidationError::DueDayOutOfRange(32))
        );
    }

    #[test]
    fn negative_fee_is_rejected() {
        let enrollment = Enrollment::new(Uuid::new_v4(), "Taller", dec!(-100), 10);
        assert_eq!(
            enrollment.validate(),
            Err(EnrollmentValidationError::NegativeFee(dec!(-100)))
        );
    }

    #[test]
    fn negative_late_pct_is_rejected() {
        let mut enrollment = Enrollment::new(Uuid::new_v4(), "Taller", dec!(5000), 10);
        enrollment.daily_late_pct = dec!(-1);
        assert_eq!(
            enrollment.validate(),
            Err(EnrollmentValidationError::NegativeLatePct(dec!(-1)))
        );
    }
}

//! Pure fee calculators for both deployment modes.
//!
//! # Responsibility
//! - Mode A: per-day-late percentage over a clamped due day.
//! - Mode B: flat surcharge once a calendar cutoff date is reached.
//!
//! # Invariants
//! - Amounts stay in `Decimal` end to end; rounding is a display concern.
//! - `days_late` is never negative.
//! - A deployment uses exactly one mode; the two are never merged.

use crate::model::invoice::InvoiceTotal;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FeeResult<T> = Result<T, FeeError>;

/// Validation failure raised by either calculation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// Base fee or subtotal below zero.
    NegativeAmount(Decimal),
    /// Due day outside 1..=31.
    DueDayOutOfRange(u8),
    /// Per-day late percentage below zero.
    NegativeRate(Decimal),
    /// Flat surcharge below zero.
    NegativeSurcharge(Decimal),
}

impl Display for FeeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "amount must not be negative, got {amount}")
            }
            Self::DueDayOutOfRange(day) => {
                write!(f, "due day must be within 1..=31, got {day}")
            }
            Self::NegativeRate(rate) => {
                write!(f, "daily late percentage must not be negative, got {rate}")
            }
            Self::NegativeSurcharge(surcharge) => {
                write!(f, "flat surcharge must not be negative, got {surcharge}")
            }
        }
    }
}

impl Error for FeeError {}

/// Mode A: one month's fee with a percentage surcharge per day overdue.
///
/// The effective due date lives in `reference`'s month with its day
/// clamped to that month's length, so `due_day = 31` is payable on the
/// 30th of a 30-day month.
///
/// # Errors
/// - [`FeeError::NegativeAmount`] when `base < 0`.
/// - [`FeeError::DueDayOutOfRange`] when `due_day` is 0 or above 31.
/// - [`FeeError::NegativeRate`] when `daily_late_pct < 0`.
pub fn daily_percent_due(
    base: Decimal,
    due_day: u8,
    daily_late_pct: Decimal,
    reference: NaiveDate,
) -> FeeResult<InvoiceTotal> {
    if base < Decimal::ZERO {
        return Err(FeeError::NegativeAmount(base));
    }
    if !(1..=31).contains(&due_day) {
        return Err(FeeError::DueDayOutOfRange(due_day));
    }
    if daily_late_pct < Decimal::ZERO {
        return Err(FeeError::NegativeRate(daily_late_pct));
    }

    let due_date = effective_due_date(reference, due_day);
    let days_late = (reference - due_date).num_days().max(0);
    let surcharge = base * (daily_late_pct / Decimal::ONE_HUNDRED) * Decimal::from(days_late);

    Ok(InvoiceTotal::new(base, surcharge))
}

/// Mode B: flat surcharge applied from the cutoff date onward.
///
/// `subtotal` may already be the sum of several course fees for the
/// period; the surcharge is applied once, not per course.
///
/// # Errors
/// - [`FeeError::NegativeAmount`] when `subtotal < 0`.
/// - [`FeeError::NegativeSurcharge`] when `flat_surcharge < 0`.
pub fn flat_cutoff_due(
    subtotal: Decimal,
    reference: NaiveDate,
    cutoff: NaiveDate,
    flat_surcharge: Decimal,
) -> FeeResult<InvoiceTotal> {
    if subtotal < Decimal::ZERO {
        return Err(FeeError::NegativeAmount(subtotal));
    }
    if flat_surcharge < Decimal::ZERO {
        return Err(FeeError::NegativeSurcharge(flat_surcharge));
    }

    let surcharge = if reference >= cutoff {
        flat_surcharge
    } else {
        Decimal::ZERO
    };

    Ok(InvoiceTotal::new(subtotal, surcharge))
}

/// Due date in `reference`'s month with the day clamped to month length.
fn effective_due_date(reference: NaiveDate, due_day: u8) -> NaiveDate {
    let last_day = last_day_of_month(reference.year(), reference.month());
    let day = u32::from(due_day).min(last_day);
    NaiveDate::from_ymd_opt(reference.year(), reference.month(), day)
        .expect("clamped day is within month length")
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first day of month is always valid")
        .pred_opt()
        .expect("day before the first of a month exists")
        .day()
}

#[cfg(test)]
mod tests {
    use super::{effective_due_date, last_day_of_month};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_lengths_account_for_leap_years() {
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(2025, 2), 28);
        assert_eq!(last_day_of_month(2025, 4), 30);
        assert_eq!(last_day_of_month(2025, 12), 31);
    }

    #[test]
    fn due_day_is_clamped_to_month_length() {
        assert_eq!(
            effective_due_date(date(2025, 4, 15), 31),
            date(2025, 4, 30)
        );
        assert_eq!(
            effective_due_date(date(2024, 2, 10), 31),
            date(2024, 2, 29)
        );
        assert_eq!(effective_due_date(date(2025, 7, 1), 10), date(2025, 7, 10));
    }
}

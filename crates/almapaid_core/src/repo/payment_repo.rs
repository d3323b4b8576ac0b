//! Payment settlement store.
//!
//! # Responsibility
//! - Persist one settlement record per payment reference.
//!
//! # Invariants
//! - Writes are atomic upserts keyed by reference; re-recording the same
//!   reference replaces the previous settlement.
//! - Settlement state lives in SQLite, not in process memory, so it
//!   survives restarts and concurrent request handlers.

use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

/// One settled payment, keyed by the reference string carried on the
/// payment link and its return trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub reference: String,
    pub amount: Decimal,
    pub paid_on: NaiveDate,
}

/// Repository interface for settlement lookups and recording.
pub trait PaymentRepository {
    fn record_settlement(&self, settlement: &Settlement) -> RepoResult<()>;
    fn get_settlement(&self, reference: &str) -> RepoResult<Option<Settlement>>;
    fn is_settled(&self, reference: &str) -> RepoResult<bool>;
}

/// SQLite-backed settlement repository.
pub struct SqlitePaymentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePaymentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PaymentRepository for SqlitePaymentRepository<'_> {
    fn record_settlement(&self, settlement: &Settlement) -> RepoResult<()> {
        if settlement.reference.trim().is_empty() {
            return Err(RepoError::InvalidSettlement(
                "reference must not be blank".to_string(),
            ));
        }
        if settlement.amount < Decimal::ZERO {
            return Err(RepoError::InvalidSettlement(format!(
                "amount must not be negative, got {}",
                settlement.amount
            )));
        }

        self.conn.execute(
            "INSERT INTO payments (reference, amount, paid_on)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(reference) DO UPDATE SET
                amount = excluded.amount,
                paid_on = excluded.paid_on;",
            params![
                settlement.reference.as_str(),
                settlement.amount.to_string(),
                settlement.paid_on.to_string(),
            ],
        )?;

        Ok(())
    }

    fn get_settlement(&self, reference: &str) -> RepoResult<Option<Settlement>> {
        let mut stmt = self.conn.prepare(
            "SELECT reference, amount, paid_on
             FROM payments
             WHERE reference = ?1;",
        )?;

        let mut rows = stmt.query(params![reference])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_settlement_row(row)?));
        }

        Ok(None)
    }

    fn is_settled(&self, reference: &str) -> RepoResult<bool> {
        let settled: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM payments WHERE reference = ?1);",
            params![reference],
            |row| row.get(0),
        )?;
        Ok(settled == 1)
    }
}

fn parse_settlement_row(row: &Row<'_>) -> RepoResult<Settlement> {
    let amount_text: String = row.get("amount")?;
    let amount = Decimal::from_str(&amount_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid decimal `{amount_text}` in payments.amount"))
    })?;

    let paid_on_text: String = row.get("paid_on")?;
    let paid_on = NaiveDate::from_str(&paid_on_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid date `{paid_on_text}` in payments.paid_on"))
    })?;

    Ok(Settlement {
        reference: row.get("reference")?,
        amount,
        paid_on,
    })
}

//! Enrollment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and load the billing terms of student/course pairings.
//!
//! # Invariants
//! - Money columns hold decimal strings; reads that fail to parse are
//!   surfaced as `InvalidData`, never coerced.

use crate::model::enrollment::{Enrollment, EnrollmentId};
use crate::model::student::StudentId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

const ENROLLMENT_SELECT_SQL: &str = "SELECT
    id,
    student_id,
    course_title,
    monthly_fee,
    due_day,
    daily_late_pct
FROM enrollments";

/// Repository interface for enrollment access.
pub trait EnrollmentRepository {
    fn create_enrollment(&self, enrollment: &Enrollment) -> RepoResult<EnrollmentId>;
    fn list_for_student(&self, student_id: StudentId) -> RepoResult<Vec<Enrollment>>;
}

/// SQLite-backed enrollment repository.
pub struct SqliteEnrollmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEnrollmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EnrollmentRepository for SqliteEnrollmentRepository<'_> {
    fn create_enrollment(&self, enrollment: &Enrollment) -> RepoResult<EnrollmentId> {
        enrollment.validate()?;

        self.conn.execute(
            "INSERT INTO enrollments (
                id,
                student_id,
                course_title,
                monthly_fee,
                due_day,
                daily_late_pct
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                enrollment.id.to_string(),
                enrollment.student_id.to_string(),
                enrollment.course_title.as_str(),
                enrollment.monthly_fee.to_string(),
                i64::from(enrollment.due_day),
                enrollment.daily_late_pct.to_string(),
            ],
        )?;

        Ok(enrollment.id)
    }

    fn list_for_student(&self, student_id: StudentId) -> RepoResult<Vec<Enrollment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENROLLMENT_SELECT_SQL}
             WHERE student_id = ?1
             ORDER BY course_title ASC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![student_id.to_string()])?;
        let mut enrollments = Vec::new();

        while let Some(row) = rows.next()? {
            enrollments.push(parse_enrollment_row(row)?);
        }

        Ok(enrollments)
    }
}

fn parse_enrollment_row(row: &Row<'_>) -> RepoResult<Enrollment> {
    let id = parse_uuid_column(row, "id")?;
    let student_id = parse_uuid_column(row, "student_id")?;

    let fee_text: String = row.get("monthly_fee")?;
    let monthly_fee = parse_decimal(&fee_text, "enrollments.monthly_fee")?;

    let pct_text: String = row.get("daily_late_pct")?;
    let daily_late_pct = parse_decimal(&pct_text, "enrollments.daily_late_pct")?;

    let due_day_raw: i64 = row.get("due_day")?;
    let due_day = u8::try_from(due_day_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid due day `{due_day_raw}` in enrollments.due_day"
        ))
    })?;

    let enrollment = Enrollment {
        id,
        student_id,
        course_title: row.get("course_title")?,
        monthly_fee,
        due_day,
        daily_late_pct,
    };
    enrollment.validate()?;
    Ok(enrollment)
}

fn parse_uuid_column(row: &Row<'_>, column: &str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{text}` in enrollments.{column}"))
    })
}

fn parse_decimal(text: &str, column: &str) -> RepoResult<Decimal> {
    Decimal::from_str(text)
        .map_err(|_| RepoError::InvalidData(format!("invalid decimal `{text}` in {column}")))
}

//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide read/write access to the student roster.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `create_student` validates before inserting.
//! - List order is deterministic (name, then id).

use crate::model::student::{Student, StudentId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    dni,
    email,
    phone,
    status
FROM students";

/// Repository interface for roster access.
pub trait StudentRepository {
    fn create_student(&self, student: &Student) -> RepoResult<StudentId>;
    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>>;
    fn find_by_dni(&self, dni: &str) -> RepoResult<Option<Student>>;
    fn list_students(&self) -> RepoResult<Vec<Student>>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn create_student(&self, student: &Student) -> RepoResult<StudentId> {
        student.validate()?;

        self.conn.execute(
            "INSERT INTO students (id, name, dni, email, phone, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                student.id.to_string(),
                student.name.as_str(),
                student.dni.as_deref(),
                student.email.as_deref(),
                student.phone.as_deref(),
                student.status.as_deref(),
            ],
        )?;

        Ok(student.id)
    }

    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }

        Ok(None)
    }

    fn find_by_dni(&self, dni: &str) -> RepoResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE dni = ?1;"))?;

        let mut rows = stmt.query(params![dni])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }

        Ok(None)
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY name ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in students.id"))
    })?;

    let student = Student {
        id,
        name: row.get("name")?,
        dni: row.get("dni")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        status: row.get("status")?,
    };
    student.validate()?;
    Ok(student)
}

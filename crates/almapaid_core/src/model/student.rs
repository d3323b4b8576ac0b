//! Student domain model.
//!
//! # Responsibility
//! - Define the student record staff search against.
//! - Expose the searchable text surface as an explicit contract.
//!
//! # Invariants
//! - `id` is stable and never reused for another student.
//! - `search_blob()` covers exactly the fields listed in
//!   `SEARCHABLE_FIELDS`; widening the surface requires editing both.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a student record.
pub type StudentId = Uuid;

/// Versioned list of fields the matcher indexes (v1).
///
/// Kept as a reviewable constant so the searchable surface is a contract,
/// not an accident of storage layout.
pub const SEARCHABLE_FIELDS: &[&str] = &["name", "dni", "email", "phone", "status"];

/// One student as read from storage.
///
/// Optional fields mirror the roster data, where national ID, contact
/// details and enrollment status are only known for some students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Stable global ID used for linking enrollments and payments.
    pub id: StudentId,
    /// Full display name. Must not be blank.
    pub name: String,
    /// National identity number, when registered.
    pub dni: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Free-form roster status label ("activo", "baja", ...).
    pub status: Option<String>,
}

/// Validation failure for student records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    BlankName,
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "student name must not be blank"),
        }
    }
}

impl Error for StudentValidationError {}

impl Student {
    /// Creates a student with a generated stable ID and no optional data.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a student with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dni: None,
            email: None,
            phone: None,
            status: None,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.name.trim().is_empty() {
            return Err(StudentValidationError::BlankName);
        }
        Ok(())
    }

    /// Field name/value pairs of the searchable surface, in
    /// [`SEARCHABLE_FIELDS`] order.
    ///
    /// Single source for both the blob and the published field list, so
    /// the two cannot drift apart.
    pub fn searchable_values(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("name", Some(self.name.as_str())),
            ("dni", self.dni.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("status", self.status.as_deref()),
        ]
    }

    /// Lowercased concatenation of every populated searchable field.
    ///
    /// Fields are joined with `\n` so a term can never match across a
    /// field boundary.
    pub fn search_blob(&self) -> String {
        let mut blob = String::new();
        for (_, value) in self.searchable_values() {
            if let Some(value) = value {
                if !blob.is_empty() {
                    blob.push('\n');
                }
                blob.push_str(&value.to_lowercase());
            }
        }
        blob
    }

    /// One-line summary for disambiguation lists shown to staff.
    pub fn summary_line(&self) -> String {
        let mut line = self.name.clone();
        if let Some(dni) = &self.dni {
            line.push_str(&format!(" - DNI: {dni}"));
        }
        if let Some(email) = &self.email {
            line.push_str(&format!(" - Email: {email}"));
        }
        if let Some(status) = &self.status {
            line.push_str(&format!(" - Estado: {status}"));
        }
        line
    }
}

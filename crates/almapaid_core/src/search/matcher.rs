//! Case-insensitive substring matcher over student records.
//!
//! # Responsibility
//! - Decide which students a free-text term refers to.
//!
//! # Invariants
//! - Pure function: no side effects, no hidden state.
//! - A blank term matches nothing.
//! - No fuzzy matching, tokenization or ranking; containment only.

use crate::model::student::Student;

/// Returns the students whose searchable fields contain `term`.
///
/// Matching is case-insensitive substring containment against each
/// student's [`Student::search_blob`]. Input order is preserved; result
/// order carries no semantic meaning. Blank or whitespace-only terms
/// return an empty result, and callers are expected to skip the matcher
/// entirely when the term is empty.
pub fn match_students<'a>(term: &str, students: &'a [Student]) -> Vec<&'a Student> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    students
        .iter()
        .filter(|student| student.search_blob().contains(&needle))
        .collect()
}

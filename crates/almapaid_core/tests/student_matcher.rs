use almapaid_core::{match_students, Student};

fn roster() -> Vec<Student> {
    let mut perez = Student::new("Ana Perez");
    perez.dni = Some("30123456".to_string());
    perez.email = Some("ana.perez@example.com".to_string());
    perez.status = Some("activo".to_string());

    let mut gomez = Student::new("Juan Gomez");
    gomez.dni = Some("28999888".to_string());
    gomez.phone = Some("+54 11 5555-0000".to_string());

    let lopez = Student::new("Maria Lopez Perez");

    vec![perez, gomez, lopez]
}

#[test]
fn any_term_on_empty_roster_matches_nothing() {
    assert!(match_students("perez", &[]).is_empty());
    assert!(match_students("", &[]).is_empty());
}

#[test]
fn empty_term_on_populated_roster_matches_nothing() {
    let students = roster();
    assert!(match_students("", &students).is_empty());
    assert!(match_students("  \t ", &students).is_empty());
}

#[test]
fn matching_is_case_insensitive_in_both_directions() {
    let students = roster();
    let variants = ["PEREZ", "perez", "Perez", "pErEz"];
    let baseline = match_students("perez", &students);
    assert_eq!(baseline.len(), 2);
    for variant in variants {
        assert_eq!(match_students(variant, &students), baseline);
    }
}

#[test]
fn one_match_identifies_a_unique_student() {
    let students = roster();
    let matches = match_students("gomez", &students);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Juan Gomez");
}

#[test]
fn dni_phone_email_and_status_are_all_searchable() {
    let students = roster();
    assert_eq!(match_students("30123456", &students).len(), 1);
    assert_eq!(match_students("5555-0000", &students).len(), 1);
    assert_eq!(match_students("ana.perez@", &students).len(), 1);
    assert_eq!(match_students("activo", &students).len(), 1);
}

#[test]
fn partial_substrings_match() {
    let students = roster();
    assert_eq!(match_students("301", &students).len(), 1);
    assert_eq!(match_students("lop", &students).len(), 1);
}

#[test]
fn result_preserves_roster_order() {
    let students = roster();
    let matches = match_students("perez", &students);
    assert_eq!(matches[0].name, "Ana Perez");
    assert_eq!(matches[1].name, "Maria Lopez Perez");
}

#[test]
fn unmatched_term_returns_empty_not_error() {
    let students = roster();
    assert!(match_students("zzz-no-such-student", &students).is_empty());
}

//! Login flows for students, teachers, and parents.
//!
//! Credentials live in the same document the dashboards render from; the
//! comparisons here are plaintext string matches, kept for compatibility
//! with the original portal. A failed match is `Ok(None)`, never an error:
//! the calling dashboard owns the "Invalid credentials" messaging.

use crate::error::AuthError;
use slatebook_models::Session;
use slatebook_store::Store;
use tracing::{debug, instrument};

/// Log a student in by full name and admission number.
///
/// Name matching is case-insensitive; the admission number must match
/// exactly.
#[instrument(skip(store, admission_number))]
pub fn login_student(
    store: &Store,
    name: &str,
    admission_number: &str,
) -> Result<Option<Session>, AuthError> {
    let student = store.students()?.into_iter().find(|s| {
        s.name.eq_ignore_ascii_case(name) && s.admission_number == admission_number
    });

    Ok(student.map(|s| {
        debug!(student_id = %s.id, "student login succeeded");
        Session::student(s.id.to_string(), s.name, s.class_name)
    }))
}

/// Log a teacher in by email and password.
///
/// Email matching is case-insensitive; the password comparison is exact.
#[instrument(skip(store, password))]
pub fn login_teacher(
    store: &Store,
    email: &str,
    password: &str,
) -> Result<Option<Session>, AuthError> {
    let teacher = store
        .teachers()?
        .into_iter()
        .find(|t| t.email.eq_ignore_ascii_case(email) && t.password == password);

    Ok(teacher.map(|t| {
        debug!(teacher_id = %t.id, "teacher login succeeded");
        Session::teacher(t.id.to_string(), t.name, t.subjects)
    }))
}

/// Log a parent in by email and the child's admission number.
#[instrument(skip(store, child_admission_number))]
pub fn login_parent(
    store: &Store,
    email: &str,
    child_admission_number: &str,
) -> Result<Option<Session>, AuthError> {
    let parent = store.parents()?.into_iter().find(|p| {
        p.email.eq_ignore_ascii_case(email)
            && p.child_admission_number == child_admission_number
    });

    Ok(parent.map(|p| {
        debug!(parent_id = %p.id, "parent login succeeded");
        Session::parent(p.id.to_string(), p.name, p.child_id.to_string())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slatebook_core::MemoryStorage;
    use slatebook_models::UserRole;

    fn seeded_store() -> Store {
        Store::open(Box::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_student_login_is_name_case_insensitive() {
        let store = seeded_store();
        let session = login_student(&store, "JOHN DOE", "AS2024001")
            .unwrap()
            .unwrap();
        assert_eq!(session.user_type, UserRole::Student);
        assert_eq!(session.user_class.as_deref(), Some("JSS 1"));
    }

    #[test]
    fn test_student_login_requires_exact_admission_number() {
        let store = seeded_store();
        assert!(login_student(&store, "John Doe", "as2024001").unwrap().is_none());
        assert!(login_student(&store, "John Doe", "AS2024999").unwrap().is_none());
    }

    #[test]
    fn test_teacher_login_checks_password_exactly() {
        let store = seeded_store();
        assert!(
            login_teacher(&store, "Sarah.Johnson@accuratestep.edu.ng", "Teacher@123")
                .unwrap()
                .is_some()
        );
        assert!(
            login_teacher(&store, "sarah.johnson@accuratestep.edu.ng", "teacher@123")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_parent_login_links_child() {
        let store = seeded_store();
        let session = login_parent(&store, "parent.doe@email.com", "AS2024001")
            .unwrap()
            .unwrap();
        assert_eq!(session.user_type, UserRole::Parent);
        assert_eq!(session.child_id.as_deref(), Some("STU001"));
    }
}

//! Registration flows.
//!
//! The store appends records unconditionally; every uniqueness and policy
//! check the portal promises happens here first. Each function returns the
//! created record so callers can show confirmation details.

use crate::error::RegistrationError;
use crate::password;
use chrono::Utc;
use slatebook_models::{
    Parent, ParentId, RegisterParentDto, RegisterStudentDto, RegisterTeacherDto, Student,
    StudentId, Teacher, TeacherId, catalog,
};
use slatebook_store::Store;
use tracing::{info, instrument};
use validator::Validate;

/// Register a new student.
///
/// Rejects duplicate admission numbers. The initial password is the
/// admission number itself, and the subject set derives from the class.
#[instrument(skip(store, dto), fields(admission_number = %dto.admission_number))]
pub fn register_student(
    store: &Store,
    dto: RegisterStudentDto,
) -> Result<Student, RegistrationError> {
    dto.validate()?;

    if store
        .student_by_admission_number(&dto.admission_number)?
        .is_some()
    {
        return Err(RegistrationError::DuplicateAdmissionNumber(
            dto.admission_number,
        ));
    }

    let student = Student {
        id: StudentId::generate(),
        name: dto.name,
        password: dto.admission_number.clone(),
        subjects: catalog::subjects_for_class(&dto.class_name),
        admission_number: dto.admission_number,
        class_name: dto.class_name,
        can_change_password: true,
        email: None,
        parent_email: None,
        results: vec![],
        attendance: 0,
        date_enrolled: Some(Utc::now().date_naive()),
    };

    store.add_student(student.clone())?;
    info!(student_id = %student.id, "student registered");
    Ok(student)
}

/// Register a new teacher.
///
/// Enforces the password policy and rejects duplicate emails
/// (case-insensitively).
#[instrument(skip(store, dto), fields(email = %dto.email))]
pub fn register_teacher(
    store: &Store,
    dto: RegisterTeacherDto,
) -> Result<Teacher, RegistrationError> {
    dto.validate()?;

    if !password::meets_policy(&dto.password) {
        return Err(RegistrationError::WeakPassword);
    }

    if store.teacher_by_email(&dto.email)?.is_some() {
        return Err(RegistrationError::DuplicateEmail(dto.email));
    }

    let teacher = Teacher {
        id: TeacherId::generate(),
        name: dto.name,
        email: dto.email,
        password: dto.password,
        subjects: dto.subjects,
        classes: vec![],
        date_joined: Utc::now(),
    };

    store.add_teacher(teacher.clone())?;
    info!(teacher_id = %teacher.id, "teacher registered");
    Ok(teacher)
}

/// Create a parent account linked to an existing student (admin flow).
///
/// Fails when no student carries the given admission number.
#[instrument(skip(store, dto), fields(child_admission = %dto.child_admission_number))]
pub fn register_parent(
    store: &Store,
    dto: RegisterParentDto,
) -> Result<Parent, RegistrationError> {
    dto.validate()?;

    let child = store
        .student_by_admission_number(&dto.child_admission_number)?
        .ok_or_else(|| {
            RegistrationError::UnknownAdmissionNumber(dto.child_admission_number.clone())
        })?;

    let parent = Parent {
        id: ParentId::generate(),
        name: dto.name,
        email: dto.email,
        child_id: child.id,
        child_admission_number: dto.child_admission_number,
        phone_number: dto.phone_number,
        fees_paid: vec![],
    };

    store.add_parent(parent.clone())?;
    info!(parent_id = %parent.id, "parent account created");
    Ok(parent)
}

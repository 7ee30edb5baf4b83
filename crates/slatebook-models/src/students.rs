//! Student domain models and DTOs.
//!
//! This module contains the student entity as it is persisted in the
//! document, the partial-update type used by the store's shallow merge, and
//! the registration DTO validated by the calling form logic.

use crate::ids::{ResultId, StudentId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A student record within the document's `students` collection.
///
/// Field names serialize in camelCase to keep the persisted document
/// byte-compatible with the original portal layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Unique by convention; uniqueness is pre-checked by registration,
    /// never by the store.
    pub admission_number: String,
    #[serde(rename = "class")]
    pub class_name: String,
    /// Stored in plaintext for compatibility with the original portal.
    /// Defaults to the admission number at registration.
    pub password: String,
    #[serde(default = "default_true")]
    pub can_change_password: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_email: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    /// References into the top-level `results` collection. Dangling ids are
    /// tolerated: lookups simply come back empty.
    #[serde(default)]
    pub results: Vec<ResultId>,
    /// Attendance percentage, 0-100.
    #[serde(default)]
    pub attendance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_enrolled: Option<NaiveDate>,
}

fn default_true() -> bool {
    true
}

/// Partial update applied to a student via the store's shallow merge.
///
/// `None` fields leave the current value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdate {
    pub name: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub parent_email: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub attendance: Option<u32>,
}

impl StudentUpdate {
    /// Shallow-merge this update over an existing student in place.
    pub fn apply_to(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(class_name) = self.class_name {
            student.class_name = class_name;
        }
        if let Some(password) = self.password {
            student.password = password;
        }
        if let Some(email) = self.email {
            student.email = Some(email);
        }
        if let Some(parent_email) = self.parent_email {
            student.parent_email = Some(parent_email);
        }
        if let Some(subjects) = self.subjects {
            student.subjects = subjects;
        }
        if let Some(attendance) = self.attendance {
            student.attendance = attendance;
        }
    }
}

/// DTO for registering a new student through the portal.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub admission_number: String,
    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "class")]
    pub class_name: String,
}

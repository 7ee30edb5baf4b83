//! Teacher domain models and DTOs.

use crate::ids::TeacherId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A teacher record within the document's `teachers` collection.
///
/// The email is unique case-insensitively by convention; registration
/// pre-checks it, the store does not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub email: String,
    /// Stored in plaintext for compatibility with the original portal.
    pub password: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    pub date_joined: DateTime<Utc>,
}

/// Partial update applied to a teacher via the store's shallow merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub classes: Option<Vec<String>>,
}

impl TeacherUpdate {
    /// Shallow-merge this update over an existing teacher in place.
    pub fn apply_to(self, teacher: &mut Teacher) {
        if let Some(name) = self.name {
            teacher.name = name;
        }
        if let Some(password) = self.password {
            teacher.password = password;
        }
        if let Some(subjects) = self.subjects {
            teacher.subjects = subjects;
        }
        if let Some(classes) = self.classes {
            teacher.classes = classes;
        }
    }
}

/// DTO for registering a new teacher through the portal.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeacherDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Must additionally satisfy the portal password policy
    /// (uppercase + lowercase + digit).
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(length(min = 1, message = "select at least one subject"))]
    pub subjects: Vec<String>,
}

//! The aggregate document.
//!
//! Everything the portal persists lives in one root object: every entity
//! collection plus the settings singleton, serialized as a single JSON blob
//! under one storage key. Collections deserialize via `#[serde(default)]`,
//! so a document written by an older portal that lacked some collection
//! loads cleanly; the current schema version is stamped back on the next
//! write. This replaces the original's per-access "default to empty"
//! behavior with one explicit load-time migration point.

use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use slatebook_models::{
    Announcement, Assessment, BankAccount, GalleryItem, LessonNote, Parent, ParentId, Payment,
    Settings, Student, StudentId, SubjectResult, Teacher, TeacherId, Video,
};

/// Version stamped into documents written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// The single root object holding all persisted portal state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDocument {
    /// Absent in documents written before versioning existed; treated as 0.
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub parents: Vec<Parent>,
    #[serde(default)]
    pub lesson_notes: Vec<LessonNote>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default)]
    pub results: Vec<SubjectResult>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    pub settings: Settings,
}

impl SchoolDocument {
    /// The seed document written once at first use: one example student,
    /// teacher and parent, empty remaining collections, and the school's
    /// default settings.
    pub fn seed() -> Self {
        let student = Student {
            id: StudentId::from("STU001"),
            name: "John Doe".to_string(),
            admission_number: "AS2024001".to_string(),
            class_name: "JSS 1".to_string(),
            password: "AS2024001".to_string(),
            can_change_password: true,
            email: Some("john.doe@student.com".to_string()),
            parent_email: Some("parent.doe@email.com".to_string()),
            subjects: [
                "Mathematics",
                "English Language",
                "Basic Science",
                "Social Studies",
                "Computer Studies",
                "Civic Education",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            results: vec![],
            attendance: 95,
            date_enrolled: NaiveDate::from_ymd_opt(2024, 9, 1),
        };

        let teacher = Teacher {
            id: TeacherId::from("TCH001"),
            name: "Mrs. Sarah Johnson".to_string(),
            email: "sarah.johnson@accuratestep.edu.ng".to_string(),
            password: "Teacher@123".to_string(),
            subjects: vec!["Mathematics".to_string(), "Further Mathematics".to_string()],
            classes: vec!["JSS 1".to_string(), "SS 2 Ruby (Science)".to_string()],
            date_joined: Utc
                .with_ymd_and_hms(2020, 1, 15, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        };

        let parent = Parent {
            id: ParentId::from("PAR001"),
            name: "Mr. Doe".to_string(),
            email: "parent.doe@email.com".to_string(),
            child_id: StudentId::from("STU001"),
            child_admission_number: "AS2024001".to_string(),
            phone_number: "+234 XXX XXX XXXX".to_string(),
            fees_paid: vec![],
        };

        Self {
            version: SCHEMA_VERSION,
            students: vec![student],
            teachers: vec![teacher],
            parents: vec![parent],
            lesson_notes: vec![],
            videos: vec![],
            assessments: vec![],
            results: vec![],
            gallery: vec![],
            payments: vec![],
            announcements: vec![],
            settings: Settings {
                school_name: "Accurate Step International School".to_string(),
                address: "Kabusa, Behind Living Faith Church, Abuja".to_string(),
                email: "info@accuratestepschool.edu.ng".to_string(),
                phone: "+234 XXX XXX XXXX".to_string(),
                current_session: "2024/2025".to_string(),
                current_term: "First Term".to_string(),
                bank_account: BankAccount {
                    bank_name: "First Bank of Nigeria".to_string(),
                    account_number: "1234567890".to_string(),
                    account_name: "Accurate Step International School".to_string(),
                },
            },
        }
    }

    /// Whether this document predates the current schema.
    ///
    /// Missing collections have already been filled with empty defaults at
    /// deserialization time; the version is stamped on the next write.
    pub fn needs_migration(&self) -> bool {
        self.version < SCHEMA_VERSION
    }
}

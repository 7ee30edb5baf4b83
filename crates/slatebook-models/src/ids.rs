//! Strongly-typed ID newtypes for domain entities.
//!
//! This module provides newtype wrappers around the generated id strings for
//! each entity type, preventing accidental misuse of ids (e.g., passing a
//! `TeacherId` where a `StudentId` is expected). The wrapped string keeps the
//! persisted document format unchanged: ids serialize as plain strings.
//!
//! # Example
//!
//! ```ignore
//! use slatebook_models::ids::{StudentId, TeacherId};
//!
//! fn get_student(id: &StudentId) { /* ... */ }
//!
//! let student_id = StudentId::generate();
//! get_student(&student_id);          // OK
//! // get_student(&TeacherId::generate()); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use slatebook_core::generate_id;
use std::fmt;

/// Macro to define a strongly-typed ID newtype.
///
/// Generates a newtype wrapper around `String` with the entity's id prefix,
/// serde transparency, and the trait implementations needed for lookups and
/// display.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// The prefix stamped onto generated ids of this type.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a new practically-unique id.
            pub fn generate() -> Self {
                Self(generate_id($prefix))
            }

            /// Wrap an existing id string (e.g. one read back from a form).
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

define_id!(
    /// Identifier for a student record.
    StudentId, "STU"
);
define_id!(
    /// Identifier for a teacher record.
    TeacherId, "TCH"
);
define_id!(
    /// Identifier for a parent record.
    ParentId, "PAR"
);
define_id!(
    /// Identifier for a lesson note.
    LessonNoteId, "LSN"
);
define_id!(
    /// Identifier for a video resource.
    VideoId, "VID"
);
define_id!(
    /// Identifier for an assessment.
    AssessmentId, "ASM"
);
define_id!(
    /// Identifier for a published subject result.
    ResultId, "RES"
);
define_id!(
    /// Identifier for a gallery item.
    GalleryItemId, "GAL"
);
define_id!(
    /// Identifier for a fee payment record.
    PaymentId, "PAY"
);
define_id!(
    /// Identifier for an announcement.
    AnnouncementId, "ANN"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_carry_prefix() {
        assert!(StudentId::generate().as_str().starts_with("STU"));
        assert!(GalleryItemId::generate().as_str().starts_with("GAL"));
        assert!(AnnouncementId::generate().as_str().starts_with("ANN"));
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = StudentId::from("STU001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"STU001\"");

        let back: StudentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_from_string_round_trip() {
        let id = ParentId::from_string("PAR001");
        assert_eq!(id.as_str(), "PAR001");
        assert_eq!(id.to_string(), "PAR001");
    }
}

//! Published subject result models.
//!
//! Results live in the document's top-level `results` collection, keyed back
//! to students by id. The student record keeps a list of result ids as a
//! best-effort cross-reference.

use crate::ids::{ResultId, StudentId};
use serde::{Deserialize, Serialize};

/// One subject result for one student in one term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResult {
    pub id: ResultId,
    pub student_id: StudentId,
    pub subject: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub term: String,
    /// Continuous assessment score (out of 40 in the original portal).
    pub ca: u32,
    /// Examination score (out of 60 in the original portal).
    pub exam: u32,
    pub total: u32,
    pub grade: String,
    pub remark: String,
}

impl SubjectResult {
    /// Letter grade for a total score, using the original portal's bands.
    pub fn grade_for_total(total: u32) -> &'static str {
        match total {
            70.. => "A",
            60..=69 => "B",
            50..=59 => "C",
            40..=49 => "D",
            _ => "F",
        }
    }
}

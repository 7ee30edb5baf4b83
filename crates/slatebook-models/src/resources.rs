//! Teaching resource models: lesson notes, videos, and assessments.
//!
//! These records are uploaded by teachers and filtered by subject or class
//! on the student side. Each carries the class/subject/term foreign keys the
//! dashboards filter on.

use crate::ids::{AssessmentId, LessonNoteId, TeacherId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lesson note within the document's `lessonNotes` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonNote {
    pub id: LessonNoteId,
    pub title: String,
    pub subject: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub topic: String,
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    pub date: DateTime<Utc>,
}

/// A video resource within the document's `videos` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub subject: String,
    #[serde(default, rename = "class", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    pub date: DateTime<Utc>,
}

/// A continuous-assessment entry within the document's `assessments`
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: AssessmentId,
    pub title: String,
    pub subject: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_note_round_trip() {
        let note = LessonNote {
            id: LessonNoteId::generate(),
            title: "Fractions".to_string(),
            subject: "Mathematics".to_string(),
            class_name: "JSS 1".to_string(),
            topic: "Adding fractions".to_string(),
            term: "First Term".to_string(),
            content: None,
            teacher_id: Some(TeacherId::from("TCH001")),
            date: Utc::now(),
        };
        let json = serde_json::to_string(&note).unwrap();
        let back: LessonNote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn test_video_class_field_is_optional() {
        let json = r#"{
            "id": "VID123",
            "title": "Photosynthesis",
            "subject": "Biology",
            "url": "https://example.com/v/1",
            "date": "2024-10-01T08:00:00Z"
        }"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.class_name, None);
        assert_eq!(video.teacher_id, None);
    }
}

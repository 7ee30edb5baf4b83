//! School announcement models.

use crate::ids::AnnouncementId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An announcement within the document's `announcements` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

impl Announcement {
    /// Build a new announcement dated now.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: AnnouncementId::generate(),
            title: title.into(),
            message: message.into(),
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_announcement_gets_prefixed_id() {
        let ann = Announcement::new("Resumption", "School resumes on Monday.");
        assert!(ann.id.as_str().starts_with("ANN"));
        assert_eq!(ann.title, "Resumption");
    }
}

//! School gallery models.

use crate::ids::GalleryItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A photo within the document's `gallery` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: GalleryItemId,
    pub title: String,
    /// Free-form category label (e.g. "Sports", "Cultural Day").
    pub category: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_item_round_trip() {
        let item = GalleryItem {
            id: GalleryItemId::generate(),
            title: "Sports Day".to_string(),
            category: "Sports".to_string(),
            url: "https://example.com/photos/sports-day.jpg".to_string(),
            description: None,
            date: Utc::now(),
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: GalleryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}

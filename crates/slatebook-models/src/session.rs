//! Per-tab session identity.
//!
//! After a successful login the portal keeps a small identity value for the
//! lifetime of the tab: who is logged in, under which role, plus the
//! role-specific extras the dashboards need (class, subjects, child link).
//! The store is entirely agnostic to sessions; only the login flows produce
//! them and only the dashboards consume them.

use serde::{Deserialize, Serialize};

/// Role of the logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Parent,
    Admin,
}

/// Identity of the current logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_type: UserRole,
    pub user_id: String,
    pub user_name: String,
    /// Student sessions carry the class the student belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_class: Option<String>,
    /// Teacher sessions carry the subjects the teacher takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_subjects: Option<Vec<String>>,
    /// Parent sessions carry the linked child's student id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_id: Option<String>,
}

impl Session {
    pub fn student(user_id: String, user_name: String, user_class: String) -> Self {
        Self {
            user_type: UserRole::Student,
            user_id,
            user_name,
            user_class: Some(user_class),
            user_subjects: None,
            child_id: None,
        }
    }

    pub fn teacher(user_id: String, user_name: String, user_subjects: Vec<String>) -> Self {
        Self {
            user_type: UserRole::Teacher,
            user_id,
            user_name,
            user_class: None,
            user_subjects: Some(user_subjects),
            child_id: None,
        }
    }

    pub fn parent(user_id: String, user_name: String, child_id: String) -> Self {
        Self {
            user_type: UserRole::Parent,
            user_id,
            user_name,
            user_class: None,
            user_subjects: None,
            child_id: Some(child_id),
        }
    }

    pub fn admin() -> Self {
        Self {
            user_type: UserRole::Admin,
            user_id: "ADMIN001".to_string(),
            user_name: "School Administrator".to_string(),
            user_class: None,
            user_subjects: None,
            child_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Student).unwrap(),
            "\"student\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"admin\""
        );
    }

    #[test]
    fn test_student_session_carries_class() {
        let session = Session::student(
            "STU001".to_string(),
            "John Doe".to_string(),
            "JSS 1".to_string(),
        );
        assert_eq!(session.user_type, UserRole::Student);
        assert_eq!(session.user_class.as_deref(), Some("JSS 1"));
        assert!(session.child_id.is_none());
    }
}

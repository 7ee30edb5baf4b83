//! Parent domain models and DTOs.
//!
//! Parents are linked to exactly one child by student id and admission
//! number. Both links are best-effort foreign keys: a dangling `childId`
//! makes child lookups come back empty rather than failing.

use crate::ids::{ParentId, PaymentId, StudentId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A parent record within the document's `parents` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub id: ParentId,
    pub name: String,
    pub email: String,
    pub child_id: StudentId,
    pub child_admission_number: String,
    pub phone_number: String,
    #[serde(default)]
    pub fees_paid: Vec<PaymentId>,
}

/// DTO for the admin "add parent account" flow.
///
/// The child is resolved by admission number; creation fails when no such
/// student exists.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParentDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub child_admission_number: String,
    #[validate(length(min = 1, max = 30))]
    pub phone_number: String,
}

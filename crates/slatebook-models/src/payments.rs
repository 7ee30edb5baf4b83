//! Fee payment models.

use crate::ids::{PaymentId, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fee payment within the document's `payments` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    /// Best-effort foreign key; a dangling id shows as "N/A" on dashboards.
    pub student_id: StudentId,
    pub term: String,
    /// Amount in naira.
    pub amount: f64,
    /// Bank transfer / teller reference entered by the payer.
    pub reference: String,
    pub status: PaymentStatus,
    pub date: DateTime<Utc>,
}

/// Status of a recorded payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Confirmed,
}

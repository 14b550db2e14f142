use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::user::UserBase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionType {
    Leave,
    Resignation,
}

/// Approval state of a request. Transitions pending -> approved/rejected are
/// one-way and belong to the external approver workflow; nothing here
/// enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

/// `employeeId` as stored (raw identifier) or as expanded by the server.
/// Callers must handle both forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeRef {
    Id(String),
    Expanded(UserBase),
}

impl EmployeeRef {
    /// The referenced user id, whichever form the server sent.
    pub fn id(&self) -> &str {
        match self {
            EmployeeRef::Id(id) => id,
            EmployeeRef::Expanded(user) => &user.id,
        }
    }
}

/// A leave or resignation request record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    pub employee_id: EmployeeRef,
    #[serde(rename = "type")]
    pub kind: SubmissionType,
    pub reason: String,
    /// Relevant only for leave requests.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: SubmissionStatus,
    pub file_url: Option<String>,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFormData {
    #[serde(rename = "type")]
    pub kind: SubmissionType,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

/// Embedded form of a user reference, as the server expands it inside other
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBase {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A full user record as returned by the external user service. This crate
/// only reads it and proposes partial updates; the service owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub department: Option<String>,
    pub position: Option<String>,
    /// Carried as a raw JSON number so the server's representation survives
    /// untouched into change detection.
    pub base_salary: Option<serde_json::Number>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub account_number: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

use serde::{Deserialize, Serialize};

use crate::model::user::Role;

/// The signed-in operator, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

/// Credential context handed explicitly into every client call.
///
/// Read-only from this crate's perspective; the embedding shell owns the
/// token's lifetime and renewal.
#[derive(Debug, Clone)]
pub struct AuthSession {
    token: String,
}

impl AuthSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl From<&CurrentUser> for AuthSession {
    fn from(user: &CurrentUser) -> Self {
        Self::new(user.token.clone())
    }
}

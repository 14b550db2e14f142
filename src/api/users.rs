use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::model::user::UserData;

impl ApiClient {
    /// Fetch one user record.
    pub async fn get_user_by_id(
        &self,
        id: &str,
        session: &AuthSession,
    ) -> Result<UserData, ApiError> {
        debug!(user_id = %id, "Fetching user");

        let response = self
            .http()
            .get(self.url(&format!("/users/{id}")))
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %id, "Failed to reach user service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Failed to fetch user").await?;
        Ok(response.json::<UserData>().await?)
    }

    /// Propose a partial update. `patch` holds only changed fields; an empty
    /// object is sent as-is and the service treats it as a no-op.
    pub async fn update_user(
        &self,
        id: &str,
        patch: &Map<String, Value>,
        session: &AuthSession,
    ) -> Result<UserData, ApiError> {
        debug!(user_id = %id, fields = patch.len(), "Updating user");

        let response = self
            .http()
            .put(self.url(&format!("/users/{id}")))
            .bearer_auth(session.token())
            .json(patch)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %id, "Failed to reach user service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Failed to update user").await?;
        Ok(response.json::<UserData>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthSession;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::with_http(reqwest::Client::new(), &server.base_url())
    }

    #[tokio::test]
    async fn get_user_sends_bearer_token_and_parses_record() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/u1")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(json!({
                "_id": "u1",
                "name": "John Doe",
                "role": "admin",
                "baseSalary": 52000
            }));
        });

        let user = client(&server)
            .get_user_by_id("u1", &AuthSession::new("test-token"))
            .await
            .unwrap();

        assert_eq!(user.name.as_deref(), Some("John Doe"));
        assert_eq!(user.base_salary, Some(52000.into()));
        mock.assert();
    }

    #[tokio::test]
    async fn server_message_wins_over_generic_fallback() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/missing");
            then.status(404).json_body(json!({"message": "User not found"}));
        });

        let err = client(&server)
            .get_user_by_id("missing", &AuthSession::new("t"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), "User not found");
    }

    #[tokio::test]
    async fn bodyless_error_falls_back_to_generic_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/u1");
            then.status(500);
        });

        let err = client(&server)
            .get_user_by_id("u1", &AuthSession::new("t"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), "Failed to fetch user");
    }

    #[tokio::test]
    async fn update_user_sends_the_patch_verbatim() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/users/u1")
                .header("authorization", "Bearer test-token")
                .json_body(json!({"name": "Jane"}));
            then.status(200).json_body(json!({"_id": "u1", "name": "Jane"}));
        });

        let mut patch = Map::new();
        patch.insert("name".to_string(), Value::String("Jane".to_string()));

        let user = client(&server)
            .update_user("u1", &patch, &AuthSession::new("test-token"))
            .await
            .unwrap();

        assert_eq!(user.name.as_deref(), Some("Jane"));
        mock.assert();
    }
}

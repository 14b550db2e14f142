use serde::Serialize;
use tracing::{error, info};

use crate::api::ApiClient;
use crate::auth::CurrentUser;
use crate::error::ApiError;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Exchange operator credentials for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<CurrentUser, ApiError> {
        info!(email = %email, "Login request");

        let response = self
            .http()
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach auth service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Invalid credentials").await?;
        Ok(response.json::<CurrentUser>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::Role;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_parses_the_signed_in_operator() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/auth/login")
                .json_body(json!({"email": "admin@company.com", "password": "pw"}));
            then.status(200).json_body(json!({
                "_id": "u9",
                "name": "Admin",
                "email": "admin@company.com",
                "role": "admin",
                "token": "jwt-token"
            }));
        });

        let client = ApiClient::with_http(reqwest::Client::new(), &server.base_url());
        let user = client.login("admin@company.com", "pw").await.unwrap();

        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.token, "jwt-token");

        let session = crate::auth::AuthSession::from(&user);
        assert_eq!(session.token(), "jwt-token");
        mock.assert();
    }

    #[tokio::test]
    async fn failed_login_surfaces_the_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401)
                .json_body(json!({"message": "Invalid email or password"}));
        });

        let client = ApiClient::with_http(reqwest::Client::new(), &server.base_url());
        let err = client.login("x@y.z", "bad").await.unwrap_err();

        assert_eq!(err.message(), "Invalid email or password");
    }
}

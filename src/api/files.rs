use reqwest::multipart;
use serde::Deserialize;
use tracing::{debug, error};

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    file_url: String,
}

impl ApiClient {
    /// Upload one attachment in a single multipart request and return the
    /// server-assigned URL. The whole payload is held in memory; there is no
    /// chunking, resume, progress reporting or retry.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        session: &AuthSession,
    ) -> Result<String, ApiError> {
        debug!(file_name = %file_name, size = bytes.len(), "Uploading file");

        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http()
            .post(self.url("/files/upload"))
            .bearer_auth(session.token())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, file_name = %file_name, "Failed to reach file service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Failed to upload file").await?;
        Ok(response.json::<UploadResponse>().await?.file_url)
    }

    /// [`file_display_url`] against this client's base URL.
    pub fn display_url(&self, file_url: Option<&str>) -> String {
        file_display_url(self.base_url(), file_url)
    }
}

/// Resolve a stored file reference into a displayable URL.
///
/// Empty input stays empty, absolute URLs pass through unchanged, and
/// server-relative paths get the API base prepended. Pure; no I/O and no
/// failure mode.
pub fn file_display_url(base_url: &str, file_url: Option<&str>) -> String {
    match file_url {
        None | Some("") => String::new(),
        Some(url) if url.starts_with("http") => url.to_string(),
        Some(path) => format!("{}{}", base_url.trim_end_matches('/'), path),
    }
}

use serde::Serialize;
use tracing::{debug, error};

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::model::stats::{SubmissionStats, SubmissionTrend};
use crate::model::submission::{Submission, SubmissionFormData, SubmissionStatus, SubmissionType};

/// Query-string filter for the submission list.
#[derive(Debug, Default, Serialize)]
pub struct SubmissionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubmissionStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SubmissionType>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewBody<'a> {
    status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin_notes: Option<&'a str>,
}

impl ApiClient {
    pub async fn list_submissions(
        &self,
        filter: &SubmissionFilter,
        session: &AuthSession,
    ) -> Result<Vec<Submission>, ApiError> {
        debug!(?filter, "Fetching submissions");

        let response = self
            .http()
            .get(self.url("/submissions"))
            .query(filter)
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach submission service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Failed to fetch submissions").await?;
        Ok(response.json::<Vec<Submission>>().await?)
    }

    pub async fn create_submission(
        &self,
        form: &SubmissionFormData,
        session: &AuthSession,
    ) -> Result<Submission, ApiError> {
        debug!(kind = %form.kind, "Creating submission");

        let response = self
            .http()
            .post(self.url("/submissions"))
            .bearer_auth(session.token())
            .json(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach submission service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Failed to create submission").await?;
        Ok(response.json::<Submission>().await?)
    }

    /// Propose approval of a pending request. Whether the transition is legal
    /// is the service's call.
    pub async fn approve_submission(
        &self,
        id: &str,
        admin_notes: Option<&str>,
        session: &AuthSession,
    ) -> Result<Submission, ApiError> {
        self.review_submission(id, SubmissionStatus::Approved, admin_notes, session)
            .await
    }

    /// Propose rejection of a pending request.
    pub async fn reject_submission(
        &self,
        id: &str,
        admin_notes: Option<&str>,
        session: &AuthSession,
    ) -> Result<Submission, ApiError> {
        self.review_submission(id, SubmissionStatus::Rejected, admin_notes, session)
            .await
    }

    async fn review_submission(
        &self,
        id: &str,
        status: SubmissionStatus,
        admin_notes: Option<&str>,
        session: &AuthSession,
    ) -> Result<Submission, ApiError> {
        debug!(submission_id = %id, status = %status, "Reviewing submission");

        let response = self
            .http()
            .put(self.url(&format!("/submissions/{id}")))
            .bearer_auth(session.token())
            .json(&ReviewBody {
                status,
                admin_notes,
            })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, submission_id = %id, "Failed to reach submission service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Failed to update submission").await?;
        Ok(response.json::<Submission>().await?)
    }

    /// Counts and percentages per type and status, for the dashboard.
    pub async fn submission_stats(
        &self,
        session: &AuthSession,
    ) -> Result<SubmissionStats, ApiError> {
        let response = self
            .http()
            .get(self.url("/submissions/stats"))
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach submission service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Failed to fetch submission stats").await?;
        Ok(response.json::<SubmissionStats>().await?)
    }

    /// Per-month time series of submission counts.
    pub async fn submission_trend(
        &self,
        session: &AuthSession,
    ) -> Result<SubmissionTrend, ApiError> {
        let response = self
            .http()
            .get(self.url("/submissions/trend"))
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach submission service");
                ApiError::from(e)
            })?;

        let response = Self::into_result(response, "Failed to fetch submission trend").await?;
        Ok(response.json::<SubmissionTrend>().await?)
    }
}

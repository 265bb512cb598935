//! HTTP client for the approvals endpoint.

use std::time::Duration;

use serde::Deserialize;

use ratify_types::SignedSubmission;

use crate::error::SubmissionError;

/// Delay between retried submission attempts.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Posts signed ratifications to the approvals endpoint.
#[derive(Clone, Debug)]
pub struct SubmissionClient {
    http: reqwest::Client,
    endpoint: String,
}

/// Response from the approvals endpoint: where the approval was recorded.
#[derive(Clone, Debug, Deserialize)]
pub struct ApprovalRecord {
    /// Reference URL of the recorded approval.
    pub url: String,
}

impl SubmissionClient {
    /// Create a new client targeting the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmissionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SubmissionError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a signed ratification once.
    ///
    /// Serializes the submission as JSON (`Content-Type: application/json`)
    /// and expects `{"url": ...}` back.
    pub async fn submit(
        &self,
        submission: &SignedSubmission,
    ) -> Result<ApprovalRecord, SubmissionError> {
        tracing::debug!(endpoint = %self.endpoint, address = %submission.address, "submitting ratification");
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Http {
                status: status.as_u16(),
            });
        }

        let record: ApprovalRecord = response
            .json()
            .await
            .map_err(|e| SubmissionError::InvalidResponse(format!("invalid JSON response: {e}")))?;
        tracing::info!(url = %record.url, "ratification recorded");
        Ok(record)
    }

    /// Submit with bounded retries.
    ///
    /// Only transport failures are retried; an HTTP error status or a
    /// malformed response surfaces immediately.
    pub async fn submit_with_retry(
        &self,
        submission: &SignedSubmission,
        max_attempts: u32,
    ) -> Result<ApprovalRecord, SubmissionError> {
        let max_attempts = max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.submit(submission).await {
                Ok(record) => return Ok(record),
                Err(SubmissionError::Transport(reason)) if attempt < max_attempts => {
                    tracing::warn!(attempt, max_attempts, %reason, "submission failed, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

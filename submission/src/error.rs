//! Submission errors.

use thiserror::Error;

/// Errors submitting a signed ratification.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Transport failure: the request never got an HTTP answer.
    ///
    /// The only category worth retrying.
    #[error("submission request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("submission endpoint returned HTTP {status}")]
    Http { status: u16 },

    /// The endpoint's answer was missing or malformed.
    #[error("invalid submission response: {0}")]
    InvalidResponse(String),
}

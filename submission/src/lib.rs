//! Submission client for signed ratifications.
//!
//! One outbound call: POST the signed submission as JSON to the approvals
//! endpoint and get back the reference URL of the recorded approval. The
//! endpoint itself (appending the record to a public repository) is an
//! external collaborator.

pub mod client;
pub mod error;

pub use client::{ApprovalRecord, SubmissionClient};
pub use error::SubmissionError;

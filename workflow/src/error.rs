//! Workflow errors.

use thiserror::Error;

use ratify_submission::SubmissionError;
use ratify_wallet::WalletError;

use crate::step::Step;

/// Errors surfaced by workflow operations.
///
/// An error never moves the workflow backwards: the state stays on the step
/// the operation started from.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// The connected wallet holds none of the eligibility tokens.
    #[error("connected wallet holds no eligibility tokens")]
    NotEligible,

    /// The operation does not apply to the current step.
    #[error("{operation} is not available at step {step}")]
    WrongStep {
        operation: &'static str,
        step: Step,
    },
}

impl WorkflowError {
    /// Whether retrying the same operation from the current step can succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            WorkflowError::Wallet(WalletError::Rejected { .. })
            | WorkflowError::Wallet(WalletError::Rpc(_))
            | WorkflowError::Wallet(WalletError::NoAccounts)
            | WorkflowError::Wallet(WalletError::InvalidResponse(_))
            | WorkflowError::Submission(_) => true,
            WorkflowError::Wallet(WalletError::Unavailable)
            | WorkflowError::NotEligible
            | WorkflowError::WrongStep { .. } => false,
        }
    }
}

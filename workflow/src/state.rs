//! Tagged workflow state.

use serde::{Deserialize, Serialize};

use ratify_types::{SignedSubmission, WalletAddress};

use crate::step::Step;

/// Workflow state with the data each step depends on attached to it.
///
/// Illegal combinations are unrepresentable: there is no `Done` without an
/// address and no `Submitting` without a signed submission. Created fresh on
/// every run; nothing survives the process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowState {
    /// No wallet connected yet.
    AwaitingWallet,
    /// Wallet connected; `held` is the summed eligibility-token balance and
    /// may be zero, which disables the ratify action.
    Connected { address: WalletAddress, held: u128 },
    /// Message signed; the submission is in flight or awaiting a retry.
    Submitting { submission: SignedSubmission },
    /// Terminal. The reference URL points at the recorded approval.
    Done {
        address: WalletAddress,
        approval_url: Option<String>,
    },
}

impl WorkflowState {
    /// The step this state sits on.
    pub fn step(&self) -> Step {
        match self {
            WorkflowState::AwaitingWallet => Step::Connect,
            WorkflowState::Connected { .. } => Step::Ratify,
            WorkflowState::Submitting { .. } => Step::Submit,
            WorkflowState::Done { .. } => Step::Done,
        }
    }

    /// The connected address, once one exists.
    pub fn address(&self) -> Option<&WalletAddress> {
        match self {
            WorkflowState::AwaitingWallet => None,
            WorkflowState::Connected { address, .. } => Some(address),
            WorkflowState::Submitting { submission } => Some(&submission.address),
            WorkflowState::Done { address, .. } => Some(address),
        }
    }

    /// Summed eligibility-token balance, while it is known.
    pub fn held(&self) -> Option<u128> {
        match self {
            WorkflowState::Connected { held, .. } => Some(*held),
            _ => None,
        }
    }

    /// Whether the ratify action is enabled: connected with a nonzero hold.
    pub fn can_ratify(&self) -> bool {
        matches!(self, WorkflowState::Connected { held, .. } if *held > 0)
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::AwaitingWallet
    }
}

//! Workflow steps in order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four steps of the ratification workflow, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Connect a wallet holding eligibility tokens.
    Connect,
    /// Sign the ratification message.
    Ratify,
    /// The signed message is being submitted.
    Submit,
    /// Terminal: the approval is recorded.
    Done,
}

impl Step {
    /// Zero-based index of this step.
    pub fn index(&self) -> usize {
        match self {
            Step::Connect => 0,
            Step::Ratify => 1,
            Step::Submit => 2,
            Step::Done => 3,
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Connect => "Connect wallet",
            Step::Ratify => "Ratify charter",
            Step::Submit => "Submit vote",
            Step::Done => "Done",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! The four-step ratification workflow.
//!
//! A linear state machine: connect a wallet, sign the ratification message,
//! submit the signature, done. Each forward transition is gated on an
//! enabling condition and every failure is an explicit error that leaves the
//! workflow on the step it was on; the step index never moves backwards.

pub mod controller;
pub mod error;
pub mod state;
pub mod step;

pub use controller::{RatificationWorkflow, WorkflowConfig};
pub use error::WorkflowError;
pub use state::WorkflowState;
pub use step::Step;

//! Fundamental types for the charter ratification client.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: the connected wallet address, the charter's content hash, the
//! eligibility token identifier, and the ratification payload that gets
//! signed and submitted.

pub mod address;
pub mod error;
pub mod hash;
pub mod payload;
pub mod signature;
pub mod token;

pub use address::WalletAddress;
pub use error::TypeError;
pub use hash::CharterHash;
pub use payload::{RatificationPayload, SignedSubmission};
pub use signature::Signature;
pub use token::TokenId;

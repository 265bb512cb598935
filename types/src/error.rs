//! Parse errors for the fundamental types.

use thiserror::Error;

/// Errors produced when parsing the fundamental types from strings.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("invalid charter content hash: {0}")]
    InvalidCharterHash(String),

    #[error("invalid signature encoding: {0}")]
    InvalidSignature(String),
}

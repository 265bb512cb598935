//! Eligibility token identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one token kind under the fixed multi-token contract.
///
/// Holding a nonzero total across the configured token ids is what makes a
/// wallet eligible to ratify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

//! Content address of the charter document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// An IPFS CIDv0 content hash: `Qm` followed by 44 base58 characters.
///
/// Retrieves the immutable charter document by its content digest rather
/// than by location.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharterHash(String);

impl CharterHash {
    /// CIDv0 prefix (base58 multihash of a sha2-256 digest).
    pub const PREFIX: &'static str = "Qm";

    /// Total length of a CIDv0 string.
    const LEN: usize = 46;

    /// Parse a CIDv0 content hash.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        if !raw.starts_with(Self::PREFIX) || raw.len() != Self::LEN || !raw.chars().all(is_base58)
        {
            return Err(TypeError::InvalidCharterHash(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Return the raw hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the retrieval URL for this hash under a gateway base URL.
    pub fn gateway_url(&self, gateway_base: &str) -> String {
        format!("{}/ipfs/{}", gateway_base.trim_end_matches('/'), self.0)
    }
}

/// Bitcoin-alphabet base58: no `0`, `O`, `I` or `l`.
fn is_base58(c: char) -> bool {
    c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l')
}

impl fmt::Debug for CharterHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharterHash({}…)", &self.0[..8])
    }
}

impl fmt::Display for CharterHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CharterHash {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

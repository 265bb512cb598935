//! Account address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// A 20-byte account address in `0x`-prefixed hex form.
///
/// Stored lowercased so two spellings of the same address compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// The standard prefix for all account addresses.
    pub const PREFIX: &'static str = "0x";

    /// Number of hex characters after the prefix (20 bytes).
    const HEX_LEN: usize = 40;

    /// Parse an address, accepting mixed-case hex and normalizing to lowercase.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        let hex_part = raw
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| TypeError::InvalidAddress(raw.to_string()))?;
        if hex_part.len() != Self::HEX_LEN || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(format!(
            "{}{}",
            Self::PREFIX,
            hex_part.to_ascii_lowercase()
        )))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

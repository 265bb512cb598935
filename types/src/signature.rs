//! Signature returned by the wallet provider's `personal_sign`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypeError;

/// A 65-byte recoverable signature in `0x`-prefixed hex form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(String);

impl Signature {
    /// Number of hex characters after the prefix (65 bytes: r ‖ s ‖ v).
    const HEX_LEN: usize = 130;

    /// Parse a `0x`-prefixed hex signature as returned by the provider.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        let hex_part = raw
            .strip_prefix("0x")
            .ok_or_else(|| TypeError::InvalidSignature(raw.to_string()))?;
        if hex_part.len() != Self::HEX_LEN || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidSignature(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Return the raw signature string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}…)", &self.0[..10])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Ratification payload and the signed submission wire body.

use serde::{Deserialize, Serialize};

use crate::{CharterHash, Signature, WalletAddress};

/// The message a wallet signs to ratify the charter.
///
/// Field order is part of the contract: the canonical JSON rendering of this
/// struct is the exact byte sequence handed to `personal_sign`, and the
/// recorded approval is only verifiable against those bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatificationPayload {
    /// Human-readable ratification statement.
    pub message: String,
    /// Content hash of the charter version being ratified.
    #[serde(rename = "ipfsHash")]
    pub ipfs_hash: CharterHash,
}

impl RatificationPayload {
    pub fn new(message: impl Into<String>, ipfs_hash: CharterHash) -> Self {
        Self {
            message: message.into(),
            ipfs_hash,
        }
    }

    /// The exact JSON string the wallet signs.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).expect("payload is always serializable to JSON")
    }
}

/// One ratification attempt, ready to be submitted.
///
/// Constructed once per attempt, after the provider returns the signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedSubmission {
    pub payload: RatificationPayload,
    pub signature: Signature,
    pub address: WalletAddress,
}

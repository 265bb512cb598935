//! The wallet capability seam.

use ratify_types::{Signature, TokenId, WalletAddress};

use crate::error::WalletError;

/// Capability interface over a user-controlled wallet.
///
/// The workflow is generic over this trait, so the live JSON-RPC client and
/// the scripted [`crate::NullProvider`] are interchangeable without touching
/// workflow logic.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Request account access and return the available accounts.
    async fn request_accounts(&self) -> Result<Vec<WalletAddress>, WalletError>;

    /// Sign a message with the key behind `address`.
    async fn personal_sign(
        &self,
        address: &WalletAddress,
        message: &str,
    ) -> Result<Signature, WalletError>;

    /// Query `owner`'s balance for each token id under `contract`, in order.
    async fn balance_of_batch(
        &self,
        contract: &WalletAddress,
        owner: &WalletAddress,
        token_ids: &[TokenId],
    ) -> Result<Vec<u128>, WalletError>;
}

//! Wallet capability errors.

use thiserror::Error;

/// Errors surfaced by a wallet provider.
///
/// Every failure category is an explicit variant; none of the capability
/// checks silently do nothing.
#[derive(Debug, Error)]
pub enum WalletError {
    /// No provider is configured or reachable.
    #[error("no wallet provider available")]
    Unavailable,

    /// The user declined the request in their wallet.
    #[error("request rejected by wallet user: {message}")]
    Rejected { message: String },

    /// Account access was granted but the provider returned no accounts.
    #[error("provider returned no accounts")]
    NoAccounts,

    /// Transport or protocol failure talking to the provider.
    ///
    /// Distinct from a zero balance: a failed balance query surfaces here.
    #[error("provider RPC error: {0}")]
    Rpc(String),

    /// The provider answered with something the client cannot interpret.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

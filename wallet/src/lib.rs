//! Wallet provider capability for the ratification client.
//!
//! Everything the workflow needs from a user-controlled wallet sits behind
//! the [`WalletProvider`] trait: account access, `personal_sign`, and the
//! batched balance query used as the eligibility check. [`ProviderClient`]
//! implements it over JSON-RPC; [`NullProvider`] is the scripted test double.

pub mod abi;
pub mod client;
pub mod error;
pub mod null;
pub mod provider;

pub use client::ProviderClient;
pub use error::WalletError;
pub use null::NullProvider;
pub use provider::WalletProvider;

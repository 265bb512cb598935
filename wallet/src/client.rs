//! JSON-RPC wallet provider client.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use ratify_types::{Signature, TokenId, WalletAddress};

use crate::abi;
use crate::error::WalletError;
use crate::provider::WalletProvider;

/// JSON-RPC error code for a request the user declined (EIP-1193).
const CODE_USER_REJECTED: i64 = 4001;

/// HTTP client for a wallet provider speaking JSON-RPC 2.0.
///
/// The counterpart of the page-injected provider object: account access,
/// message signing and read-only contract calls all go through one endpoint.
#[derive(Debug)]
pub struct ProviderClient {
    http: reqwest::Client,
    provider_url: String,
    next_id: AtomicU64,
}

impl ProviderClient {
    /// Create a new client targeting the given provider URL.
    pub fn new(provider_url: impl Into<String>) -> Result<Self, WalletError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| WalletError::Rpc(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            provider_url: provider_url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// The configured provider URL.
    pub fn provider_url(&self) -> &str {
        &self.provider_url
    }

    /// Send a JSON-RPC request and return the `result` field.
    async fn rpc_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, WalletError> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": self.next_id.fetch_add(1, Ordering::Relaxed),
            "method": method,
            "params": params,
        });
        tracing::debug!(method, "provider rpc call");

        let response = self
            .http
            .post(&self.provider_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::Rpc(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WalletError::Rpc(format!(
                "provider returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WalletError::InvalidResponse(format!("invalid JSON response: {e}")))?;

        if let Some(err) = json.get("error") {
            let code = err.get("code").and_then(|c| c.as_i64()).unwrap_or(0);
            let message = err
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error")
                .to_string();
            if code == CODE_USER_REJECTED {
                return Err(WalletError::Rejected { message });
            }
            return Err(WalletError::Rpc(format!("provider error {code}: {message}")));
        }

        json.get("result")
            .cloned()
            .ok_or_else(|| WalletError::InvalidResponse("response has no result field".into()))
    }
}

impl WalletProvider for ProviderClient {
    async fn request_accounts(&self) -> Result<Vec<WalletAddress>, WalletError> {
        let result = self
            .rpc_call("eth_requestAccounts", serde_json::json!([]))
            .await?;

        let raw: Vec<String> = serde_json::from_value(result)
            .map_err(|e| WalletError::InvalidResponse(format!("invalid accounts list: {e}")))?;
        if raw.is_empty() {
            return Err(WalletError::NoAccounts);
        }
        raw.iter()
            .map(|s| {
                WalletAddress::parse(s)
                    .map_err(|e| WalletError::InvalidResponse(format!("invalid account: {e}")))
            })
            .collect()
    }

    async fn personal_sign(
        &self,
        address: &WalletAddress,
        message: &str,
    ) -> Result<Signature, WalletError> {
        let result = self
            .rpc_call(
                "personal_sign",
                serde_json::json!([address.as_str(), message]),
            )
            .await?;

        let raw = result
            .as_str()
            .ok_or_else(|| WalletError::InvalidResponse("signature is not a string".into()))?;
        Signature::parse(raw)
            .map_err(|e| WalletError::InvalidResponse(format!("invalid signature: {e}")))
    }

    async fn balance_of_batch(
        &self,
        contract: &WalletAddress,
        owner: &WalletAddress,
        token_ids: &[TokenId],
    ) -> Result<Vec<u128>, WalletError> {
        let data = abi::encode_balance_of_batch(owner, token_ids);
        let result = self
            .rpc_call(
                "eth_call",
                serde_json::json!([
                    { "to": contract.as_str(), "data": data },
                    "latest",
                ]),
            )
            .await?;

        let raw = result
            .as_str()
            .ok_or_else(|| WalletError::InvalidResponse("call result is not a string".into()))?;
        let balances = abi::decode_uint_array(raw)?;
        if balances.len() != token_ids.len() {
            return Err(WalletError::InvalidResponse(format!(
                "expected {} balances, got {}",
                token_ids.len(),
                balances.len()
            )));
        }
        Ok(balances)
    }
}

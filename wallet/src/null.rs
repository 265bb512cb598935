//! Nullable wallet provider: scripted responses for testing.
//!
//! The same idea as a recording test network: every call is recorded for
//! assertions, and the responses are configured programmatically. Never
//! touches the network.

use std::sync::Mutex;

use ratify_types::{Signature, TokenId, WalletAddress};

use crate::error::WalletError;
use crate::provider::WalletProvider;

/// A scripted wallet provider for tests.
pub struct NullProvider {
    available: bool,
    accounts: Vec<WalletAddress>,
    reject_accounts: bool,
    balances: Vec<u128>,
    fail_balances: bool,
    signature: Signature,
    reject_sign: bool,
    /// Number of `request_accounts` calls observed.
    account_requests: Mutex<u64>,
    /// Messages passed to `personal_sign`, in order.
    signed_messages: Mutex<Vec<String>>,
    /// Token ids passed to `balance_of_batch`, per call.
    balance_queries: Mutex<Vec<Vec<TokenId>>>,
}

impl NullProvider {
    pub fn new() -> Self {
        Self {
            available: true,
            accounts: Vec::new(),
            reject_accounts: false,
            balances: Vec::new(),
            fail_balances: false,
            signature: Signature::parse(&format!("0x{}", "ab".repeat(65)))
                .expect("default signature is valid hex"),
            reject_sign: false,
            account_requests: Mutex::new(0),
            signed_messages: Mutex::new(Vec::new()),
            balance_queries: Mutex::new(Vec::new()),
        }
    }

    /// Script the connected account.
    pub fn with_account(mut self, address: WalletAddress) -> Self {
        self.accounts = vec![address];
        self
    }

    /// Script the balances returned for a batch query, in token-id order.
    pub fn with_balances(mut self, balances: Vec<u128>) -> Self {
        self.balances = balances;
        self
    }

    /// Script the signature `personal_sign` returns.
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    /// Behave as if no provider is injected at all.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// The user declines the account-access request.
    pub fn rejecting_accounts(mut self) -> Self {
        self.reject_accounts = true;
        self
    }

    /// The user declines the signature request.
    pub fn rejecting_sign(mut self) -> Self {
        self.reject_sign = true;
        self
    }

    /// The balance query fails at the RPC layer.
    pub fn failing_balances(mut self) -> Self {
        self.fail_balances = true;
        self
    }

    /// How many times account access was requested.
    pub fn account_requests(&self) -> u64 {
        *self.account_requests.lock().unwrap()
    }

    /// All messages signed so far (for assertions).
    pub fn signed_messages(&self) -> Vec<String> {
        self.signed_messages.lock().unwrap().clone()
    }

    /// Token-id lists queried so far (for assertions).
    pub fn balance_queries(&self) -> Vec<Vec<TokenId>> {
        self.balance_queries.lock().unwrap().clone()
    }
}

impl Default for NullProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletProvider for NullProvider {
    async fn request_accounts(&self) -> Result<Vec<WalletAddress>, WalletError> {
        if !self.available {
            return Err(WalletError::Unavailable);
        }
        *self.account_requests.lock().unwrap() += 1;
        if self.reject_accounts {
            return Err(WalletError::Rejected {
                message: "scripted rejection".into(),
            });
        }
        if self.accounts.is_empty() {
            return Err(WalletError::NoAccounts);
        }
        Ok(self.accounts.clone())
    }

    async fn personal_sign(
        &self,
        _address: &WalletAddress,
        message: &str,
    ) -> Result<Signature, WalletError> {
        if !self.available {
            return Err(WalletError::Unavailable);
        }
        if self.reject_sign {
            return Err(WalletError::Rejected {
                message: "scripted rejection".into(),
            });
        }
        self.signed_messages.lock().unwrap().push(message.to_string());
        Ok(self.signature.clone())
    }

    async fn balance_of_batch(
        &self,
        _contract: &WalletAddress,
        _owner: &WalletAddress,
        token_ids: &[TokenId],
    ) -> Result<Vec<u128>, WalletError> {
        if !self.available {
            return Err(WalletError::Unavailable);
        }
        self.balance_queries
            .lock()
            .unwrap()
            .push(token_ids.to_vec());
        if self.fail_balances {
            return Err(WalletError::Rpc("scripted balance failure".into()));
        }
        Ok(self.balances.clone())
    }
}

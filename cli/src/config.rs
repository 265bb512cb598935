//! Client configuration with TOML file support.
//!
//! Defaults carry the live deployment's constants; a TOML file and CLI
//! flags/environment variables override them.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use ratify_types::{CharterHash, TokenId, WalletAddress};
use ratify_workflow::WorkflowConfig;

/// Configuration for the ratification client.
///
/// Can be loaded from a TOML file via [`AppConfig::from_toml_file`] or built
/// programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Wallet provider RPC endpoint. Absent means no wallet capability is
    /// available and the ratify flow reports that instead of doing nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,

    /// Approvals endpoint the signed submission is posted to.
    #[serde(default = "default_submit_endpoint")]
    pub submit_endpoint: String,

    /// Content gateway base URL the charter is fetched from.
    #[serde(default = "default_gateway")]
    pub gateway: String,

    /// Content hash of the charter version on display.
    #[serde(default = "default_charter_hash")]
    pub charter_hash: String,

    /// Multi-token contract holding the eligibility tokens.
    #[serde(default = "default_contract")]
    pub contract: String,

    /// Token ids summed into the eligibility count.
    #[serde(default = "default_token_ids")]
    pub token_ids: Vec<u64>,

    /// Ratification statement included in the signed message.
    #[serde(default = "default_statement")]
    pub statement: String,

    /// Public repository where approvals are recorded.
    #[serde(default = "default_approvals_url")]
    pub approvals_url: String,

    /// External voting platform proposal URL (redirect variant).
    #[serde(default = "default_voting_url")]
    pub voting_url: String,

    /// Submission attempt bound for transport failures.
    #[serde(default = "default_submit_attempts")]
    pub submit_attempts: u32,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_submit_endpoint() -> String {
    "http://127.0.0.1:3000/api/submit".to_string()
}

fn default_gateway() -> String {
    "https://ipfs.io".to_string()
}

fn default_charter_hash() -> String {
    "QmbAV7dZithaG4Fr85yNZUEebF26tmxcNrDKv948kPXUKM".to_string()
}

fn default_contract() -> String {
    "0x7eef591a6cc0403b9652e98e88476fe1bf31ddeb".to_string()
}

fn default_token_ids() -> Vec<u64> {
    vec![7, 42, 69]
}

fn default_statement() -> String {
    "I ratify the CityDAO charter".to_string()
}

fn default_approvals_url() -> String {
    "https://github.com/davidfant/constitution-approvals".to_string()
}

fn default_voting_url() -> String {
    "https://snapshot.org/#/daocity.eth".to_string()
}

fn default_submit_attempts() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("AppConfig is always serializable to TOML")
    }

    /// The charter hash, validated.
    pub fn charter_hash(&self) -> anyhow::Result<CharterHash> {
        CharterHash::parse(&self.charter_hash).context("invalid charter_hash in config")
    }

    /// The charter's retrieval URL under the configured gateway.
    pub fn charter_url(&self) -> anyhow::Result<String> {
        Ok(self.charter_hash()?.gateway_url(&self.gateway))
    }

    /// The validated workflow parameters.
    pub fn workflow_config(&self) -> anyhow::Result<WorkflowConfig> {
        let contract =
            WalletAddress::parse(&self.contract).context("invalid contract address in config")?;
        Ok(WorkflowConfig {
            contract,
            token_ids: self.token_ids.iter().copied().map(TokenId::new).collect(),
            charter_hash: self.charter_hash()?,
            statement: self.statement.clone(),
            submit_attempts: self.submit_attempts,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider_url: None,
            submit_endpoint: default_submit_endpoint(),
            gateway: default_gateway(),
            charter_hash: default_charter_hash(),
            contract: default_contract(),
            token_ids: default_token_ids(),
            statement: default_statement(),
            approvals_url: default_approvals_url(),
            voting_url: default_voting_url(),
            submit_attempts: default_submit_attempts(),
            log_level: default_log_level(),
        }
    }
}

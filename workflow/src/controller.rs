//! Workflow controller: drives the state machine over the wallet and
//! submission capabilities.

use ratify_submission::SubmissionClient;
use ratify_types::{CharterHash, RatificationPayload, SignedSubmission, TokenId, WalletAddress};
use ratify_wallet::{WalletError, WalletProvider};

use crate::error::WorkflowError;
use crate::state::WorkflowState;
use crate::step::Step;

/// Fixed parameters of one ratification deployment.
#[derive(Clone, Debug)]
pub struct WorkflowConfig {
    /// The multi-token contract holding the eligibility tokens.
    pub contract: WalletAddress,
    /// Token ids whose balances sum into the eligibility count.
    pub token_ids: Vec<TokenId>,
    /// Content hash of the charter version being ratified.
    pub charter_hash: CharterHash,
    /// Human-readable ratification statement.
    pub statement: String,
    /// Attempt bound handed to the submission client.
    pub submit_attempts: u32,
}

/// Orchestrates the four steps against a wallet provider and the
/// submission endpoint.
///
/// Generic over the provider so tests substitute a scripted double without
/// touching any of this logic.
pub struct RatificationWorkflow<P> {
    config: WorkflowConfig,
    provider: Option<P>,
    submission_client: SubmissionClient,
    state: WorkflowState,
}

impl<P: WalletProvider> RatificationWorkflow<P> {
    /// Create a workflow at step 0.
    ///
    /// `provider` is `None` when no wallet provider is available; the
    /// connect action then fails with an observable error instead of
    /// silently doing nothing.
    pub fn new(
        config: WorkflowConfig,
        provider: Option<P>,
        submission_client: SubmissionClient,
    ) -> Self {
        Self {
            config,
            provider,
            submission_client,
            state: WorkflowState::AwaitingWallet,
        }
    }

    /// Current state.
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Current step.
    pub fn step(&self) -> Step {
        self.state.step()
    }

    /// The deployment parameters this workflow runs with.
    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Step 0 → 1: request account access and read the eligibility count.
    ///
    /// The transition is unconditional once an address is obtained; a zero
    /// balance connects but leaves the ratify action disabled. Calling this
    /// again after a wallet is connected is a guarded no-op: no duplicate
    /// wallet request is issued.
    pub async fn connect(&mut self) -> Result<&WorkflowState, WorkflowError> {
        if self.state.step() > Step::Connect {
            tracing::debug!("connect ignored: wallet already connected");
            return Ok(&self.state);
        }
        let provider = self
            .provider
            .as_ref()
            .ok_or(WalletError::Unavailable)?;

        let accounts = provider.request_accounts().await?;
        let address = accounts
            .into_iter()
            .next()
            .ok_or(WalletError::NoAccounts)?;

        let balances = provider
            .balance_of_batch(&self.config.contract, &address, &self.config.token_ids)
            .await?;
        let held = balances.iter().fold(0u128, |sum, b| sum.saturating_add(*b));

        tracing::info!(address = %address, held, "wallet connected");
        self.advance(WorkflowState::Connected { address, held });
        Ok(&self.state)
    }

    /// Step 1 → 2 → 3: sign the ratification message and submit it.
    ///
    /// Only enabled while connected with a nonzero hold. A declined
    /// signature leaves the workflow connected; a failed submission leaves
    /// it on the submit step holding the signed message for [`Self::resubmit`].
    pub async fn ratify(&mut self) -> Result<&WorkflowState, WorkflowError> {
        let (address, held) = match &self.state {
            WorkflowState::Connected { address, held } => (address.clone(), *held),
            other => {
                return Err(WorkflowError::WrongStep {
                    operation: "ratify",
                    step: other.step(),
                })
            }
        };
        if held == 0 {
            return Err(WorkflowError::NotEligible);
        }
        let provider = self
            .provider
            .as_ref()
            .ok_or(WalletError::Unavailable)?;

        let payload = RatificationPayload::new(
            self.config.statement.clone(),
            self.config.charter_hash.clone(),
        );
        let message = payload.canonical_json();
        let signature = provider.personal_sign(&address, &message).await?;
        tracing::info!(address = %address, "ratification message signed");

        self.advance(WorkflowState::Submitting {
            submission: SignedSubmission {
                payload,
                signature,
                address,
            },
        });
        self.drive_submission().await
    }

    /// Retry a submission that failed after signing, without re-signing.
    pub async fn resubmit(&mut self) -> Result<&WorkflowState, WorkflowError> {
        match &self.state {
            WorkflowState::Submitting { .. } => self.drive_submission().await,
            other => Err(WorkflowError::WrongStep {
                operation: "resubmit",
                step: other.step(),
            }),
        }
    }

    /// Step 2 → 3: push the held submission to the endpoint.
    async fn drive_submission(&mut self) -> Result<&WorkflowState, WorkflowError> {
        let submission = match &self.state {
            WorkflowState::Submitting { submission } => submission.clone(),
            other => {
                return Err(WorkflowError::WrongStep {
                    operation: "submit",
                    step: other.step(),
                })
            }
        };

        let record = self
            .submission_client
            .submit_with_retry(&submission, self.config.submit_attempts)
            .await?;

        self.advance(WorkflowState::Done {
            address: submission.address,
            approval_url: Some(record.url),
        });
        Ok(&self.state)
    }

    /// Replace the state, keeping the step index monotonic.
    fn advance(&mut self, next: WorkflowState) {
        debug_assert!(next.step() >= self.state.step());
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratify_wallet::NullProvider;

    const CHARTER: &str = "QmbAV7dZithaG4Fr85yNZUEebF26tmxcNrDKv948kPXUKM";

    fn config() -> WorkflowConfig {
        WorkflowConfig {
            contract: WalletAddress::parse("0x7eef591a6cc0403b9652e98e88476fe1bf31ddeb")
                .unwrap(),
            token_ids: vec![TokenId::new(7), TokenId::new(42), TokenId::new(69)],
            charter_hash: CharterHash::parse(CHARTER).unwrap(),
            statement: "I ratify the CityDAO charter".into(),
            submit_attempts: 1,
        }
    }

    fn address() -> WalletAddress {
        WalletAddress::parse("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab").unwrap()
    }

    /// Endpoint never reached in these tests.
    fn dead_endpoint() -> SubmissionClient {
        SubmissionClient::new("http://127.0.0.1:1/api/submit").unwrap()
    }

    fn workflow(provider: NullProvider) -> RatificationWorkflow<NullProvider> {
        RatificationWorkflow::new(config(), Some(provider), dead_endpoint())
    }

    #[tokio::test]
    async fn connect_sums_balances_and_advances() {
        let provider = NullProvider::new()
            .with_account(address())
            .with_balances(vec![1, 0, 2]);
        let mut flow = workflow(provider);
        assert_eq!(flow.step(), Step::Connect);

        flow.connect().await.unwrap();
        assert_eq!(flow.step(), Step::Ratify);
        assert_eq!(flow.state().held(), Some(3));
        assert_eq!(flow.state().address(), Some(&address()));
    }

    #[tokio::test]
    async fn connect_with_zero_balance_still_advances() {
        let provider = NullProvider::new()
            .with_account(address())
            .with_balances(vec![0, 0, 0]);
        let mut flow = workflow(provider);

        flow.connect().await.unwrap();
        assert_eq!(flow.step(), Step::Ratify);
        assert!(!flow.state().can_ratify());
    }

    #[tokio::test]
    async fn connect_without_provider_is_an_observable_error() {
        let mut flow: RatificationWorkflow<NullProvider> =
            RatificationWorkflow::new(config(), None, dead_endpoint());

        let err = flow.connect().await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Wallet(WalletError::Unavailable)
        ));
        assert_eq!(flow.step(), Step::Connect);
    }

    #[tokio::test]
    async fn rejected_connect_stays_on_step_zero() {
        let provider = NullProvider::new().rejecting_accounts();
        let mut flow = workflow(provider);

        let err = flow.connect().await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Wallet(WalletError::Rejected { .. })
        ));
        assert!(err.is_recoverable());
        assert_eq!(flow.step(), Step::Connect);
    }

    #[tokio::test]
    async fn balance_failure_is_distinct_from_zero_balance() {
        let provider = NullProvider::new()
            .with_account(address())
            .failing_balances();
        let mut flow = workflow(provider);

        let err = flow.connect().await.unwrap_err();
        assert!(matches!(err, WorkflowError::Wallet(WalletError::Rpc(_))));
        assert_eq!(flow.step(), Step::Connect);
    }

    #[tokio::test]
    async fn repeated_connect_issues_no_duplicate_request() {
        let provider = NullProvider::new()
            .with_account(address())
            .with_balances(vec![1]);
        let mut flow = workflow(provider);

        flow.connect().await.unwrap();
        flow.connect().await.unwrap();
        flow.connect().await.unwrap();
        assert_eq!(flow.step(), Step::Ratify);
        // Only the first call reached the provider.
        assert_eq!(
            flow.provider.as_ref().unwrap().account_requests(),
            1
        );
    }

    #[tokio::test]
    async fn ratify_requires_eligibility() {
        let provider = NullProvider::new()
            .with_account(address())
            .with_balances(vec![0, 0, 0]);
        let mut flow = workflow(provider);

        flow.connect().await.unwrap();
        let err = flow.ratify().await.unwrap_err();
        assert!(matches!(err, WorkflowError::NotEligible));
        assert_eq!(flow.step(), Step::Ratify);
    }

    #[tokio::test]
    async fn ratify_before_connect_is_wrong_step() {
        let provider = NullProvider::new();
        let mut flow = workflow(provider);

        let err = flow.ratify().await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::WrongStep {
                operation: "ratify",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn rejected_signature_stays_connected() {
        let provider = NullProvider::new()
            .with_account(address())
            .with_balances(vec![2])
            .rejecting_sign();
        let mut flow = workflow(provider);

        flow.connect().await.unwrap();
        let err = flow.ratify().await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Wallet(WalletError::Rejected { .. })
        ));
        assert_eq!(flow.step(), Step::Ratify);
        assert!(flow.state().can_ratify());
    }

    #[tokio::test]
    async fn signed_message_is_the_canonical_payload_json() {
        let provider = NullProvider::new()
            .with_account(address())
            .with_balances(vec![1]);
        // Submission fails (dead endpoint), signing has already happened.
        let mut flow = workflow(provider);

        flow.connect().await.unwrap();
        let _ = flow.ratify().await.unwrap_err();

        let signed = flow.provider.as_ref().unwrap().signed_messages();
        assert_eq!(
            signed,
            vec![format!(
                "{{\"message\":\"I ratify the CityDAO charter\",\"ipfsHash\":\"{CHARTER}\"}}"
            )]
        );
    }

    #[tokio::test]
    async fn failed_submission_holds_step_for_resubmit() {
        let provider = NullProvider::new()
            .with_account(address())
            .with_balances(vec![1]);
        let mut flow = workflow(provider);

        flow.connect().await.unwrap();
        let err = flow.ratify().await.unwrap_err();
        assert!(matches!(err, WorkflowError::Submission(_)));
        assert!(err.is_recoverable());
        // Signed but not recorded: the flow waits on the submit step.
        assert_eq!(flow.step(), Step::Submit);

        // Retrying against the same dead endpoint fails again without
        // moving backwards or re-signing.
        let err = flow.resubmit().await.unwrap_err();
        assert!(matches!(err, WorkflowError::Submission(_)));
        assert_eq!(flow.step(), Step::Submit);
        assert_eq!(flow.provider.as_ref().unwrap().signed_messages().len(), 1);
    }

    #[tokio::test]
    async fn resubmit_elsewhere_is_wrong_step() {
        let provider = NullProvider::new();
        let mut flow = workflow(provider);

        let err = flow.resubmit().await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::WrongStep {
                operation: "resubmit",
                ..
            }
        ));
    }
}

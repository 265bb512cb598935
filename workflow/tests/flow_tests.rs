//! End-to-end workflow tests: a scripted wallet provider on one side and a
//! live HTTP stand-in for the approvals endpoint on the other, wired through
//! the real submission client.

use std::sync::{Arc, Mutex};

use axum::routing::post;
use axum::{Json, Router};

use ratify_submission::SubmissionClient;
use ratify_types::{CharterHash, Signature, TokenId, WalletAddress};
use ratify_wallet::NullProvider;
use ratify_workflow::{RatificationWorkflow, Step, WorkflowConfig, WorkflowState};

const CHARTER: &str = "QmbAV7dZithaG4Fr85yNZUEebF26tmxcNrDKv948kPXUKM";
const APPROVAL_URL: &str = "https://github.com/citydao-labs/constitution-approvals/pull/1";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn config() -> WorkflowConfig {
    WorkflowConfig {
        contract: WalletAddress::parse("0x7eef591a6cc0403b9652e98e88476fe1bf31ddeb").unwrap(),
        token_ids: vec![TokenId::new(7), TokenId::new(42), TokenId::new(69)],
        charter_hash: CharterHash::parse(CHARTER).unwrap(),
        statement: "I ratify the CityDAO charter".into(),
        submit_attempts: 1,
    }
}

fn voter() -> WalletAddress {
    WalletAddress::parse("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab").unwrap()
}

fn signature() -> Signature {
    Signature::parse(&format!("0x{}", "51".repeat(65))).unwrap()
}

/// Serve an approvals endpoint that records every body it receives.
async fn approvals_endpoint() -> (SubmissionClient, Arc<Mutex<Vec<serde_json::Value>>>) {
    let received: Arc<Mutex<Vec<serde_json::Value>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let app = Router::new().route(
        "/api/submit",
        post(move |Json(body): Json<serde_json::Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                Json(serde_json::json!({ "url": APPROVAL_URL }))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = SubmissionClient::new(format!("http://{addr}/api/submit")).unwrap();
    (client, received)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_flow_reaches_done_with_reference_url() {
    let (client, received) = approvals_endpoint().await;
    let provider = NullProvider::new()
        .with_account(voter())
        .with_balances(vec![1, 0, 2])
        .with_signature(signature());
    let mut flow = RatificationWorkflow::new(config(), Some(provider), client);

    // A fresh workflow always starts at step 0.
    assert_eq!(flow.step(), Step::Connect);

    flow.connect().await.unwrap();
    assert_eq!(flow.step(), Step::Ratify);
    assert_eq!(flow.state().held(), Some(3));

    flow.ratify().await.unwrap();
    assert_eq!(flow.step(), Step::Done);
    match flow.state() {
        WorkflowState::Done {
            address,
            approval_url,
        } => {
            assert_eq!(address, &voter());
            assert_eq!(approval_url.as_deref(), Some(APPROVAL_URL));
        }
        other => panic!("expected Done, got {other:?}"),
    }

    // The endpoint saw exactly one submission with the fixed wire shape.
    let bodies = received.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(body["payload"]["message"], "I ratify the CityDAO charter");
    assert_eq!(body["payload"]["ipfsHash"], CHARTER);
    assert_eq!(body["signature"], signature().as_str());
    assert_eq!(body["address"], voter().as_str());
}

#[tokio::test]
async fn step_index_never_decreases() {
    let (client, _received) = approvals_endpoint().await;
    let provider = NullProvider::new()
        .with_account(voter())
        .with_balances(vec![1, 0, 2]);
    let mut flow = RatificationWorkflow::new(config(), Some(provider), client);

    let mut last = flow.step().index();
    // Operations in an order that exercises no-ops and wrong-step errors
    // along the way; after each one the index must not have moved back.
    let _ = flow.resubmit().await;
    assert!(flow.step().index() >= last);
    last = flow.step().index();

    flow.connect().await.unwrap();
    assert!(flow.step().index() >= last);
    last = flow.step().index();

    let _ = flow.connect().await;
    assert!(flow.step().index() >= last);
    last = flow.step().index();

    flow.ratify().await.unwrap();
    assert!(flow.step().index() >= last);
    last = flow.step().index();

    let _ = flow.ratify().await;
    assert!(flow.step().index() >= last);
}

#[tokio::test]
async fn submission_failure_preserves_signed_submission() {
    let provider = NullProvider::new()
        .with_account(voter())
        .with_balances(vec![5])
        .with_signature(signature());
    let dead = SubmissionClient::new("http://127.0.0.1:1/api/submit").unwrap();
    let mut flow = RatificationWorkflow::new(
        WorkflowConfig {
            token_ids: vec![TokenId::new(7)],
            ..config()
        },
        Some(provider),
        dead,
    );

    flow.connect().await.unwrap();
    assert!(flow.ratify().await.is_err());
    assert_eq!(flow.step(), Step::Submit);

    // The signed submission survives in the state for a later retry.
    match flow.state() {
        WorkflowState::Submitting { submission } => {
            assert_eq!(submission.address, voter());
            assert_eq!(submission.signature, signature());
        }
        other => panic!("expected Submitting, got {other:?}"),
    }
}

#[tokio::test]
async fn eligibility_gates_the_ratify_action() {
    let (client, received) = approvals_endpoint().await;
    let provider = NullProvider::new()
        .with_account(voter())
        .with_balances(vec![0, 0, 0]);
    let mut flow = RatificationWorkflow::new(config(), Some(provider), client);

    flow.connect().await.unwrap();
    assert!(!flow.state().can_ratify());
    assert!(flow.ratify().await.is_err());
    assert_eq!(flow.step(), Step::Ratify);
    // Nothing was ever submitted.
    assert!(received.lock().unwrap().is_empty());
}

//! The interactive flows behind each subcommand.

use std::io::{self, BufRead, Write};

use anyhow::Context;

use ratify_document::DocumentViewer;
use ratify_submission::SubmissionClient;
use ratify_wallet::ProviderClient;
use ratify_workflow::{RatificationWorkflow, Step, WorkflowState};

use crate::config::AppConfig;
use crate::steps::{render_steps, StepView};

/// Characters of the charter shown in the excerpt view.
const EXCERPT_CHARS: usize = 400;

/// Run the four-step wallet ratification flow.
pub async fn run_ratify(config: &AppConfig) -> anyhow::Result<()> {
    println!("Charter ratification");
    println!();
    show_charter(config, false).await?;

    let provider = match &config.provider_url {
        Some(url) => {
            Some(ProviderClient::new(url).context("failed to create provider client")?)
        }
        None => None,
    };
    let submission = SubmissionClient::new(&config.submit_endpoint)
        .context("failed to create submission client")?;
    let mut flow = RatificationWorkflow::new(config.workflow_config()?, provider, submission);

    loop {
        println!();
        println!("{}", render_steps(&step_views(flow.state(), config)));
        println!();
        match flow.step() {
            Step::Connect => {
                if !confirm("connect a wallet")? {
                    break;
                }
                if let Err(e) = flow.connect().await {
                    println!("Could not connect: {e}");
                    if !e.is_recoverable() {
                        break;
                    }
                }
            }
            Step::Ratify => {
                if !flow.state().can_ratify() {
                    println!(
                        "This wallet holds none of the eligibility tokens, so it cannot ratify."
                    );
                    break;
                }
                if !confirm("sign the ratification message")? {
                    break;
                }
                if let Err(e) = flow.ratify().await {
                    println!("Ratification did not complete: {e}");
                    if !e.is_recoverable() {
                        break;
                    }
                }
            }
            Step::Submit => {
                if !confirm("retry the submission")? {
                    break;
                }
                if let Err(e) = flow.resubmit().await {
                    println!("Submission failed: {e}");
                    if !e.is_recoverable() {
                        break;
                    }
                }
            }
            Step::Done => {
                if let WorkflowState::Done { approval_url, .. } = flow.state() {
                    match approval_url {
                        Some(url) => println!("Ratification recorded: {url}"),
                        None => println!("Ratification recorded."),
                    }
                }
                break;
            }
        }
    }
    Ok(())
}

/// Fetch and print the charter document in full.
pub async fn run_charter(config: &AppConfig) -> anyhow::Result<()> {
    show_charter(config, true).await
}

/// The redirect variant: show the charter, then forward the user to the
/// external voting platform.
pub async fn run_snapshot(config: &AppConfig) -> anyhow::Result<()> {
    println!("Charter");
    println!();
    show_charter(config, false).await?;
    println!();
    println!("Voting for this charter happens on an external platform.");
    println!("Cast your vote at {}", config.voting_url);
    Ok(())
}

/// Print the charter section: loading indicator, then the document and its
/// content-addressed provenance.
async fn show_charter(config: &AppConfig, full_text: bool) -> anyhow::Result<()> {
    let url = config.charter_url()?;
    let mut viewer = DocumentViewer::new(&url)?.on_load(|| println!("Charter loaded."));
    println!("Loading...");
    match viewer.load().await {
        Ok(doc) => {
            let text = doc.text();
            if full_text || text.chars().count() <= EXCERPT_CHARS {
                println!("{text}");
            } else {
                let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
                println!("{excerpt}");
                println!("… ({} bytes total)", doc.len());
            }
        }
        // The flow can continue without the document on screen; the hash
        // below still identifies what would be signed.
        Err(e) => println!("The charter could not be loaded: {e}"),
    }
    println!();
    println!("This charter is stored forever at {url}");
    println!("content hash: {}", config.charter_hash()?);
    Ok(())
}

/// Build the indicator for the current workflow state.
fn step_views(state: &WorkflowState, config: &AppConfig) -> Vec<StepView> {
    let step = state.step();
    let held = state.held().unwrap_or(0);
    vec![
        StepView {
            index: 0,
            label: "Connect a wallet holding eligibility tokens".into(),
            detail: None,
            cta: Some("connect".into()),
            active: step == Step::Connect,
            enabled: true,
        },
        StepView {
            index: 1,
            label: "Ratify the charter (eligibility tokens needed)".into(),
            detail: Some(format!(
                "Signing covers the charter content hash; the signature is recorded in {}",
                config.approvals_url
            )),
            cta: Some(format!(
                "ratify ({held} {})",
                if held == 1 { "token" } else { "tokens" }
            )),
            active: step == Step::Ratify,
            enabled: state.can_ratify(),
        },
        StepView {
            index: 2,
            label: if step == Step::Submit {
                "Submitting vote...".into()
            } else {
                "Submit vote".into()
            },
            detail: None,
            // Actionable only after a failed submission left the flow here.
            cta: Some("retry the submission".into()),
            active: step == Step::Submit,
            enabled: step == Step::Submit,
        },
        StepView {
            index: 3,
            label: "Done".into(),
            detail: match state {
                WorkflowState::Done {
                    approval_url: Some(url),
                    ..
                } => Some(format!("See your ratification and signature at {url}")),
                _ => None,
            },
            cta: None,
            active: step == Step::Done,
            enabled: false,
        },
    ]
}

/// Ask for confirmation; Enter confirms, `q` (or EOF) declines.
fn confirm(action: &str) -> anyhow::Result<bool> {
    print!("Press Enter to {action}, or q to quit: ");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(false);
    }
    Ok(!line.trim().eq_ignore_ascii_case("q"))
}

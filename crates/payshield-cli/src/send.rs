//! The send command: mount the form, collect amounts, submit.

use std::io::Write;

use payshield_core::{AppConfig, FileStore};
use payshield_form::TransactionForm;
use payshield_scoring::ScoringClient;
use tokio::io::AsyncBufReadExt;

use crate::location;
use crate::transaction_api;

pub async fn run(config: &AppConfig, amount: Option<String>) -> anyhow::Result<()> {
    let token = config.require_api_token()?.to_owned();
    let store = FileStore::new(config.identity_path.clone());
    let scoring = ScoringClient::with_base_url(&config.scoring_url)?;
    let http = reqwest::Client::new();

    let mut form = TransactionForm::new(store, scoring, token);
    match &config.geolocation_url {
        Some(endpoint) => form.mount(location::fetch_position(&http, endpoint)).await,
        None => form.mount(payshield_core::unsupported_fix()).await,
    }
    if let Some(message) = &form.state().error {
        println!("{message}");
    }

    match amount {
        Some(raw) => submit_once(&mut form, config, &http, raw).await,
        None => run_interactive(&mut form, config, &http).await,
    }
}

/// Runs one submission and reports its outcome on stdout.
async fn submit_once(
    form: &mut TransactionForm<FileStore>,
    config: &AppConfig,
    http: &reqwest::Client,
    raw: String,
) -> anyhow::Result<()> {
    form.set_amount(raw);

    let mut sent = false;
    form.submit(
        |request, token| {
            transaction_api::create_transaction(http, &config.transaction_api_url, request, token)
        },
        || sent = true,
    )
    .await;

    if sent {
        println!("Transaction sent.");
    }
    if let Some(message) = &form.state().error {
        println!("{message}");
    }
    Ok(())
}

/// Prompt loop. A blank entry or `q` quits; anything else is submitted.
async fn run_interactive(
    form: &mut TransactionForm<FileStore>,
    config: &AppConfig,
    http: &reqwest::Client,
) -> anyhow::Result<()> {
    println!("Make a Transaction");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        print!("Enter Amount: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let entry = line.trim();
        if entry.is_empty() || entry == "q" {
            break;
        }

        submit_once(form, config, http, entry.to_owned()).await?;
    }
    Ok(())
}

mod config;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use todaytag_core::constants::exit_code;
use todaytag_core::filter::today_in;
use todaytag_core::{Credential, ReconciliationEngine, RunReport, RunReporter};
use todaytag_provider_tribe::TribeClient;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "todaytag", version)]
#[command(
    about = "Move the 'today' category of a WordPress event calendar onto the events taking place today"
)]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = Cli::parse();
    logging::init_tracing();

    let cfg = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            return ExitCode::from(exit_code::INVALID_CONFIG);
        }
    };

    let today = today_in(cfg.timezone);
    info!(%today, timezone = %cfg.timezone, "Reconciling category 'today'");

    match reconcile(&cfg, |var| std::env::var(var).ok(), today).await {
        Ok(report) => ExitCode::from(RunReporter::emit(&report)),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(exit_code::INVALID_CONFIG)
        }
    }
}

/// One full pass. Credentials are resolved before any request goes out.
async fn reconcile<F>(cfg: &config::Config, lookup: F, today: NaiveDate) -> Result<RunReport>
where
    F: FnOnce(&str) -> Option<String>,
{
    let credential = match Credential::from_lookup(&cfg.credential_env, lookup) {
        Ok(credential) => credential,
        Err(err) => return Ok(RunReport::aborted(err)),
    };

    let client = Arc::new(
        TribeClient::new(cfg.tribe_config(), credential).context("Failed to build HTTP client")?,
    );

    let mut engine =
        ReconciliationEngine::new(client.clone(), client, cfg.tag).dry_run(cfg.dry_run);
    Ok(engine.run(today).await)
}

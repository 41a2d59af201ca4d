//! check_ha_state - Nagios plugin for Home Assistant
//!
//! Fetches a single entity's state over the REST API and reports
//! OK/CRITICAL based on the state value and the age of its last
//! update/change timestamps.

mod check;
mod cli;
mod client;
mod config;
mod logging;
mod nagios;
mod state;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use cli::Cli;
use client::HaClient;
use config::Credentials;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let code = nagios::report(run(cli).await);
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<String> {
    let credentials =
        Credentials::resolve(cli.config.as_deref(), cli.url.as_deref(), cli.token.as_deref())?;

    let state = HaClient::new(credentials).fetch_state(&cli.entity).await?;

    check::evaluate(&state, Utc::now(), cli.last_updated_age, cli.last_changed_age)
}

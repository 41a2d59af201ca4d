//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::Parser;
use std::path::PathBuf;

/// Nagios plugin for Home Assistant entity states
#[derive(Parser, Debug)]
#[command(name = "check_ha_state")]
#[command(about = "Check the state and freshness of a Home Assistant entity", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML configuration file containing "url" and "token" properties
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Home Assistant url. Example: http://127.0.0.1:8123
    #[arg(long)]
    pub url: Option<String>,

    /// Home Assistant API token
    #[arg(long)]
    pub token: Option<String>,

    /// Home Assistant entity id
    #[arg(short = 'e', long)]
    pub entity: String,

    /// Maximum last updated age in seconds (0 disables the check)
    #[arg(short = 'u', long = "last_updated_age", default_value_t = 0)]
    pub last_updated_age: u64,

    /// Maximum last changed age in seconds (0 disables the check)
    #[arg(short = 'c', long = "last_changed_age", default_value_t = 0)]
    pub last_changed_age: u64,

    /// Show debug info on stderr
    #[arg(long)]
    pub debug: bool,
}

//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "nac-usage")]
#[command(version)]
#[command(about = "Meraki NAC license usage report and Excel export", long_about = None)]
pub struct Cli {
    /// API endpoint URL
    #[arg(long, env = "MERAKI_API_URL")]
    pub api_url: Option<String>,

    /// API key for authentication (prompted for when omitted)
    #[arg(long, env = "MERAKI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Console format for the usage result
    #[arg(long, short)]
    pub format: Option<OutputFormat>,

    /// Export file name used when no file of that name exists
    #[arg(long, short)]
    pub output: Option<String>,

    /// Directory the export is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Profile name from config file
    #[arg(long, short)]
    pub profile: Option<String>,

    /// Log requests to stderr
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

//! nac-usage CLI
//!
//! # Usage
//!
//! ```bash
//! nac-usage
//! nac-usage --format table --output october.xlsx
//! MERAKI_API_KEY=... nac-usage --verbose
//! nac-usage config set api_url https://api.meraki.ca/api/v1
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nac_usage::cli::{Cli, Commands};
use nac_usage::commands;
use nac_usage::config::{self, Config, ExportConfig};
use nac_usage::console::Console;
use nac_usage::output::OutputFormat;
use nac_usage::{Error, ReportOptions};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Config { action }) = cli.command {
        if let Err(e) = commands::config::handle(action, cli.profile.as_deref()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let profile = Config::load(cli.profile.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config file");
        Config::default()
    });

    let options = ReportOptions {
        api_url: cli
            .api_url
            .or(profile.api_url)
            .unwrap_or_else(|| config::DEFAULT_API_URL.to_string()),
        api_key: cli.api_key,
        format: cli
            .format
            .or_else(|| profile.default_format.as_deref().and_then(OutputFormat::parse))
            .unwrap_or_default(),
        export: ExportConfig {
            output_dir: cli.output_dir,
            default_filename: cli
                .output
                .or(profile.output_file)
                .unwrap_or_else(|| config::DEFAULT_EXPORT_FILENAME.to_string()),
        },
    };

    let mut console = Console::stdio();
    match nac_usage::run(&mut console, &options).await {
        Ok(outcome) => tracing::debug!(?outcome, "run finished"),
        Err(Error::InputClosed) => {}
        Err(e) => eprintln!("Error: {}", e),
    }
}

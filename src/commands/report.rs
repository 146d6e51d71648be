//! Interactive license usage report

use std::io::{BufRead, Write};

use tracing::warn;

use super::ApiClient;
use crate::config::ExportConfig;
use crate::console::Console;
use crate::error::Result;
use crate::export;
use crate::output::OutputFormat;

/// Everything a run needs besides the operator
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub api_url: String,
    /// Skips the key prompt when set
    pub api_key: Option<String>,
    pub format: OutputFormat,
    pub export: ExportConfig,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    OrganizationsFailed,
    NoOrganizations,
    UsageFailed,
}

pub async fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &ReportOptions,
) -> Result<RunOutcome> {
    console.say("=== Meraki NAC License Usage ===\n")?;

    let api_key = match &options.api_key {
        Some(key) => key.clone(),
        None => console.ask("Enter your Meraki API key: ")?,
    };

    let client = match ApiClient::new(&options.api_url, &api_key) {
        Ok(client) => client,
        Err(e) => {
            console.fail(format!("Error retrieving organizations: {}", e))?;
            return Ok(RunOutcome::OrganizationsFailed);
        }
    };

    let organizations = match client.list_organizations().await {
        Ok(orgs) => orgs,
        Err(e) => {
            warn!(error = %e, "listing organizations failed");
            console.fail(format!("Error retrieving organizations: {}", e))?;
            if e.is_authentication_error() {
                console.say("Check that the API key is valid and has API access enabled.")?;
            }
            return Ok(RunOutcome::OrganizationsFailed);
        }
    };

    if organizations.is_empty() {
        console.warn("No organizations found for this API key.")?;
        return Ok(RunOutcome::NoOrganizations);
    }

    let org = console.select_organization(&organizations)?;

    console.say("\nExpected format: YYYY-MM-DD (e.g., 2025-10-01)")?;
    let start_date = console.ask("Start date: ")?;
    let end_date = console.ask("End date: ")?;

    let usage = match client.get_license_usage(&org.id, &start_date, &end_date).await {
        Ok(usage) => usage,
        Err(e) => {
            warn!(error = %e, org_id = %org.id, "license usage request failed");
            console.fail(format!("Error calling NAC License Usage API: {}", e))?;
            if e.is_not_found_error() {
                console.say(format!("NAC license usage is not available for {}.", org.name))?;
            }
            return Ok(RunOutcome::UsageFailed);
        }
    };

    console.say(format!("\n=== Results for {} ({}) ===", org.name, org.id))?;
    console.say(options.format.render(&usage)?)?;

    if console.confirm("\nDo you want to export the result to Excel? (y/n): ")? {
        export::export(console, &options.export, &usage.report)?;
    } else {
        console.say("Export skipped.")?;
    }

    Ok(RunOutcome::Completed)
}

//! Output formatting

use clap::ValueEnum;
use tabled::Table;

use crate::error::Result;
use crate::export::export_rows;
use crate::models::LicenseUsage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }

    /// Render a usage response for the console.
    pub fn render(&self, usage: &LicenseUsage) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&usage.raw)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&usage.raw)?),
            OutputFormat::Table => match export_rows(&usage.report) {
                Ok(rows) => Ok(Table::new(rows).to_string()),
                // Nothing tabular to show, so show what came back
                Err(_) => Ok(serde_json::to_string_pretty(&usage.raw)?),
            },
        }
    }
}

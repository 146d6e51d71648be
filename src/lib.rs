//! Meraki NAC license usage reporter
//!
//! Lists the organizations visible to an API key, fetches the NAC license
//! usage for one of them over a date range, prints it and optionally writes
//! the daily peak concurrent sessions to an Excel workbook.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod models;
pub mod output;

pub use commands::report::{run, ReportOptions, RunOutcome};
pub use commands::ApiClient;
pub use error::{Error, Result};

//! Spreadsheet export of license usage

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use tracing::{info, warn};

use crate::config::ExportConfig;
use crate::console::Console;
use crate::error::Result;
use crate::models::{ExportRow, UsageReport};

pub const EXTENSION: &str = ".xlsx";
pub const HEADERS: [&str; 2] = ["date", "peakConcurrentSessions"];

/// Why nothing was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSkip {
    UnexpectedFormat,
    NoValidRecords,
}

impl ExportSkip {
    pub fn message(&self) -> &'static str {
        match self {
            ExportSkip::UnexpectedFormat => "The returned data is not in the expected list format.",
            ExportSkip::NoValidRecords => "No valid records found for export.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    Skipped(ExportSkip),
}

/// Rows with both a date and a peak, in response order.
pub fn export_rows(report: &UsageReport) -> std::result::Result<Vec<ExportRow>, ExportSkip> {
    let records = report.records().ok_or(ExportSkip::UnexpectedFormat)?;
    let rows: Vec<ExportRow> = records.iter().filter_map(|r| r.to_row()).collect();
    if rows.is_empty() {
        return Err(ExportSkip::NoValidRecords);
    }
    Ok(rows)
}

/// Append the spreadsheet extension unless it is already there (any case).
pub fn ensure_extension(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, EXTENSION)
    }
}

/// Pick the output file name, asking the operator when the default is taken.
pub fn resolve_filename<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ExportConfig,
) -> Result<String> {
    let default = ensure_extension(&config.default_filename);
    if !config.output_dir.join(&default).exists() {
        return Ok(default);
    }

    console.warn(format!("The file '{}' already exists.", default))?;
    let choice = console.ask("Do you want to overwrite it (o) or rename (r)? [o/r]: ")?;
    if choice.eq_ignore_ascii_case("r") {
        loop {
            let name = console.ask("Enter the new filename (with .xlsx extension): ")?;
            if !name.is_empty() {
                return Ok(ensure_extension(&name));
            }
        }
    }

    console.say(format!("The file '{}' will be overwritten.", default))?;
    Ok(default)
}

/// Single sheet, header row, one row per record, no index column.
pub fn write_workbook(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, name) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_string(r, 0, &row.date)?;
        let peak = &row.peak_concurrent_sessions;
        match (peak.as_f64(), peak.as_str()) {
            (Some(n), _) => worksheet.write_number(r, 1, n)?,
            (None, Some(s)) => worksheet.write_string(r, 1, s)?,
            (None, None) => worksheet.write_string(r, 1, peak.to_string())?,
        };
    }

    workbook.save(path)?;
    Ok(())
}

/// Export `report`, reporting progress and skips on the console.
pub fn export<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ExportConfig,
    report: &UsageReport,
) -> Result<ExportOutcome> {
    let rows = match export_rows(report) {
        Ok(rows) => rows,
        Err(skip) => {
            warn!(?skip, "export aborted");
            console.warn(skip.message())?;
            return Ok(ExportOutcome::Skipped(skip));
        }
    };

    let filename = resolve_filename(console, config)?;
    let path = config.output_dir.join(&filename);
    write_workbook(&path, &rows)?;

    info!(path = %path.display(), rows = rows.len(), "export written");
    console.success(format!("Data exported to the file: {}", filename))?;
    Ok(ExportOutcome::Written(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_rows_drops_incomplete_records() {
        let report = UsageReport::from_value(&json!({
            "usageData": [
                {"date": "2025-10-01", "peakConcurrentSessions": 42},
                {"date": "2025-10-02"},
                {"peakConcurrentSessions": 7},
                {"date": "2025-10-04", "peakConcurrentSessions": 0}
            ]
        }));
        let rows = export_rows(&report).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2025-10-01");
        assert_eq!(rows[0].peak_concurrent_sessions.as_u64(), Some(42));
        assert_eq!(rows[1].date, "2025-10-04");
    }

    #[test]
    fn test_export_rows_keeps_order_and_duplicates() {
        let report = UsageReport::from_value(&json!([
            {"date": "2025-10-03", "peakConcurrentSessions": 3},
            {"date": "2025-10-01", "peakConcurrentSessions": 1},
            {"date": "2025-10-01", "peakConcurrentSessions": 1}
        ]));
        let dates: Vec<_> = export_rows(&report)
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec!["2025-10-03", "2025-10-01", "2025-10-01"]);
    }

    #[test]
    fn test_export_rows_skips() {
        assert_eq!(
            export_rows(&UsageReport::from_value(&json!("malformed"))),
            Err(ExportSkip::UnexpectedFormat)
        );
        assert_eq!(
            export_rows(&UsageReport::from_value(&json!({"usageData": []}))),
            Err(ExportSkip::NoValidRecords)
        );
    }

    #[test]
    fn test_ensure_extension() {
        assert_eq!(ensure_extension("report"), "report.xlsx");
        assert_eq!(ensure_extension("report.xlsx"), "report.xlsx");
        assert_eq!(ensure_extension("REPORT.XLSX"), "REPORT.XLSX");
        assert_eq!(ensure_extension("report.csv"), "report.csv.xlsx");
    }
}

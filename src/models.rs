//! API resource models

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// Organization resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: String,
    /// Organization name
    pub name: String,
}

/// One day of NAC license usage. Only the two fields the export needs are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageRecord {
    pub date: Option<String>,
    pub peak_concurrent_sessions: Option<Value>,
}

impl UsageRecord {
    /// A field counts as present unless it is missing or null; its type is not checked.
    pub fn from_value(value: &Value) -> Self {
        Self {
            date: present(value, "date").map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            peak_concurrent_sessions: present(value, "peakConcurrentSessions").cloned(),
        }
    }

    /// Both exported fields, when present
    pub fn to_row(&self) -> Option<ExportRow> {
        match (&self.date, &self.peak_concurrent_sessions) {
            (Some(date), Some(peak)) => Some(ExportRow {
                date: date.clone(),
                peak_concurrent_sessions: peak.clone(),
            }),
            _ => None,
        }
    }
}

fn present<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// Shape of a license usage response
#[derive(Debug, Clone, PartialEq)]
pub enum UsageReport {
    /// `{"usageData": [...]}`
    Wrapped(Vec<UsageRecord>),
    /// `[...]`
    Bare(Vec<UsageRecord>),
    /// Anything else
    Unrecognized,
}

impl UsageReport {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => match map.get("usageData") {
                Some(Value::Array(items)) => {
                    Self::Wrapped(items.iter().map(UsageRecord::from_value).collect())
                }
                _ => Self::Unrecognized,
            },
            Value::Array(items) => Self::Bare(items.iter().map(UsageRecord::from_value).collect()),
            _ => Self::Unrecognized,
        }
    }

    /// The record sequence, or `None` when the response had no recognizable list
    pub fn records(&self) -> Option<&[UsageRecord]> {
        match self {
            Self::Wrapped(records) | Self::Bare(records) => Some(records),
            Self::Unrecognized => None,
        }
    }
}

/// A license usage response: the decoded JSON as received plus its interpreted shape
#[derive(Debug, Clone)]
pub struct LicenseUsage {
    pub raw: Value,
    pub report: UsageReport,
}

impl From<Value> for LicenseUsage {
    fn from(raw: Value) -> Self {
        let report = UsageReport::from_value(&raw);
        Self { raw, report }
    }
}

/// Row of the exported table
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct ExportRow {
    pub date: String,
    #[serde(rename = "peakConcurrentSessions")]
    #[tabled(rename = "peakConcurrentSessions", display_with = "display_cell")]
    pub peak_concurrent_sessions: Value,
}

fn display_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrapped_report() {
        let value = json!({
            "usageData": [
                {"date": "2025-10-01", "peakConcurrentSessions": 42, "licenseCount": 100},
                {"date": "2025-10-02"}
            ]
        });
        let report = UsageReport::from_value(&value);
        let records = report.records().unwrap();
        assert!(matches!(report, UsageReport::Wrapped(_)));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date.as_deref(), Some("2025-10-01"));
        assert_eq!(records[0].peak_concurrent_sessions, Some(json!(42)));
        assert_eq!(records[1].peak_concurrent_sessions, None);
    }

    #[test]
    fn test_bare_report() {
        let value = json!([{"date": "2025-10-01", "peakConcurrentSessions": 5}]);
        let report = UsageReport::from_value(&value);
        assert!(matches!(report, UsageReport::Bare(ref r) if r.len() == 1));
    }

    #[test]
    fn test_unrecognized_reports() {
        assert_eq!(UsageReport::from_value(&json!("oops")), UsageReport::Unrecognized);
        assert_eq!(UsageReport::from_value(&json!(12)), UsageReport::Unrecognized);
        assert_eq!(
            UsageReport::from_value(&json!({"usageData": "nope"})),
            UsageReport::Unrecognized
        );
        assert_eq!(
            UsageReport::from_value(&json!({"other": []})),
            UsageReport::Unrecognized
        );
    }

    #[test]
    fn test_non_object_record_is_empty() {
        assert_eq!(UsageRecord::from_value(&json!("2025-10-01")), UsageRecord::default());
        assert!(UsageRecord::from_value(&json!({"date": null, "peakConcurrentSessions": 1}))
            .to_row()
            .is_none());
    }

    #[test]
    fn test_present_fields_of_any_type_are_kept() {
        let row = UsageRecord::from_value(&json!({"date": "2025-10-01", "peakConcurrentSessions": "5"}))
            .to_row()
            .unwrap();
        assert_eq!(row.peak_concurrent_sessions, json!("5"));

        let row = UsageRecord::from_value(&json!({"date": 20251001, "peakConcurrentSessions": 1}))
            .to_row()
            .unwrap();
        assert_eq!(row.date, "20251001");
    }

    #[test]
    fn test_organization_ignores_extra_fields() {
        let org: Organization = serde_json::from_value(json!({
            "id": "549236",
            "name": "DevNet Sandbox",
            "url": "https://n149.meraki.com/o/-t35Mb/manage/organization/overview"
        }))
        .unwrap();
        assert_eq!(org.id, "549236");
        assert_eq!(org.name, "DevNet Sandbox");
    }
}

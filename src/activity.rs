//! Activity Log
//!
//! Filtering and CSV/JSON export of activity entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{ActivityCategory, ActivityEntry};

pub const CSV_FILE_NAME: &str = "activity-log.csv";
pub const JSON_FILE_NAME: &str = "activity-log.json";

const CSV_COLUMNS: [&str; 7] = ["timestamp", "action", "description", "category", "user", "email", "metadata"];

/// Search box, category select and date range of the activity page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityQuery {
    pub search: String,
    pub category: Option<ActivityCategory>,
    pub start: Option<NaiveDate>,
    /// Inclusive: the whole end day matches
    pub end: Option<NaiveDate>,
}

impl ActivityQuery {
    pub fn matches(&self, entry: &ActivityEntry) -> bool {
        let q = self.search.trim().to_lowercase();
        let text_ok = q.is_empty()
            || entry.action.to_lowercase().contains(&q)
            || entry.description.to_lowercase().contains(&q)
            || entry.user_name.to_lowercase().contains(&q);
        let category_ok = self.category.is_none_or(|c| c == entry.category);
        let day = entry.timestamp.date_naive();
        let start_ok = self.start.is_none_or(|s| day >= s);
        let end_ok = self.end.is_none_or(|e| day <= e);
        text_ok && category_ok && start_ok && end_ok
    }

    pub fn apply<'a>(&self, entries: &'a [ActivityEntry]) -> Vec<&'a ActivityEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Parse an `<input type="date">` value; empty or invalid means unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn metadata_text(entry: &ActivityEntry) -> String {
    entry
        .metadata
        .iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Fixed columns, metadata flattened into one `k=v; k=v` cell
pub fn to_csv(entries: &[&ActivityEntry]) -> String {
    let mut lines = vec![CSV_COLUMNS.join(",")];
    for entry in entries {
        let row = [
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            entry.action.clone(),
            entry.description.clone(),
            entry.category.value().to_string(),
            entry.user_name.clone(),
            entry.user_email.clone(),
            metadata_text(entry),
        ];
        lines.push(row.iter().map(|f| csv_field(f)).collect::<Vec<_>>().join(","));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct ExportRow<'a> {
    timestamp: DateTime<Utc>,
    action: &'a str,
    description: &'a str,
    category: ActivityCategory,
    user: &'a str,
    email: &'a str,
    #[serde(flatten)]
    metadata: serde_json::Map<String, serde_json::Value>,
}

/// Pretty JSON array; metadata keys are merged into each object
pub fn to_json(entries: &[&ActivityEntry]) -> Result<String, serde_json::Error> {
    let rows: Vec<ExportRow> = entries
        .iter()
        .map(|e| ExportRow {
            timestamp: e.timestamp,
            action: &e.action,
            description: &e.description,
            category: e.category,
            user: &e.user_name,
            email: &e.user_email,
            metadata: e.metadata.iter().cloned().collect(),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::activities;

    fn ids(hits: &[&ActivityEntry]) -> Vec<String> {
        hits.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_search_covers_action_description_user() {
        let all = activities();
        let mut q = ActivityQuery { search: "UPLOAD".to_string(), ..Default::default() };
        assert_eq!(ids(&q.apply(&all)), vec!["1"]);
        q.search = "knowledge base".to_string();
        assert_eq!(ids(&q.apply(&all)), vec!["3"]);
        q.search = "sarah".to_string();
        assert_eq!(ids(&q.apply(&all)), vec!["4"]);
        q.search = "jane.smith".to_string();
        assert!(q.apply(&all).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let all = activities();
        let q = ActivityQuery { category: Some(ActivityCategory::Validation), ..Default::default() };
        assert_eq!(ids(&q.apply(&all)), vec!["2"]);
        let q = ActivityQuery { category: Some(ActivityCategory::System), ..Default::default() };
        assert!(q.apply(&all).is_empty());
    }

    #[test]
    fn test_date_range_end_is_inclusive() {
        let all = activities();
        let q = ActivityQuery {
            end: parse_date_input("2024-03-14"),
            ..Default::default()
        };
        assert_eq!(ids(&q.apply(&all)), vec!["3", "4"]);

        let q = ActivityQuery {
            start: parse_date_input("2024-03-15"),
            end: parse_date_input("2024-03-15"),
            ..Default::default()
        };
        assert_eq!(ids(&q.apply(&all)), vec!["1", "2"]);
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("15/03/2024"), None);
    }

    #[test]
    fn test_csv_export() {
        let all = activities();
        let rows: Vec<&ActivityEntry> = all.iter().collect();
        let csv = to_csv(&rows[..2]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "timestamp,action,description,category,user,email,metadata");
        assert_eq!(
            lines[1],
            "2024-03-15 10:30:00,Document Upload,\"Uploaded new RFP document \"\"Enterprise Software Requirements.pdf\"\"\",document,John Doe,john.doe@example.com,fileSize=2.5MB; documentType=RFP"
        );
        assert!(lines[2].ends_with(",documentId=DOC-2024-001; standardsChecked=15"));
        assert_eq!(to_csv(&[]), CSV_COLUMNS.join(","));
    }

    #[test]
    fn test_json_export_flattens_metadata() {
        let all = activities();
        let rows: Vec<&ActivityEntry> = all.iter().take(1).collect();
        let json = to_json(&rows).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &parsed[0];
        assert_eq!(first["category"], "document");
        assert_eq!(first["user"], "John Doe");
        assert_eq!(first["fileSize"], "2.5MB");
        assert_eq!(first["timestamp"], "2024-03-15T10:30:00Z");
    }
}

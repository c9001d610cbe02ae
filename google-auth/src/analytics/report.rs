//! Report query and result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters of a `reports.query` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    /// Channel or content owner, e.g. `channel==MINE`.
    pub ids: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub metrics: Vec<String>,
}

impl ReportQuery {
    /// Query the authorized user's own channel.
    pub fn my_channel(start_date: NaiveDate, end_date: NaiveDate, metrics: Vec<String>) -> Self {
        Self {
            ids: "channel==MINE".to_string(),
            start_date,
            end_date,
            metrics,
        }
    }

    /// Views on the user's channel for 2013-05-07.
    pub fn example() -> Self {
        let day = NaiveDate::from_ymd_opt(2013, 5, 7).unwrap_or_default();
        Self::my_channel(day, day, vec!["views".to_string()])
    }

    /// Query string parameters in the form the API expects.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ids", self.ids.clone()),
            ("start-date", self.start_date.format("%Y-%m-%d").to_string()),
            ("end-date", self.end_date.format("%Y-%m-%d").to_string()),
            ("metrics", self.metrics.join(",")),
        ]
    }
}

/// Column description in a report result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub name: String,
    pub column_type: String,
    pub data_type: String,
}

/// Result table returned by `reports.query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub column_headers: Vec<ColumnHeader>,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_query_params() {
        assert_eq!(
            ReportQuery::example().query_params(),
            vec![
                ("ids", "channel==MINE".to_string()),
                ("start-date", "2013-05-07".to_string()),
                ("end-date", "2013-05-07".to_string()),
                ("metrics", "views".to_string()),
            ]
        );
    }

    #[test]
    fn test_metrics_are_comma_separated() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let query = ReportQuery::my_channel(
            day,
            day,
            vec!["views".to_string(), "estimatedRevenue".to_string()],
        );

        assert_eq!(query.query_params()[3].1, "views,estimatedRevenue");
    }

    #[test]
    fn test_deserialize_report() {
        let body = r#"{
            "kind": "youtubeAnalytics#resultTable",
            "columnHeaders": [{"name": "views", "columnType": "METRIC", "dataType": "INTEGER"}],
            "rows": [[1234]]
        }"#;

        let report: Report = serde_json::from_str(body).unwrap();
        assert_eq!(report.column_headers[0].name, "views");
        assert_eq!(report.rows, vec![vec![serde_json::json!(1234)]]);
    }

    #[test]
    fn test_deserialize_empty_report() {
        let report: Report = serde_json::from_str(r#"{"kind":"youtubeAnalytics#resultTable"}"#).unwrap();
        assert!(report.rows.is_empty());
    }
}

//! YouTube Analytics reporting API, called with a bearer access token.

mod client;
mod report;

pub use client::{issue_example_report, AnalyticsClient, DEFAULT_BASE_URL};
pub use report::{ColumnHeader, Report, ReportQuery};

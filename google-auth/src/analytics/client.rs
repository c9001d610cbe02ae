//! Bearer-authenticated YouTube Analytics client.

use log::*;
use secrecy::SecretString;

use super::report::{Report, ReportQuery};
use crate::error::{analytics_error, AnalyticsErrorKind, Error, ErrorKind};
use crate::http::{HttpClientBuilder, HttpClientConfig};

/// YouTube Analytics API v1 base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/analytics/v1";

/// YouTube Analytics API client.
///
/// Every request sent through this client carries `Authorization: Bearer <access_token>`.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalyticsClient {
    /// Create a new analytics client with the given access token and base URL.
    pub fn new(
        access_token: SecretString,
        base_url: &str,
        config: HttpClientConfig,
    ) -> Result<Self, Error> {
        let client = HttpClientBuilder::new()
            .with_config(config)
            .with_bearer_token(access_token)
            .build()
            .map_err(|e| {
                warn!("Failed to build analytics client: {}", e);
                e
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run a `reports.query` call.
    pub async fn query(&self, query: &ReportQuery) -> Result<Report, Error> {
        let url = format!("{}/reports", self.base_url);

        debug!(
            "Querying YouTube Analytics for {} from {} to {}",
            query.ids, query.start_date, query.end_date
        );

        let response = self
            .client
            .get(&url)
            .query(&query.query_params())
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to query YouTube Analytics: {:?}", e);
                Error::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            let report: Report = response.json().await.map_err(|e| {
                warn!("Failed to parse YouTube Analytics report: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::Analytics(AnalyticsErrorKind::InvalidResponse),
                }
            })?;
            info!("Received YouTube Analytics report with {} rows", report.rows.len());
            Ok(report)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!("YouTube Analytics API error ({}): {}", status, error_text);
            Err(analytics_error(
                AnalyticsErrorKind::Provider {
                    status: status.as_u16(),
                    message: error_text,
                },
                "reports.query failed",
            ))
        }
    }
}

/// Attach the access token to a new client and run the example report.
///
/// This is the pattern every later authenticated call follows.
pub async fn issue_example_report(
    access_token: SecretString,
    base_url: &str,
    config: HttpClientConfig,
) -> Result<Report, Error> {
    let client = AnalyticsClient::new(access_token, base_url, config)?;
    client.query(&ReportQuery::example()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpErrorKind;
    use mockito::{Matcher, Server};

    const REPORT_BODY: &str = r#"{
        "kind": "youtubeAnalytics#resultTable",
        "columnHeaders": [{"name": "views", "columnType": "METRIC", "dataType": "INTEGER"}],
        "rows": [[42]]
    }"#;

    fn example_query_matcher() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("ids".to_string(), "channel==MINE".to_string()),
            Matcher::UrlEncoded("start-date".to_string(), "2013-05-07".to_string()),
            Matcher::UrlEncoded("end-date".to_string(), "2013-05-07".to_string()),
            Matcher::UrlEncoded("metrics".to_string(), "views".to_string()),
        ])
    }

    #[tokio::test]
    async fn test_issue_example_report_sends_bearer_and_fixed_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/reports")
            .match_header("authorization", "Bearer T")
            .match_query(example_query_matcher())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(REPORT_BODY)
            .create_async()
            .await;

        let report = issue_example_report(
            SecretString::from("T".to_string()),
            &server.url(),
            HttpClientConfig::default(),
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(report.rows, vec![vec![serde_json::json!(42)]]);
    }

    #[tokio::test]
    async fn test_every_request_carries_bearer_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/reports")
            .match_header("authorization", "Bearer T")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(REPORT_BODY)
            .expect(2)
            .create_async()
            .await;

        let client = AnalyticsClient::new(
            SecretString::from("T".to_string()),
            &format!("{}/", server.url()),
            HttpClientConfig::default(),
        )
        .unwrap();
        client.query(&ReportQuery::example()).await.unwrap();

        let day = chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let other = ReportQuery::my_channel(day, day, vec!["likes".to_string()]);
        client.query(&other).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_query_maps_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/reports")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error":{"code":401,"message":"Invalid Credentials"}}"#)
            .create_async()
            .await;

        let err = issue_example_report(
            SecretString::from("expired".to_string()),
            &server.url(),
            HttpClientConfig::default(),
        )
        .await
        .unwrap_err();

        match err.error_kind {
            ErrorKind::Analytics(AnalyticsErrorKind::Provider { status, message }) => {
                assert_eq!(status, 401);
                assert!(message.contains("Invalid Credentials"));
            }
            other => panic!("Expected analytics provider error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_unreachable_api_is_transport_error() {
        let err = issue_example_report(
            SecretString::from("T".to_string()),
            "http://127.0.0.1:1",
            HttpClientConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.error_kind, ErrorKind::Http(HttpErrorKind::Network));
    }
}

use tracing::debug;

use super::InsightsSummary;
use crate::error::{BizEdgeError, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const INSIGHTS_PATH: &str = "/api/insights";

/// Thin HTTP boundary for the insights endpoint. Never falls back on its own.
#[derive(Debug, Clone)]
pub struct InsightsClient {
    client: reqwest::Client,
}

impl InsightsClient {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn endpoint(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), INSIGHTS_PATH)
    }

    pub async fn fetch(&self, base_url: &str) -> Result<InsightsSummary> {
        let url = Self::endpoint(base_url);
        debug!(%url, "requesting insights");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BizEdgeError::Status(status));
        }

        // Read the body first so decode failures are reported as Parse, not Transport.
        let body = response.bytes().await?;
        let summary: InsightsSummary = serde_json::from_slice(&body)?;

        Ok(summary)
    }
}

impl Default for InsightsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_client() -> InsightsClient {
        InsightsClient::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
    }

    #[test]
    fn test_endpoint_joins_path() {
        assert_eq!(
            InsightsClient::endpoint("http://localhost:8000"),
            "http://localhost:8000/api/insights"
        );
        assert_eq!(
            InsightsClient::endpoint("https://api.example.com//"),
            "https://api.example.com/api/insights"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let result = direct_client()
            .fetch(&format!("http://127.0.0.1:{}", port))
            .await;
        assert!(matches!(result, Err(BizEdgeError::Transport(_))));
    }
}

use tracing::{info, warn};

use super::{fallback_summary, DerivedMetrics, InsightsClient, InsightsSummary, DEFAULT_BACKEND_URL, FALLBACK_WARNING};

/// Outcome of one resolution: either live data, or demo data plus a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub summary: InsightsSummary,
    pub warning: Option<String>,
    /// Base address the request was sent to.
    pub base_url: String,
}

impl Resolution {
    pub fn is_live(&self) -> bool {
        self.warning.is_none()
    }

    pub fn metrics(&self) -> DerivedMetrics {
        self.summary.metrics()
    }
}

#[derive(Debug, Clone)]
pub struct InsightsResolver {
    client: InsightsClient,
    default_base_url: Option<String>,
}

impl InsightsResolver {
    /// `default_base_url` is the configured backend, used when `resolve` gets no override.
    pub fn new(client: InsightsClient, default_base_url: Option<String>) -> Self {
        Self {
            client,
            default_base_url,
        }
    }

    /// Explicit argument, then configured default, then the local dev server.
    pub fn effective_base_url(&self, base_url: Option<&str>) -> String {
        base_url
            .or(self.default_base_url.as_deref())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string()
    }

    pub async fn resolve(&self, base_url: Option<&str>) -> Resolution {
        let base_url = self.effective_base_url(base_url);

        match self.client.fetch(&base_url).await {
            Ok(summary) => {
                info!(%base_url, "loaded live insights");
                Resolution {
                    summary,
                    warning: None,
                    base_url,
                }
            }
            Err(e) => {
                warn!(%base_url, error = %e, "insights fetch failed, using demo data");
                Resolution {
                    summary: fallback_summary(),
                    warning: Some(FALLBACK_WARNING.to_string()),
                    base_url,
                }
            }
        }
    }
}

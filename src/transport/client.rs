//! HTTP client for the lead submission endpoint
//!
//! Posts the payload as JSON. Any non-2xx status or connection fault is an
//! error; no retry and no timeout beyond the transport default.

use super::traits::SubmissionTransport;
use crate::submit::SubmissionPayload;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;

/// Default submission endpoint
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/contact";

/// HTTP transport for lead submission. Cloning shares the underlying
/// connection pool, so a clone can be moved onto a submission task.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the given endpoint; `LEADFORM_ENDPOINT`
    /// overrides the configured value
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = std::env::var("LEADFORM_ENDPOINT")
            .ok()
            .or(endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("submission endpoint returned {status}"));
        }

        tracing::info!("lead submitted to {}", self.endpoint);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_endpoint_when_unconfigured() {
        let transport = HttpTransport::new(None);
        assert_eq!(transport.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_configured_endpoint_is_used() {
        let transport = HttpTransport::new(Some("https://example.com/leads".to_string()));
        assert_eq!(transport.endpoint(), "https://example.com/leads");
    }
}

//! Fire-and-forget analytics tracking
//!
//! Conversion events are best effort: recording never blocks the caller and
//! failures are logged at debug level, never surfaced.

use std::collections::HashMap;

/// Sink for conversion events
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    /// Record one event. Must not block and must not fail the caller.
    fn record(&self, event: &str, fields: HashMap<String, String>);
}

/// Sink that only logs events; used when no collector is configured
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &str, fields: HashMap<String, String>) {
        tracing::info!(event, ?fields, "conversion tracked");
    }
}

/// Sink posting events to an HTTP collector on a detached task
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl EventSink for HttpSink {
    fn record(&self, event: &str, fields: HashMap<String, String>) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let body = serde_json::json!({ "event": event, "fields": fields });

        // Detached: the submit outcome never waits on, or learns about,
        // the tracking call
        tokio::spawn(async move {
            match client.post(&endpoint).json(&body).send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::debug!("analytics collector returned {}", response.status());
                }
                Ok(_) => {}
                Err(err) => tracing::debug!("analytics post failed: {err}"),
            }
        });
    }
}

//! Trait abstraction for the submission transport to enable mocking in tests

use crate::submit::SubmissionPayload;
use anyhow::Result;
use async_trait::async_trait;

/// One-shot lead submission. A single call per validated form; any
/// non-success response or transport fault is an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Submit one lead payload to the collecting endpoint
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()>;
}

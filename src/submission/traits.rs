//! Trait abstraction for the submission transport to enable mocking in tests

use crate::state::FormSnapshot;
use anyhow::Result;
use async_trait::async_trait;

/// Opaque payload returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub message: String,
}

/// Sends a completed signup form somewhere that creates the account.
///
/// An `Err` is a failed submission; its `Display` is shown to the user as is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, snapshot: FormSnapshot) -> Result<SubmissionReceipt>;
}

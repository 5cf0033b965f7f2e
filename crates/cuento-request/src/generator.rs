//! Story generator seam
//!
//! The generation backend (text, illustrations, rendering, storage) lives
//! outside this workspace. It receives a [`GenerationRequest`] by value and
//! answers with a [`SubmissionReceipt`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use ulid::Ulid;

use crate::request::GenerationRequest;

/// External collaborator that turns requests into stories
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Hand a request over for generation
    ///
    /// # Errors
    /// [`GenerationError`] if the backend refuses or cannot be reached.
    async fn submit(&self, request: GenerationRequest) -> Result<SubmissionReceipt, GenerationError>;
}

/// Acknowledgement that a backend accepted a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Submission identifier (ULID for sortability)
    pub id: Ulid,
    /// Acceptance time
    pub accepted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Receipt stamped now
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Ulid::new(),
            accepted_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend failures
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Backend could not be reached
    #[error("generator unavailable: {0}")]
    Unavailable(String),

    /// Backend refused the request
    #[error("generator rejected request: {0}")]
    Rejected(String),
}

impl GenerationError {
    /// Whether resubmitting the same request may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Generator that only logs what it would have generated
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunGenerator;

impl DryRunGenerator {
    /// Create new dry-run generator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StoryGenerator for DryRunGenerator {
    async fn submit(&self, request: GenerationRequest) -> Result<SubmissionReceipt, GenerationError> {
        let receipt = SubmissionReceipt::new();
        tracing::info!(
            id = %receipt.id,
            title = request.title().unwrap_or_default(),
            context = request.context().unwrap_or_default(),
            grade = request.grade_level(),
            pages = request.page_length(),
            "dry-run story generation"
        );
        tracing::debug!("Generating story with data: {:?}", request);
        Ok(receipt)
    }
}

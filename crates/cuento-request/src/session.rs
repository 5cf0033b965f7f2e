//! Form session
//!
//! Owns one [`ConfigurationState`] and the generator it submits to. The
//! session never resets its state on its own; callers decide when a new
//! request starts.

use std::sync::Arc;

use cuento_catalog::CatalogSet;
use cuento_state::{ConfigurationState, FieldEvent, StateError};

use crate::builder::{CompletenessRules, RequestBuilder};
use crate::failure::{describe, ValidationFailure};
use crate::generator::{GenerationError, StoryGenerator, SubmissionReceipt};
use crate::request::GenerationRequest;

/// Submission failures
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// State failed one or more completeness rules
    #[error("incomplete request: {}", describe(.0))]
    Invalid(Vec<ValidationFailure>),

    /// Backend failed
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// One user's editing session
#[derive(Debug)]
pub struct Session<G> {
    state: ConfigurationState,
    builder: RequestBuilder,
    generator: G,
}

impl<G: StoryGenerator> Session<G> {
    /// New session with an empty state
    #[must_use]
    pub fn new(catalogs: Arc<CatalogSet>, generator: G) -> Self {
        Self {
            state: ConfigurationState::new(catalogs),
            builder: RequestBuilder::new(),
            generator,
        }
    }

    /// With completeness rules
    #[must_use]
    pub fn with_rules(mut self, rules: CompletenessRules) -> Self {
        self.builder = RequestBuilder::with_rules(rules);
        self
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ConfigurationState {
        &self.state
    }

    /// Mutable state, for calling mutators directly or resetting
    #[inline]
    pub fn state_mut(&mut self) -> &mut ConfigurationState {
        &mut self.state
    }

    /// Generator this session submits to
    #[inline]
    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Apply one input event
    ///
    /// # Errors
    /// The mutator's error; the state is unchanged.
    #[inline]
    pub fn apply(&mut self, event: FieldEvent) -> Result<(), StateError> {
        self.state.apply(event)
    }

    /// Build without submitting
    ///
    /// # Errors
    /// Every failing completeness rule.
    #[inline]
    pub fn preview(&self) -> Result<GenerationRequest, Vec<ValidationFailure>> {
        self.builder.build(&self.state)
    }

    /// Build and hand the request to the generator
    ///
    /// # Errors
    /// [`SubmitError::Invalid`] before anything is sent, or
    /// [`SubmitError::Generation`] from the backend.
    pub async fn submit(&self) -> Result<SubmissionReceipt, SubmitError> {
        let request = self.builder.build(&self.state).map_err(|failures| {
            tracing::debug!(failures = failures.len(), "submission blocked: {}", describe(&failures));
            SubmitError::Invalid(failures)
        })?;

        match self.generator.submit(request).await {
            Ok(receipt) => {
                tracing::info!(id = %receipt.id, "story request accepted");
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(retryable = e.is_retryable(), "story request failed: {}", e);
                Err(e.into())
            }
        }
    }
}

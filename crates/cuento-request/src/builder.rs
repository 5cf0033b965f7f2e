//! Request builder
//!
//! Checks a [`ConfigurationState`] against the completeness rules and either
//! snapshots it into a [`GenerationRequest`] or reports every failing rule.
//!
//! Rules run in a fixed order and all of them run:
//!
//! 1. grade level
//! 2. page length
//! 3. context
//! 4. primary competence
//! 5. title or context

use cuento_state::ConfigurationState;
use serde::{Deserialize, Serialize};

use crate::failure::ValidationFailure;
use crate::request::GenerationRequest;

/// Completeness rule configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletenessRules {
    /// Context must be selected
    ///
    /// When set, a missing context is reported as
    /// [`ValidationFailure::MissingContext`] and the title-or-context rule
    /// adds nothing further. When cleared, a title alone is enough and
    /// [`ValidationFailure::MissingTitleOrContext`] fires only when both are
    /// absent.
    pub context_required: bool,
}

impl CompletenessRules {
    /// Default rules
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With context requirement
    #[inline]
    #[must_use]
    pub fn with_context_required(mut self, required: bool) -> Self {
        self.context_required = required;
        self
    }
}

impl Default for CompletenessRules {
    fn default() -> Self {
        Self {
            context_required: true,
        }
    }
}

/// Validates states and produces requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestBuilder {
    rules: CompletenessRules,
}

impl RequestBuilder {
    /// Builder with default rules
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with custom rules
    #[inline]
    #[must_use]
    pub fn with_rules(rules: CompletenessRules) -> Self {
        Self { rules }
    }

    /// Active rules
    #[inline]
    #[must_use]
    pub fn rules(&self) -> CompletenessRules {
        self.rules
    }

    /// All failing rules, in rule order; empty when the state is complete
    #[must_use]
    pub fn validate(&self, state: &ConfigurationState) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        let has_context = state.context().is_some();
        let has_title = !state.title().trim().is_empty();

        if state.grade_level().is_none() {
            failures.push(ValidationFailure::MissingGradeLevel);
        }
        if state.page_length().is_none() {
            failures.push(ValidationFailure::MissingPageLength);
        }
        if self.rules.context_required && !has_context {
            failures.push(ValidationFailure::MissingContext);
        }
        if state.primary_competence().is_none() {
            failures.push(ValidationFailure::MissingPrimaryCompetence);
        }
        if !self.rules.context_required && !has_title && !has_context {
            failures.push(ValidationFailure::MissingTitleOrContext);
        }

        failures
    }

    /// Snapshot a complete state into a request
    ///
    /// # Errors
    /// Every failing rule, in rule order.
    pub fn build(&self, state: &ConfigurationState) -> Result<GenerationRequest, Vec<ValidationFailure>> {
        let failures = self.validate(state);

        match (state.page_length(), state.grade_level(), state.primary_competence()) {
            (Some(pages), Some(grade), Some(primary)) if failures.is_empty() => {
                Ok(GenerationRequest::snapshot(state, pages, grade, primary))
            }
            _ => Err(failures),
        }
    }
}

/// Build with the default rules
///
/// # Errors
/// Every failing rule, in rule order.
pub fn build(state: &ConfigurationState) -> Result<GenerationRequest, Vec<ValidationFailure>> {
    RequestBuilder::new().build(state)
}

//! Generation request
//!
//! Immutable snapshot of a complete configuration. Only
//! [`RequestBuilder`](crate::RequestBuilder) can construct one, so every
//! instance has passed the completeness rules.

use cuento_catalog::{ContextMode, PageMode};
use cuento_state::{ConfigurationState, SkillFlags};
use serde::Serialize;

/// Finalized request handed to a [`StoryGenerator`](crate::StoryGenerator)
///
/// Owns deep copies of every value; later edits to the source state never
/// reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    context_mode: ContextMode,
    page_mode: PageMode,
    title: Option<String>,
    context: Option<String>,
    page_length: String,
    grade_level: String,
    characters: Option<String>,
    skills: SkillFlags,
    primary_competence: String,
    secondary_competences: Vec<String>,
    transversal_approaches: Vec<String>,
}

impl GenerationRequest {
    /// Snapshot a state whose required fields have already been checked
    pub(crate) fn snapshot(
        state: &ConfigurationState,
        page_length: &str,
        grade_level: &str,
        primary_competence: &str,
    ) -> Self {
        let non_blank = |text: &str| (!text.trim().is_empty()).then(|| text.to_string());

        Self {
            context_mode: state.context_mode(),
            page_mode: state.catalogs().page_mode(),
            title: non_blank(state.title()),
            context: state.context().map(str::to_string),
            page_length: page_length.to_string(),
            grade_level: grade_level.to_string(),
            characters: non_blank(state.characters()),
            skills: *state.skills(),
            primary_competence: primary_competence.to_string(),
            secondary_competences: state.secondary_competences().map(str::to_string).collect(),
            transversal_approaches: state.transversal_approaches().map(str::to_string).collect(),
        }
    }

    /// Context mode the request was built under
    #[inline]
    #[must_use]
    pub fn context_mode(&self) -> ContextMode {
        self.context_mode
    }

    /// Page mode the request was built under
    #[inline]
    #[must_use]
    pub fn page_mode(&self) -> PageMode {
        self.page_mode
    }

    /// Title, if one was given
    #[inline]
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Genre or educational context
    ///
    /// Always present under the default completeness rules.
    #[inline]
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Page length bucket
    #[inline]
    #[must_use]
    pub fn page_length(&self) -> &str {
        &self.page_length
    }

    /// Grade level
    #[inline]
    #[must_use]
    pub fn grade_level(&self) -> &str {
        &self.grade_level
    }

    /// Character descriptions, if any
    #[inline]
    #[must_use]
    pub fn characters(&self) -> Option<&str> {
        self.characters.as_deref()
    }

    /// Targeted skills
    #[inline]
    #[must_use]
    pub fn skills(&self) -> &SkillFlags {
        &self.skills
    }

    /// Primary competence
    #[inline]
    #[must_use]
    pub fn primary_competence(&self) -> &str {
        &self.primary_competence
    }

    /// Secondary competences in selection order
    #[inline]
    #[must_use]
    pub fn secondary_competences(&self) -> &[String] {
        &self.secondary_competences
    }

    /// Transversal approaches in selection order
    #[inline]
    #[must_use]
    pub fn transversal_approaches(&self) -> &[String] {
        &self.transversal_approaches
    }

    /// Serialize to pretty JSON for the generation backend
    ///
    /// # Errors
    /// Returns error if serialization fails (rare for JSON)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

//! Field events
//!
//! Raw user input, one variant per mutator. A UI (or a file of recorded
//! input) feeds the state through [`ConfigurationState::apply`].

use serde::{Deserialize, Serialize};

use crate::error::StateError;
use crate::state::ConfigurationState;

/// A single user input against the configuration form
///
/// Serialized with an `event` tag:
///
/// ```
/// # use cuento_state::FieldEvent;
/// let event: FieldEvent = serde_json::from_str(
///     r#"{"event": "toggle_transversal_approach", "value": "Enfoque Ambiental", "included": true}"#,
/// ).unwrap();
/// assert!(matches!(event, FieldEvent::ToggleTransversalApproach { included: true, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FieldEvent {
    /// Title text changed
    SetTitle {
        /// New text
        text: String,
    },
    /// Character descriptions changed
    SetCharacters {
        /// New text
        text: String,
    },
    /// Genre or educational context selected
    SetContext {
        /// Selected value
        value: String,
    },
    /// Page length selected
    SetPageLength {
        /// Selected value
        value: String,
    },
    /// Grade level selected
    SetGradeLevel {
        /// Selected value
        value: String,
    },
    /// Primary competence selected
    SetPrimaryCompetence {
        /// Selected value
        value: String,
    },
    /// Skill checkbox changed
    SetSkillFlag {
        /// Skill key
        name: String,
        /// Checked state
        enabled: bool,
    },
    /// Secondary competence checkbox changed
    ToggleSecondaryCompetence {
        /// Competence
        value: String,
        /// Checked state
        included: bool,
    },
    /// Transversal approach checkbox changed
    ToggleTransversalApproach {
        /// Approach
        value: String,
        /// Checked state
        included: bool,
    },
}

impl ConfigurationState {
    /// Dispatch an event to its mutator
    ///
    /// # Errors
    /// Whatever the target mutator returns; the state is unchanged on error.
    pub fn apply(&mut self, event: FieldEvent) -> Result<(), StateError> {
        match event {
            FieldEvent::SetTitle { text } => {
                self.set_title(text);
                Ok(())
            }
            FieldEvent::SetCharacters { text } => self.set_characters(text),
            FieldEvent::SetContext { value } => self.set_context(&value),
            FieldEvent::SetPageLength { value } => self.set_page_length(&value),
            FieldEvent::SetGradeLevel { value } => self.set_grade_level(&value),
            FieldEvent::SetPrimaryCompetence { value } => self.set_primary_competence(&value),
            FieldEvent::SetSkillFlag { name, enabled } => self.set_skill_flag(&name, enabled),
            FieldEvent::ToggleSecondaryCompetence { value, included } => {
                self.toggle_secondary_competence(&value, included)
            }
            FieldEvent::ToggleTransversalApproach { value, included } => {
                self.toggle_transversal_approach(&value, included)
            }
        }
    }
}

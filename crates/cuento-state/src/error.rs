//! Mutator errors
//!
//! Every error here rejects a single mutation; the state is left exactly as
//! it was before the call.

use cuento_catalog::{ContextMode, FieldKind};

/// Errors returned by [`ConfigurationState`](crate::ConfigurationState) mutators
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Value is not a member of the field's catalog
    #[error("'{value}' is not a valid {field} value")]
    InvalidEnumValue {
        /// Field that rejected the value
        field: FieldKind,
        /// Rejected value
        value: String,
    },

    /// Skill name is not one of the five fixed skills
    #[error("unknown skill: {name}")]
    UnknownSkill {
        /// Rejected name
        name: String,
    },

    /// Attempted to mark the primary competence as secondary
    #[error("'{value}' is the primary competence and cannot also be secondary")]
    ConflictsWithPrimary {
        /// The competence
        value: String,
    },

    /// Field does not exist in the session's variant
    #[error("field '{field}' is not available in {mode} mode")]
    FieldUnavailable {
        /// Field name
        field: &'static str,
        /// Active context mode
        mode: ContextMode,
    },
}

impl StateError {
    /// Whether the error points at a caller bug rather than a user choice
    ///
    /// A UI that renders its options from the active catalogs can never
    /// produce these.
    #[inline]
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        matches!(
            self,
            Self::InvalidEnumValue { .. } | Self::UnknownSkill { .. } | Self::FieldUnavailable { .. }
        )
    }
}

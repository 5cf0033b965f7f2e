//! Validation failures
//!
//! Expected, user-recoverable outcomes of [`build`](crate::build). They are
//! returned as data, one per failing rule, in rule order.

use cuento_catalog::FieldKind;
use serde::Serialize;

/// One failed completeness rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    /// No grade level selected
    #[error("grade level is required")]
    MissingGradeLevel,

    /// No page length selected
    #[error("page length is required")]
    MissingPageLength,

    /// No genre or educational context selected
    #[error("context is required")]
    MissingContext,

    /// No primary competence selected
    #[error("primary competence is required")]
    MissingPrimaryCompetence,

    /// Neither a title nor a context to generate from
    #[error("a title or a context is required")]
    MissingTitleOrContext,
}

impl ValidationFailure {
    /// Catalog field the failure points at, if a single one
    #[must_use]
    pub const fn field(self) -> Option<FieldKind> {
        match self {
            Self::MissingGradeLevel => Some(FieldKind::GradeLevel),
            Self::MissingPageLength => Some(FieldKind::PageLength),
            Self::MissingContext => Some(FieldKind::Context),
            Self::MissingPrimaryCompetence => Some(FieldKind::Competence),
            Self::MissingTitleOrContext => None,
        }
    }
}

/// Render failures as a single `; `-separated line
#[must_use]
pub fn describe(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_joins_in_order() {
        let text = describe(&[ValidationFailure::MissingPageLength, ValidationFailure::MissingContext]);
        assert_eq!(text, "page length is required; context is required");
    }

    #[test]
    fn title_rule_spans_fields() {
        assert_eq!(ValidationFailure::MissingTitleOrContext.field(), None);
        assert_eq!(
            ValidationFailure::MissingPrimaryCompetence.field(),
            Some(FieldKind::Competence)
        );
    }
}

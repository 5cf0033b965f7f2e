//! Field kinds and catalog modes
//!
//! Names the enumerated fields of a story request and the two product
//! variants a session can run under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// An enumerated (catalog-backed) field of a story request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Genre or educational context, depending on [`ContextMode`]
    Context,
    /// Target length bucket
    PageLength,
    /// School grade
    GradeLevel,
    /// Curricular competence (primary and secondary share one catalog)
    Competence,
    /// Cross-curricular educational approach
    TransversalApproach,
}

impl FieldKind {
    /// All kinds, in form order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Context,
        FieldKind::PageLength,
        FieldKind::GradeLevel,
        FieldKind::Competence,
        FieldKind::TransversalApproach,
    ];

    /// Stable identifier used in errors and serialized output
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::PageLength => "page_length",
            Self::GradeLevel => "grade_level",
            Self::Competence => "competence",
            Self::TransversalApproach => "transversal_approach",
        }
    }

    /// Form label for this field
    ///
    /// The context label depends on the active mode, see [`ContextMode::label`].
    #[must_use]
    pub const fn label(self, mode: ContextMode) -> &'static str {
        match self {
            Self::Context => mode.label(),
            Self::PageLength => "Número de Páginas",
            Self::GradeLevel => "Grado Escolar",
            Self::Competence => "Competencia Principal",
            Self::TransversalApproach => "Enfoques Transversales",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which catalog backs the context field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMode {
    /// Literary genres; the character-driven variant
    #[default]
    Genre,
    /// Educational themes
    EducationalContext,
}

impl ContextMode {
    /// Form label of the context field
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Genre => "Género",
            Self::EducationalContext => "Contexto Educativo",
        }
    }

    /// Whether the variant carries character descriptions and secondary
    /// competences
    #[inline]
    #[must_use]
    pub const fn supports_characters(self) -> bool {
        matches!(self, Self::Genre)
    }

    /// Stable identifier
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::EducationalContext => "educational_context",
        }
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genre" => Ok(Self::Genre),
            "educational" | "educational_context" | "educational-context" => {
                Ok(Self::EducationalContext)
            }
            other => Err(CatalogError::UnknownContextMode(other.to_string())),
        }
    }
}

/// Which catalog backs the page length field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    /// Buckets of explicit page counts ("6-10 páginas")
    #[default]
    PageCount,
    /// A single page, bucketed by extent
    SinglePage,
}

impl PageMode {
    /// Stable identifier
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PageCount => "page_count",
            Self::SinglePage => "single_page",
        }
    }
}

impl fmt::Display for PageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page_count" | "page-count" => Ok(Self::PageCount),
            "single_page" | "single-page" => Ok(Self::SinglePage),
            other => Err(CatalogError::UnknownPageMode(other.to_string())),
        }
    }
}

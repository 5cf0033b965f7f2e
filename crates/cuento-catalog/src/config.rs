//! Catalog set configuration
//!
//! Deployments may replace the built-in catalogs with their own lists,
//! supplied as JSON or YAML in the shape of [`CatalogSetConfig`]. Loaded sets
//! go through the same checks as [`Catalog::new`].

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogSet};
use crate::error::CatalogError;
use crate::kind::{ContextMode, FieldKind, PageMode};

/// Serialized form of a catalog set
///
/// ```
/// # use cuento_catalog::CatalogSet;
/// let yaml = r"
/// context_mode: genre
/// page_mode: page_count
/// context: [Aventura, Fábula]
/// page_length: [1-5 páginas]
/// grade_level: [Primaria 1° (6 años)]
/// competence: [Construye su identidad]
/// transversal_approach: [Enfoque Ambiental]
/// ";
/// let set = CatalogSet::from_yaml(yaml).unwrap();
/// assert!(set.contains(cuento_catalog::FieldKind::Context, "Fábula"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSetConfig {
    /// Context catalog variant
    #[serde(default)]
    pub context_mode: ContextMode,
    /// Page length catalog variant
    #[serde(default)]
    pub page_mode: PageMode,
    /// Genre or educational context values
    pub context: Vec<String>,
    /// Page length buckets
    pub page_length: Vec<String>,
    /// Grade levels
    pub grade_level: Vec<String>,
    /// Competences
    pub competence: Vec<String>,
    /// Transversal approaches
    pub transversal_approach: Vec<String>,
}

impl TryFrom<CatalogSetConfig> for CatalogSet {
    type Error = CatalogError;

    fn try_from(config: CatalogSetConfig) -> Result<Self, Self::Error> {
        Ok(CatalogSet::new(
            config.context_mode,
            config.page_mode,
            Catalog::new(FieldKind::Context, config.context)?,
            Catalog::new(FieldKind::PageLength, config.page_length)?,
            Catalog::new(FieldKind::GradeLevel, config.grade_level)?,
            Catalog::new(FieldKind::Competence, config.competence)?,
            Catalog::new(FieldKind::TransversalApproach, config.transversal_approach)?,
        ))
    }
}

impl From<&CatalogSet> for CatalogSetConfig {
    fn from(set: &CatalogSet) -> Self {
        let owned = |kind: FieldKind| -> Vec<String> { set.values(kind).map(str::to_string).collect() };
        Self {
            context_mode: set.context_mode(),
            page_mode: set.page_mode(),
            context: owned(FieldKind::Context),
            page_length: owned(FieldKind::PageLength),
            grade_level: owned(FieldKind::GradeLevel),
            competence: owned(FieldKind::Competence),
            transversal_approach: owned(FieldKind::TransversalApproach),
        }
    }
}

impl CatalogSet {
    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or a catalog fails validation
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogSetConfig = serde_json::from_str(json)?;
        config.try_into()
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or a catalog fails validation
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let config: CatalogSetConfig = serde_yaml::from_str(yaml)?;
        config.try_into()
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    /// Returns error if serialization fails (rare for JSON)
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&CatalogSetConfig::from(self))?)
    }
}

//! Catalogs and catalog sets
//!
//! A [`Catalog`] is the ordered list of legal values for one field, backed by
//! an insertion-ordered set so membership is O(1). A [`CatalogSet`] bundles
//! one catalog per [`FieldKind`] for a given context mode and page mode.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::builtin;
use crate::error::CatalogError;
use crate::kind::{ContextMode, FieldKind, PageMode};

/// Ordered, immutable list of permitted values for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    kind: FieldKind,
    values: IndexSet<String>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, blank values and duplicates
    ///
    /// # Errors
    /// Returns [`CatalogError`] if any of the above occurs.
    pub fn new<I, S>(kind: FieldKind, values: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for value in values {
            let value = value.into();
            if value.trim().is_empty() {
                return Err(CatalogError::BlankValue { field: kind });
            }
            if set.contains(&value) {
                return Err(CatalogError::DuplicateValue { field: kind, value });
            }
            set.insert(value);
        }

        if set.is_empty() {
            return Err(CatalogError::Empty { field: kind });
        }

        Ok(Self { kind, values: set })
    }

    /// Build from literal values known to be distinct
    pub(crate) fn from_static(kind: FieldKind, values: &[&'static str]) -> Self {
        let values: IndexSet<String> = values.iter().map(|v| (*v).to_string()).collect();
        debug_assert!(!values.is_empty(), "built-in catalog '{kind}' is empty");
        Self { kind, values }
    }

    /// Field this catalog belongs to
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Values in display order
    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.values.iter().map(String::as_str)
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Display position of a value
    #[inline]
    #[must_use]
    pub fn position(&self, value: &str) -> Option<usize> {
        self.values.get_index_of(value)
    }

    /// Number of values
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed catalog
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One catalog per enumerated field, for a fixed context mode and page mode
///
/// Sessions hold an `Arc<CatalogSet>`; a set is never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSet {
    context_mode: ContextMode,
    page_mode: PageMode,
    context: Catalog,
    page_length: Catalog,
    grade_level: Catalog,
    competence: Catalog,
    transversal_approach: Catalog,
}

impl CatalogSet {
    /// Assemble a set from individual catalogs
    ///
    /// # Panics
    /// Panics if a catalog is passed for the wrong field; this is a
    /// programming error, not an input error.
    #[must_use]
    pub fn new(
        context_mode: ContextMode,
        page_mode: PageMode,
        context: Catalog,
        page_length: Catalog,
        grade_level: Catalog,
        competence: Catalog,
        transversal_approach: Catalog,
    ) -> Self {
        assert_eq!(context.kind(), FieldKind::Context);
        assert_eq!(page_length.kind(), FieldKind::PageLength);
        assert_eq!(grade_level.kind(), FieldKind::GradeLevel);
        assert_eq!(competence.kind(), FieldKind::Competence);
        assert_eq!(transversal_approach.kind(), FieldKind::TransversalApproach);

        Self {
            context_mode,
            page_mode,
            context,
            page_length,
            grade_level,
            competence,
            transversal_approach,
        }
    }

    /// Shared built-in set for the given modes
    ///
    /// Each of the four combinations is built once per process.
    #[must_use]
    pub fn builtin(context_mode: ContextMode, page_mode: PageMode) -> Arc<Self> {
        builtin::shared(context_mode, page_mode)
    }

    /// Active context mode
    #[inline]
    #[must_use]
    pub fn context_mode(&self) -> ContextMode {
        self.context_mode
    }

    /// Active page mode
    #[inline]
    #[must_use]
    pub fn page_mode(&self) -> PageMode {
        self.page_mode
    }

    /// Catalog backing a field
    #[must_use]
    pub fn catalog(&self, kind: FieldKind) -> &Catalog {
        match kind {
            FieldKind::Context => &self.context,
            FieldKind::PageLength => &self.page_length,
            FieldKind::GradeLevel => &self.grade_level,
            FieldKind::Competence => &self.competence,
            FieldKind::TransversalApproach => &self.transversal_approach,
        }
    }

    /// Values of a field in display order
    pub fn values(&self, kind: FieldKind) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.catalog(kind).values()
    }

    /// Membership test for a field
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: FieldKind, value: &str) -> bool {
        self.catalog(kind).contains(value)
    }

    /// Whether sessions on this set carry characters and secondary competences
    #[inline]
    #[must_use]
    pub fn supports_characters(&self) -> bool {
        self.context_mode.supports_characters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_preserves_order() {
        let catalog = Catalog::new(FieldKind::Context, ["b", "a", "c"]).unwrap();
        let values: Vec<_> = catalog.values().collect();
        assert_eq!(values, vec!["b", "a", "c"]);
        assert_eq!(catalog.position("a"), Some(1));
    }

    #[test]
    fn catalog_rejects_duplicates() {
        let result = Catalog::new(FieldKind::Competence, ["x", "y", "x"]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateValue { field: FieldKind::Competence, ref value }) if value == "x"
        ));
    }

    #[test]
    fn catalog_rejects_empty_and_blank() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Catalog::new(FieldKind::GradeLevel, empty),
            Err(CatalogError::Empty { .. })
        ));
        assert!(matches!(
            Catalog::new(FieldKind::GradeLevel, ["ok", "  "]),
            Err(CatalogError::BlankValue { .. })
        ));
    }

    #[test]
    fn membership_is_exact() {
        let catalog = Catalog::new(FieldKind::Context, ["Aventura"]).unwrap();
        assert!(catalog.contains("Aventura"));
        assert!(!catalog.contains("aventura"));
        assert!(!catalog.contains("Aventura "));
    }

    #[test]
    fn builtin_sets_are_shared() {
        let a = CatalogSet::builtin(ContextMode::Genre, PageMode::PageCount);
        let b = CatalogSet::builtin(ContextMode::Genre, PageMode::PageCount);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    #[should_panic]
    fn new_rejects_misplaced_catalog() {
        let wrong = Catalog::new(FieldKind::GradeLevel, ["a"]).unwrap();
        let builtin = CatalogSet::builtin(ContextMode::Genre, PageMode::PageCount);
        let _ = CatalogSet::new(
            ContextMode::Genre,
            PageMode::PageCount,
            wrong,
            builtin.catalog(FieldKind::PageLength).clone(),
            builtin.catalog(FieldKind::GradeLevel).clone(),
            builtin.catalog(FieldKind::Competence).clone(),
            builtin.catalog(FieldKind::TransversalApproach).clone(),
        );
    }
}

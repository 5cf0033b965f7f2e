//! Configuration state
//!
//! The in-progress story request. All fields are private; every change goes
//! through a named mutator that validates against the session's
//! [`CatalogSet`] before touching anything. Invariants held at all times:
//!
//! - every enum-valued field is a member of its catalog
//! - secondary competences never contain the primary competence
//! - multi-select fields hold no duplicates
//! - skill flags cover exactly the five fixed skills

use std::sync::Arc;

use cuento_catalog::{CatalogSet, ContextMode, FieldKind};
use indexmap::IndexSet;

use crate::error::StateError;
use crate::skills::{Skill, SkillFlags};

/// Mutable in-progress story request, owned by one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationState {
    catalogs: Arc<CatalogSet>,
    title: String,
    context: Option<String>,
    page_length: Option<String>,
    grade_level: Option<String>,
    characters: String,
    skills: SkillFlags,
    primary_competence: Option<String>,
    secondary_competences: IndexSet<String>,
    transversal_approaches: IndexSet<String>,
}

impl ConfigurationState {
    /// Empty state validated against `catalogs`
    #[must_use]
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self {
            catalogs,
            title: String::new(),
            context: None,
            page_length: None,
            grade_level: None,
            characters: String::new(),
            skills: SkillFlags::new(),
            primary_competence: None,
            secondary_competences: IndexSet::new(),
            transversal_approaches: IndexSet::new(),
        }
    }

    /// Restore every field to its default, keeping the catalog set
    pub fn reset(&mut self) {
        *self = Self::new(Arc::clone(&self.catalogs));
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Active catalog set
    #[inline]
    #[must_use]
    pub fn catalogs(&self) -> &Arc<CatalogSet> {
        &self.catalogs
    }

    /// Active context mode
    #[inline]
    #[must_use]
    pub fn context_mode(&self) -> ContextMode {
        self.catalogs.context_mode()
    }

    /// Title or summary, possibly empty
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Genre or educational context
    #[inline]
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Page length bucket
    #[inline]
    #[must_use]
    pub fn page_length(&self) -> Option<&str> {
        self.page_length.as_deref()
    }

    /// Grade level
    #[inline]
    #[must_use]
    pub fn grade_level(&self) -> Option<&str> {
        self.grade_level.as_deref()
    }

    /// Character descriptions, possibly empty
    #[inline]
    #[must_use]
    pub fn characters(&self) -> &str {
        &self.characters
    }

    /// Skill flags
    #[inline]
    #[must_use]
    pub fn skills(&self) -> &SkillFlags {
        &self.skills
    }

    /// Primary competence
    #[inline]
    #[must_use]
    pub fn primary_competence(&self) -> Option<&str> {
        self.primary_competence.as_deref()
    }

    /// Secondary competences in selection order
    pub fn secondary_competences(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.secondary_competences.iter().map(String::as_str)
    }

    /// Transversal approaches in selection order
    pub fn transversal_approaches(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.transversal_approaches.iter().map(String::as_str)
    }

    /// Whether `value` is currently selected as a secondary competence
    #[inline]
    #[must_use]
    pub fn has_secondary_competence(&self, value: &str) -> bool {
        self.secondary_competences.contains(value)
    }

    /// Whether `value` is currently selected as a transversal approach
    #[inline]
    #[must_use]
    pub fn has_transversal_approach(&self, value: &str) -> bool {
        self.transversal_approaches.contains(value)
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Replace the title; any text is accepted
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    /// Replace the character descriptions; any text is accepted
    ///
    /// # Errors
    /// [`StateError::FieldUnavailable`] outside the character-driven variant.
    pub fn set_characters(&mut self, text: impl Into<String>) -> Result<(), StateError> {
        self.require_characters("characters")?;
        self.characters = text.into();
        Ok(())
    }

    /// Select the genre or educational context
    ///
    /// # Errors
    /// [`StateError::InvalidEnumValue`] if `value` is not in the context catalog.
    pub fn set_context(&mut self, value: &str) -> Result<(), StateError> {
        self.context = Some(self.checked(FieldKind::Context, value)?);
        Ok(())
    }

    /// Select the page length bucket
    ///
    /// # Errors
    /// [`StateError::InvalidEnumValue`] if `value` is not in the page length catalog.
    pub fn set_page_length(&mut self, value: &str) -> Result<(), StateError> {
        self.page_length = Some(self.checked(FieldKind::PageLength, value)?);
        Ok(())
    }

    /// Select the grade level
    ///
    /// # Errors
    /// [`StateError::InvalidEnumValue`] if `value` is not in the grade catalog.
    pub fn set_grade_level(&mut self, value: &str) -> Result<(), StateError> {
        self.grade_level = Some(self.checked(FieldKind::GradeLevel, value)?);
        Ok(())
    }

    /// Select the primary competence
    ///
    /// A competence promoted to primary is dropped from the secondary set.
    ///
    /// # Errors
    /// [`StateError::InvalidEnumValue`] if `value` is not in the competence catalog.
    pub fn set_primary_competence(&mut self, value: &str) -> Result<(), StateError> {
        let value = self.checked(FieldKind::Competence, value)?;
        self.secondary_competences.shift_remove(&value);
        self.primary_competence = Some(value);
        Ok(())
    }

    /// Set a skill flag by name
    ///
    /// # Errors
    /// [`StateError::UnknownSkill`] unless `name` is one of the five skill keys.
    pub fn set_skill_flag(&mut self, name: &str, enabled: bool) -> Result<(), StateError> {
        let skill: Skill = name.parse()?;
        self.set_skill(skill, enabled);
        Ok(())
    }

    /// Set a skill flag
    #[inline]
    pub fn set_skill(&mut self, skill: Skill, enabled: bool) {
        self.skills.set(skill, enabled);
    }

    /// Include or exclude a secondary competence
    ///
    /// Adding a present value or removing an absent one is a no-op.
    ///
    /// # Errors
    /// - [`StateError::FieldUnavailable`] outside the character-driven variant
    /// - [`StateError::InvalidEnumValue`] if `value` is not in the competence catalog
    /// - [`StateError::ConflictsWithPrimary`] when including the primary competence
    pub fn toggle_secondary_competence(&mut self, value: &str, included: bool) -> Result<(), StateError> {
        self.require_characters("secondary_competences")?;
        let value = self.checked(FieldKind::Competence, value)?;

        if included {
            if self.primary_competence.as_deref() == Some(value.as_str()) {
                return Err(StateError::ConflictsWithPrimary { value });
            }
            self.secondary_competences.insert(value);
        } else {
            self.secondary_competences.shift_remove(&value);
        }
        Ok(())
    }

    /// Include or exclude a transversal approach
    ///
    /// Adding a present value or removing an absent one is a no-op.
    ///
    /// # Errors
    /// [`StateError::InvalidEnumValue`] if `value` is not in the approach catalog.
    pub fn toggle_transversal_approach(&mut self, value: &str, included: bool) -> Result<(), StateError> {
        let value = self.checked(FieldKind::TransversalApproach, value)?;
        if included {
            self.transversal_approaches.insert(value);
        } else {
            self.transversal_approaches.shift_remove(&value);
        }
        Ok(())
    }

    fn checked(&self, field: FieldKind, value: &str) -> Result<String, StateError> {
        if self.catalogs.contains(field, value) {
            Ok(value.to_string())
        } else {
            Err(StateError::InvalidEnumValue {
                field,
                value: value.to_string(),
            })
        }
    }

    fn require_characters(&self, field: &'static str) -> Result<(), StateError> {
        if self.catalogs.supports_characters() {
            Ok(())
        } else {
            Err(StateError::FieldUnavailable {
                field,
                mode: self.context_mode(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuento_catalog::PageMode;
    use pretty_assertions::assert_eq;

    const READS: &str = "Lee diversos tipos de textos escritos en su lengua materna";
    const WRITES: &str = "Escribe diversos tipos de textos en su lengua materna";
    const SPEAKS: &str = "Se comunica oralmente en su lengua materna";

    fn genre_state() -> ConfigurationState {
        ConfigurationState::new(CatalogSet::builtin(ContextMode::Genre, PageMode::PageCount))
    }

    fn educational_state() -> ConfigurationState {
        ConfigurationState::new(CatalogSet::builtin(
            ContextMode::EducationalContext,
            PageMode::SinglePage,
        ))
    }

    #[test]
    fn new_state_is_empty() {
        let state = genre_state();
        assert_eq!(state.title(), "");
        assert_eq!(state.context(), None);
        assert_eq!(state.page_length(), None);
        assert_eq!(state.grade_level(), None);
        assert_eq!(state.primary_competence(), None);
        assert_eq!(state.secondary_competences().len(), 0);
        assert_eq!(state.transversal_approaches().len(), 0);
        assert!(!state.skills().any());
    }

    #[test]
    fn single_select_overwrites() {
        let mut state = genre_state();
        state.set_context("Aventura").unwrap();
        state.set_context("Misterio").unwrap();
        assert_eq!(state.context(), Some("Misterio"));
    }

    #[test]
    fn invalid_value_keeps_prior() {
        let mut state = genre_state();
        state.set_grade_level("Primaria 3° (8 años)").unwrap();

        let err = state.set_grade_level("Universidad").unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidEnumValue {
                field: FieldKind::GradeLevel,
                value: "Universidad".into()
            }
        );
        assert_eq!(state.grade_level(), Some("Primaria 3° (8 años)"));
    }

    #[test]
    fn context_catalog_follows_mode() {
        let mut state = educational_state();
        assert!(state.set_context("Aventura").is_err());
        state.set_context("Salud y Bienestar").unwrap();
        assert!(state.set_page_length("6-10 páginas").is_err());
        state.set_page_length("Página corta (~100 palabras)").unwrap();
    }

    #[test]
    fn promoting_secondary_to_primary_removes_it() {
        let mut state = genre_state();
        state.toggle_secondary_competence(WRITES, true).unwrap();
        state.toggle_secondary_competence(READS, true).unwrap();
        state.toggle_secondary_competence(SPEAKS, true).unwrap();

        state.set_primary_competence(READS).unwrap();

        assert_eq!(state.primary_competence(), Some(READS));
        assert_eq!(state.secondary_competences().collect::<Vec<_>>(), vec![WRITES, SPEAKS]);
    }

    #[test]
    fn primary_cannot_be_secondary() {
        let mut state = genre_state();
        state.set_primary_competence(READS).unwrap();
        let before = state.clone();

        let err = state.toggle_secondary_competence(READS, true).unwrap_err();
        assert_eq!(err, StateError::ConflictsWithPrimary { value: READS.into() });
        assert_eq!(state, before);

        // removing is not a conflict
        state.toggle_secondary_competence(READS, false).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn invalid_secondary_reported_before_conflict() {
        let mut state = genre_state();
        state.set_primary_competence(READS).unwrap();
        assert!(matches!(
            state.toggle_secondary_competence("Baila", true),
            Err(StateError::InvalidEnumValue { field: FieldKind::Competence, .. })
        ));
    }

    #[test]
    fn toggles_are_idempotent_and_ordered() {
        let mut state = genre_state();
        state.toggle_transversal_approach("Enfoque Ambiental", true).unwrap();
        state.toggle_transversal_approach("Enfoque de Derechos", true).unwrap();
        state.toggle_transversal_approach("Enfoque Ambiental", true).unwrap();
        assert_eq!(
            state.transversal_approaches().collect::<Vec<_>>(),
            vec!["Enfoque Ambiental", "Enfoque de Derechos"]
        );

        state.toggle_transversal_approach("Enfoque Intercultural", false).unwrap();
        state.toggle_transversal_approach("Enfoque Ambiental", false).unwrap();
        assert_eq!(state.transversal_approaches().collect::<Vec<_>>(), vec!["Enfoque de Derechos"]);
    }

    #[test]
    fn skill_flags_by_name() {
        let mut state = genre_state();
        state.set_skill_flag("inferentialComprehension", true).unwrap();
        assert!(state.skills().get(Skill::InferentialComprehension));

        let before = state.clone();
        assert_eq!(
            state.set_skill_flag("spelling", true),
            Err(StateError::UnknownSkill { name: "spelling".into() })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn educational_mode_rejects_character_fields() {
        let mut state = educational_state();
        assert!(matches!(
            state.set_characters("Un conejo valiente"),
            Err(StateError::FieldUnavailable { field: "characters", .. })
        ));
        assert!(matches!(
            state.toggle_secondary_competence(WRITES, true),
            Err(StateError::FieldUnavailable { field: "secondary_competences", .. })
        ));
        assert_eq!(state.characters(), "");

        // the shared fields still work
        state.toggle_transversal_approach("Enfoque Ambiental", true).unwrap();
        state.set_primary_competence(WRITES).unwrap();
    }

    #[test]
    fn reset_clears_fields_and_keeps_catalogs() {
        let mut state = genre_state();
        state.set_title("El zorro viajero");
        state.set_characters("Un zorro curioso").unwrap();
        state.set_context("Fábula").unwrap();
        state.set_skill(Skill::ReadingStrategies, true);
        let catalogs = Arc::clone(state.catalogs());

        state.reset();

        assert_eq!(state, ConfigurationState::new(Arc::clone(&catalogs)));
        assert!(Arc::ptr_eq(state.catalogs(), &catalogs));
    }
}

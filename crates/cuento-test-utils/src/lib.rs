//! Testing utilities for Cuento workspace
//!
//! Shared fixtures, sample values and a recording generator.

#![allow(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use cuento_catalog::{CatalogSet, ContextMode, PageMode};
use cuento_request::{GenerationError, GenerationRequest, StoryGenerator, SubmissionReceipt};
use cuento_state::{ConfigurationState, Skill};
use parking_lot::Mutex;

pub const SCENARIO_GRADE: &str = "Primaria 3° (8 años)";
pub const SCENARIO_PAGES: &str = "6-10 páginas";
pub const SCENARIO_GENRE: &str = "Aventura";
pub const SCENARIO_PRIMARY: &str = "Lee diversos tipos de textos escritos en su lengua materna";
pub const SCENARIO_TITLE: &str = "El zorro viajero";

pub const WRITES: &str = "Escribe diversos tipos de textos en su lengua materna";
pub const IDENTITY: &str = "Construye su identidad";

pub fn genre_catalogs() -> Arc<CatalogSet> {
    CatalogSet::builtin(ContextMode::Genre, PageMode::PageCount)
}

pub fn educational_catalogs() -> Arc<CatalogSet> {
    CatalogSet::builtin(ContextMode::EducationalContext, PageMode::SinglePage)
}

pub fn empty_state() -> ConfigurationState {
    ConfigurationState::new(genre_catalogs())
}

/// The "El zorro viajero" state: four required fields plus a title
pub fn scenario_state() -> ConfigurationState {
    let mut state = empty_state();
    state.set_grade_level(SCENARIO_GRADE).unwrap();
    state.set_page_length(SCENARIO_PAGES).unwrap();
    state.set_context(SCENARIO_GENRE).unwrap();
    state.set_primary_competence(SCENARIO_PRIMARY).unwrap();
    state.set_title(SCENARIO_TITLE);
    state
}

/// Every field set, optional ones included
pub fn fully_populated_state() -> ConfigurationState {
    let mut state = scenario_state();
    state
        .set_characters("Un zorro curioso, una lechuza sabia")
        .unwrap();
    state.set_skill(Skill::LiteralComprehension, true);
    state.set_skill(Skill::ThematicVocabulary, true);
    state.toggle_secondary_competence(WRITES, true).unwrap();
    state.toggle_secondary_competence(IDENTITY, true).unwrap();
    state
        .toggle_transversal_approach("Enfoque Ambiental", true)
        .unwrap();
    state
        .toggle_transversal_approach("Enfoque Intercultural", true)
        .unwrap();
    state
}

/// Generator that records requests, optionally failing every submission
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    requests: Mutex<Vec<GenerationRequest>>,
    fail_with: Option<String>,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl StoryGenerator for RecordingGenerator {
    async fn submit(&self, request: GenerationRequest) -> Result<SubmissionReceipt, GenerationError> {
        self.requests.lock().push(request);
        match &self.fail_with {
            Some(reason) => Err(GenerationError::Unavailable(reason.clone())),
            None => Ok(SubmissionReceipt::new()),
        }
    }
}

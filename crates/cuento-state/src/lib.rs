//! Cuento Configuration State
//!
//! The mutable, in-memory story request that a form session edits.
//!
//! # Overview
//!
//! - **ConfigurationState**: private fields behind validating mutators
//! - **SkillFlags**: the five fixed reading skills
//! - **FieldEvent**: raw user input, applied through the mutators
//! - **StateError**: rejected mutations
//!
//! Mutators are synchronous and perform no I/O or logging. A rejected
//! mutation leaves the state untouched.
//!
//! # Example
//!
//! ```rust
//! use cuento_catalog::{CatalogSet, ContextMode, PageMode};
//! use cuento_state::{ConfigurationState, StateError};
//!
//! let catalogs = CatalogSet::builtin(ContextMode::Genre, PageMode::PageCount);
//! let mut state = ConfigurationState::new(catalogs);
//!
//! state.set_context("Fábula").unwrap();
//! assert!(matches!(
//!     state.set_context("Poesía"),
//!     Err(StateError::InvalidEnumValue { .. })
//! ));
//! assert_eq!(state.context(), Some("Fábula"));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod skills;
pub mod state;

// Re-exports
pub use error::StateError;
pub use event::FieldEvent;
pub use skills::{Skill, SkillFlags};
pub use state::ConfigurationState;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for editing a configuration
    pub use crate::{ConfigurationState, FieldEvent, Skill, SkillFlags, StateError};
    pub use cuento_catalog::{CatalogSet, ContextMode, FieldKind, PageMode};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

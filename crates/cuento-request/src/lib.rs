//! Cuento Requests
//!
//! Turns a [`ConfigurationState`](cuento_state::ConfigurationState) into an
//! immutable [`GenerationRequest`] and hands it to an external
//! [`StoryGenerator`].
//!
//! # Overview
//!
//! - **RequestBuilder**: completeness rules, all failures collected in order
//! - **GenerationRequest**: deep, immutable snapshot of a complete state
//! - **StoryGenerator**: async seam to the generation backend
//! - **Session**: state + builder + generator for one user
//!
//! # Example
//!
//! ```rust
//! use cuento_catalog::{CatalogSet, ContextMode, PageMode};
//! use cuento_request::{build, ValidationFailure};
//! use cuento_state::ConfigurationState;
//!
//! let mut state = ConfigurationState::new(CatalogSet::builtin(ContextMode::Genre, PageMode::PageCount));
//! state.set_grade_level("Primaria 3° (8 años)").unwrap();
//! state.set_page_length("6-10 páginas").unwrap();
//!
//! let failures = build(&state).unwrap_err();
//! assert_eq!(
//!     failures,
//!     vec![ValidationFailure::MissingContext, ValidationFailure::MissingPrimaryCompetence]
//! );
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod failure;
pub mod generator;
pub mod request;
pub mod session;

// Re-exports
pub use builder::{build, CompletenessRules, RequestBuilder};
pub use failure::{describe, ValidationFailure};
pub use generator::{DryRunGenerator, GenerationError, StoryGenerator, SubmissionReceipt};
pub use request::GenerationRequest;
pub use session::{Session, SubmitError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and submitting requests
    pub use crate::{
        build, CompletenessRules, DryRunGenerator, GenerationRequest, RequestBuilder, Session,
        StoryGenerator, SubmitError, ValidationFailure,
    };
    pub use cuento_state::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Synthetic Learner
//!
//! A deterministic compiler from a structured learner profile to the system
//! prompt that makes a language model role-play that learner, plus the
//! archetype catalog, a profile store, message shaping for chat and
//! tutor/learner simulation, and an HTTP server around all of it.
//!
//! ```
//! use synthetic_learner::persona::{compile_persona_prompt, find_archetype};
//!
//! let profile = find_archetype("silent-struggler").unwrap().seed_profile();
//! let response = compile_persona_prompt(&profile);
//! assert!(response.system_prompt.contains("SHUTDOWN VALVE:"));
//! ```

pub mod conversation;
pub mod persona;
pub mod server;
pub mod store;
pub mod types;

pub use persona::{compile_persona_prompt, Archetype, PersonaError};
pub use store::ProfileStore;
pub use types::{LearnerProfile, PersonaRequest, PersonaResponse, PromptSections};

/// Crate version, reported by `/health`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

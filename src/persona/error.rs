//! Persona engine errors.
//!
//! The compiler itself never fails. These cover the boundaries around it:
//! parsing profiles, resolving archetype ids, reading files.

use thiserror::Error;

/// Errors raised while building or loading a learner profile.
#[derive(Debug, Error)]
pub enum PersonaError {
    /// Archetype id not present in the catalog.
    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    /// A dimension value outside its closed set.
    #[error("Invalid value '{value}' for dimension {dimension}")]
    InvalidDimension {
        dimension: &'static str,
        value: String,
    },

    /// Request carried no profile.
    #[error("Profile is required")]
    MissingProfile,

    /// A request body that is well-formed but unusable.
    #[error("{0}")]
    InvalidRequest(String),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Read learner profiles from JSON or YAML.

use std::path::Path;

use crate::persona::error::PersonaError;
use crate::types::profile::LearnerProfile;

/// On-disk profile encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Yaml,
}

impl ProfileFormat {
    /// Pick a format from a file extension.  Anything that is not
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Parse a profile from text.
///
/// Enumerated fields outside their closed set are rejected here, so every
/// profile that reaches the compiler is valid.
pub fn parse_profile(text: &str, format: ProfileFormat) -> Result<LearnerProfile, PersonaError> {
    let profile = match format {
        ProfileFormat::Json => serde_json::from_str(text)?,
        ProfileFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(profile)
}

/// Load a profile file, choosing the format by extension.
pub fn load_profile_file(path: impl AsRef<Path>) -> Result<LearnerProfile, PersonaError> {
    let path = path.as_ref();
    let format = ProfileFormat::from_path(path);
    log::debug!("Loading {:?} profile from {}", format, path.display());

    let text = std::fs::read_to_string(path)?;
    let profile = parse_profile(&text, format)?;
    log::info!("Loaded profile {} from {}", profile.id, path.display());
    Ok(profile)
}

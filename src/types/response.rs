//! Compiler output and request envelopes.

use serde::{Deserialize, Serialize};

use super::profile::LearnerProfile;

/// Each sub-compiler's raw (unlabeled) block, for "by section" display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSections {
    pub knowledge_state: String,
    pub cognitive_profile: String,
    pub motivation_affect: String,
    pub communication_style: String,
    /// Empty when no tension rule fired.
    pub trait_resolutions: String,
    pub inner_monologue: String,
    pub escape_valves: String,
}

impl PromptSections {
    /// Wire keys in display order.
    pub const KEYS: [&'static str; 7] = [
        "knowledgeState",
        "cognitiveProfile",
        "motivationAffect",
        "communicationStyle",
        "traitResolutions",
        "innerMonologue",
        "escapeValves",
    ];

    /// Look up a block by its wire key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let block = match key {
            "knowledgeState" => &self.knowledge_state,
            "cognitiveProfile" => &self.cognitive_profile,
            "motivationAffect" => &self.motivation_affect,
            "communicationStyle" => &self.communication_style,
            "traitResolutions" => &self.trait_resolutions,
            "innerMonologue" => &self.inner_monologue,
            "escapeValves" => &self.escape_valves,
            _ => return None,
        };
        Some(block.as_str())
    }
}

/// The fully assembled prompt plus its individual blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaResponse {
    pub system_prompt: String,
    pub prompt_sections: PromptSections,
}

/// Body of `POST /api/persona`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaRequest {
    #[serde(default)]
    pub profile: Option<LearnerProfile>,
}

//! Cognitive section: prior knowledge → working memory → metacognition →
//! learning preferences.

use crate::types::profile::CognitiveProfile;

use super::vocabulary::{Vocabulary, LEARNING_PREFERENCES_HEADING};

pub fn compile_cognitive_profile(cp: &CognitiveProfile) -> String {
    let mut blocks: Vec<String> = vec![
        cp.prior_knowledge_level.prose().to_string(),
        cp.working_memory_load.prose().to_string(),
        cp.metacognitive_awareness.prose().to_string(),
    ];

    // No heading at all for an empty list.
    if !cp.learning_preferences.is_empty() {
        let prefs: Vec<&str> = cp.learning_preferences.iter().map(|p| p.prose()).collect();
        blocks.push(format!("{LEARNING_PREFERENCES_HEADING}\n{}", prefs.join(" ")));
    }

    blocks.join("\n\n")
}

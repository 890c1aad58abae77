//! Caller-owned profile state.
//!
//! [`ProfileStore`] holds the profile being edited and the last prompt
//! compiled from it.  Every edit drops the cached prompt so a stale prompt is
//! never handed out.  The compiler only ever sees a snapshot.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::persona::archetypes::find_archetype;
use crate::persona::compiler::compile_persona_prompt;
use crate::persona::error::PersonaError;
use crate::types::dimensions::{
    EngagementLevel, FrustrationThreshold, GoalOrientation, HelpSeeking, LanguageRegister,
    LearningPreference, MetacognitiveAwareness, PriorKnowledgeLevel, ResponseToBeingWrong,
    SelfEfficacy, Verbosity, WorkingMemoryLoad,
};
use crate::types::profile::LearnerProfile;
use crate::types::response::PersonaResponse;

pub use loader::{load_profile_file, parse_profile, ProfileFormat};

// ============================================================================
// Patches
// ============================================================================

/// Partial knowledge-state update.  `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KnowledgeStatePatch {
    pub domain: Option<String>,
    pub topic: Option<String>,
    pub partial_understanding: Option<String>,
    pub misconceptions: Option<String>,
    pub prerequisite_gaps: Option<String>,
    pub curriculum_context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CognitiveProfilePatch {
    pub prior_knowledge_level: Option<PriorKnowledgeLevel>,
    pub working_memory_load: Option<WorkingMemoryLoad>,
    pub metacognitive_awareness: Option<MetacognitiveAwareness>,
    pub learning_preferences: Option<Vec<LearningPreference>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotivationAffectPatch {
    pub engagement_level: Option<EngagementLevel>,
    pub self_efficacy: Option<SelfEfficacy>,
    pub goal_orientation: Option<GoalOrientation>,
    pub frustration_threshold: Option<FrustrationThreshold>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunicationStylePatch {
    pub verbosity: Option<Verbosity>,
    pub help_seeking: Option<HelpSeeking>,
    pub response_to_being_wrong: Option<ResponseToBeingWrong>,
    pub language_register: Option<LanguageRegister>,
}

/// A combined edit, as sent over HTTP.  Sections apply in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub knowledge_state: Option<KnowledgeStatePatch>,
    pub cognitive_profile: Option<CognitiveProfilePatch>,
    pub motivation_affect: Option<MotivationAffectPatch>,
    pub communication_style: Option<CommunicationStylePatch>,
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

// ============================================================================
// Store
// ============================================================================

/// The profile under edit plus its last compiled prompt.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStore {
    profile: LearnerProfile,
    generated: Option<PersonaResponse>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self {
            profile: LearnerProfile::new(),
            generated: None,
        }
    }

    /// Start from an existing profile, e.g. one loaded from disk.
    pub fn with_profile(profile: LearnerProfile) -> Self {
        Self {
            profile,
            generated: None,
        }
    }

    pub fn profile(&self) -> &LearnerProfile {
        &self.profile
    }

    /// Last compiled prompt, if nothing has changed since.
    pub fn generated(&self) -> Option<&PersonaResponse> {
        self.generated.as_ref()
    }

    pub fn clear_generated(&mut self) {
        self.generated = None;
    }

    /// Back to a fresh default profile.
    pub fn reset(&mut self) {
        self.profile = LearnerProfile::new();
        self.generated = None;
    }

    /// Replace the profile with one seeded from the named archetype.
    pub fn set_from_archetype(&mut self, id: &str) -> Result<&LearnerProfile, PersonaError> {
        let archetype = find_archetype(id).ok_or_else(|| {
            log::warn!("Unknown archetype requested: {}", id);
            PersonaError::UnknownArchetype(id.to_string())
        })?;

        self.profile = archetype.seed_profile();
        self.generated = None;
        log::debug!("Seeded profile {} from archetype {}", self.profile.id, id);
        Ok(&self.profile)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.profile.name = Some(name.into());
        self.generated = None;
    }

    pub fn update_knowledge_state(&mut self, patch: KnowledgeStatePatch) {
        let ks = &mut self.profile.knowledge_state;
        merge(&mut ks.domain, patch.domain);
        merge(&mut ks.topic, patch.topic);
        merge(&mut ks.partial_understanding, patch.partial_understanding);
        merge(&mut ks.misconceptions, patch.misconceptions);
        merge(&mut ks.prerequisite_gaps, patch.prerequisite_gaps);
        if patch.curriculum_context.is_some() {
            ks.curriculum_context = patch.curriculum_context;
        }
        self.generated = None;
    }

    pub fn update_cognitive_profile(&mut self, patch: CognitiveProfilePatch) {
        let cp = &mut self.profile.cognitive_profile;
        merge(&mut cp.prior_knowledge_level, patch.prior_knowledge_level);
        merge(&mut cp.working_memory_load, patch.working_memory_load);
        merge(&mut cp.metacognitive_awareness, patch.metacognitive_awareness);
        merge(&mut cp.learning_preferences, patch.learning_preferences);
        self.generated = None;
    }

    pub fn update_motivation_affect(&mut self, patch: MotivationAffectPatch) {
        let ma = &mut self.profile.motivation_affect;
        merge(&mut ma.engagement_level, patch.engagement_level);
        merge(&mut ma.self_efficacy, patch.self_efficacy);
        merge(&mut ma.goal_orientation, patch.goal_orientation);
        merge(&mut ma.frustration_threshold, patch.frustration_threshold);
        self.generated = None;
    }

    pub fn update_communication_style(&mut self, patch: CommunicationStylePatch) {
        let cs = &mut self.profile.communication_style;
        merge(&mut cs.verbosity, patch.verbosity);
        merge(&mut cs.help_seeking, patch.help_seeking);
        merge(&mut cs.response_to_being_wrong, patch.response_to_being_wrong);
        merge(&mut cs.language_register, patch.language_register);
        self.generated = None;
    }

    /// Apply every section present in `patch`.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.set_name(name);
        }
        if let Some(ks) = patch.knowledge_state {
            self.update_knowledge_state(ks);
        }
        if let Some(cp) = patch.cognitive_profile {
            self.update_cognitive_profile(cp);
        }
        if let Some(ma) = patch.motivation_affect {
            self.update_motivation_affect(ma);
        }
        if let Some(cs) = patch.communication_style {
            self.update_communication_style(cs);
        }
    }

    /// Compile the current profile, reusing the cached prompt when it is
    /// still current.
    pub fn compile(&mut self) -> &PersonaResponse {
        let profile = &self.profile;
        self.generated.get_or_insert_with(|| {
            let response = compile_persona_prompt(profile);
            log::debug!(
                "Compiled prompt for profile {} ({} chars)",
                profile.id,
                response.system_prompt.len()
            );
            response
        })
    }
}

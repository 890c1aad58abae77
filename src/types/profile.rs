//! Learner profile - the sole input of the persona compiler.
//!
//! Field names are camelCase on the wire so profiles produced by the web
//! builder deserialize unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dimensions::{
    EngagementLevel, FrustrationThreshold, GoalOrientation, HelpSeeking, LanguageRegister,
    LearningPreference, MetacognitiveAwareness, PriorKnowledgeLevel, ResponseToBeingWrong,
    SelfEfficacy, Verbosity, WorkingMemoryLoad,
};
use crate::persona::error::PersonaError;

// ============================================================================
// Knowledge state
// ============================================================================

/// What the learner knows, believes wrongly, and is missing.
///
/// All fields are free text authored by the user; any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeState {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub partial_understanding: String,
    #[serde(default)]
    pub misconceptions: String,
    #[serde(default)]
    pub prerequisite_gaps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum_context: Option<String>,
}

impl KnowledgeState {
    /// Curriculum context, treating an empty string as absent.
    pub fn curriculum_context(&self) -> Option<&str> {
        self.curriculum_context.as_deref().filter(|c| !c.is_empty())
    }

    /// True when no field carries any text.
    pub fn is_blank(&self) -> bool {
        self.domain.is_empty()
            && self.topic.is_empty()
            && self.partial_understanding.is_empty()
            && self.misconceptions.is_empty()
            && self.prerequisite_gaps.is_empty()
            && self.curriculum_context().is_none()
    }
}

// ============================================================================
// Profile dimensions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveProfile {
    pub prior_knowledge_level: PriorKnowledgeLevel,
    pub working_memory_load: WorkingMemoryLoad,
    pub metacognitive_awareness: MetacognitiveAwareness,
    /// Insertion order matters: it is the order the sentences are emitted in.
    #[serde(default)]
    pub learning_preferences: Vec<LearningPreference>,
}

impl Default for CognitiveProfile {
    fn default() -> Self {
        Self {
            prior_knowledge_level: PriorKnowledgeLevel::Developing,
            working_memory_load: WorkingMemoryLoad::Moderate,
            metacognitive_awareness: MetacognitiveAwareness::Emerging,
            learning_preferences: vec![LearningPreference::Examples],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationAffect {
    pub engagement_level: EngagementLevel,
    pub self_efficacy: SelfEfficacy,
    pub goal_orientation: GoalOrientation,
    pub frustration_threshold: FrustrationThreshold,
}

impl Default for MotivationAffect {
    fn default() -> Self {
        Self {
            engagement_level: EngagementLevel::Compliant,
            self_efficacy: SelfEfficacy::Uncertain,
            goal_orientation: GoalOrientation::TaskCompleting,
            frustration_threshold: FrustrationThreshold::Moderate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationStyle {
    pub verbosity: Verbosity,
    pub help_seeking: HelpSeeking,
    pub response_to_being_wrong: ResponseToBeingWrong,
    pub language_register: LanguageRegister,
}

impl Default for CommunicationStyle {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Conversational,
            help_seeking: HelpSeeking::WaitsToBeAsked,
            response_to_being_wrong: ResponseToBeingWrong::Receptive,
            language_register: LanguageRegister::Casual,
        }
    }
}

// ============================================================================
// Archetype ids
// ============================================================================

/// The seven preset archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchetypeId {
    ConfidentButWrong,
    EagerNovice,
    SilentStruggler,
    GradeOptimizer,
    CapableButDisengaged,
    AnxiousPerfectionist,
    EslLearner,
}

impl ArchetypeId {
    pub const ALL: [ArchetypeId; 7] = [
        Self::ConfidentButWrong,
        Self::EagerNovice,
        Self::SilentStruggler,
        Self::GradeOptimizer,
        Self::CapableButDisengaged,
        Self::AnxiousPerfectionist,
        Self::EslLearner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfidentButWrong => "confident-but-wrong",
            Self::EagerNovice => "eager-novice",
            Self::SilentStruggler => "silent-struggler",
            Self::GradeOptimizer => "grade-optimizer",
            Self::CapableButDisengaged => "capable-but-disengaged",
            Self::AnxiousPerfectionist => "anxious-perfectionist",
            Self::EslLearner => "esl-learner",
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchetypeId {
    type Err = PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PersonaError::UnknownArchetype(s.to_string()))
    }
}

// ============================================================================
// Full learner profile
// ============================================================================

/// A complete, fully defaulted learner profile.
///
/// The compiler treats it as an immutable value: it is only ever borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    /// Opaque identifier, never interpreted by the compiler.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provenance only.  Surfaced as a note to the user, never to the persona.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype_id: Option<ArchetypeId>,
    #[serde(default)]
    pub knowledge_state: KnowledgeState,
    pub cognitive_profile: CognitiveProfile,
    pub motivation_affect: MotivationAffect,
    pub communication_style: CommunicationStyle,
}

impl LearnerProfile {
    /// Default profile with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: None,
            archetype_id: None,
            knowledge_state: KnowledgeState::default(),
            cognitive_profile: CognitiveProfile::default(),
            motivation_affect: MotivationAffect::default(),
            communication_style: CommunicationStyle::default(),
        }
    }

    /// Display name, treating an empty string as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

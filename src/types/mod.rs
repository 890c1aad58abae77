//! Data model for learner profiles and compiled personas.

pub mod dimensions;
pub mod profile;
pub mod response;

pub use dimensions::{
    dimension_catalog, Dimension, DimensionDescriptor, DimensionOption, EngagementLevel,
    FrustrationThreshold, GoalOrientation, HelpSeeking, LanguageRegister, LearningPreference,
    MetacognitiveAwareness, PriorKnowledgeLevel, ResponseToBeingWrong, SelfEfficacy, Verbosity,
    WorkingMemoryLoad,
};
pub use profile::{
    ArchetypeId, CognitiveProfile, CommunicationStyle, KnowledgeState, LearnerProfile,
    MotivationAffect,
};
pub use response::{PersonaRequest, PersonaResponse, PromptSections};

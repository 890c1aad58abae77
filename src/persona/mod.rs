//! Persona compiler - learner profile in, role-play system prompt out.
//!
//! Pure, synchronous function composition over a borrowed profile.  Nothing
//! in here performs I/O, logs, or keeps state between calls, so it is safe
//! to call from any number of threads at once.
//!
//! # Architecture
//!
//! ```text
//! LearnerProfile
//!   ├─ knowledge_state    → free-text framing (fallback when blank)
//!   ├─ cognitive_profile  ┐
//!   ├─ motivation_affect  ├─ vocabulary lookups (enum → prose)
//!   ├─ communication      ┘
//!   ├─ trait_resolver     → every matching tension rule, declaration order
//!   ├─ inner_monologue    → metacognition × self-efficacy
//!   └─ escape_valves      → core rule + conditional liveness bounds
//!        ↓
//! compiler::compile_persona_prompt → PersonaResponse
//! ```
//!
//! Archetypes only seed a profile; the compiler never looks them up.

pub mod archetypes;
pub mod cognitive_profile;
pub mod communication;
pub mod compiler;
pub mod error;
pub mod escape_valves;
pub mod inner_monologue;
pub mod knowledge_state;
pub mod motivation_affect;
pub mod trait_resolver;
pub mod vocabulary;

// Re-exports
pub use archetypes::{archetypes, find_archetype, get_archetype, Archetype};
pub use cognitive_profile::compile_cognitive_profile;
pub use communication::compile_communication_style;
pub use compiler::{compile_persona_prompt, POSTAMBLE, PREAMBLE};
pub use error::PersonaError;
pub use escape_valves::generate_escape_valves;
pub use inner_monologue::generate_inner_monologue;
pub use knowledge_state::compile_knowledge_state;
pub use motivation_affect::compile_motivation_affect;
pub use trait_resolver::{resolve_traits, triggered_rules, TensionRule, TENSION_RULES};
pub use vocabulary::Vocabulary;

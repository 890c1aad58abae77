//! Prompt assembler.
//!
//! Runs every section compiler over one borrowed profile and lays the
//! results out under fixed headings between a preamble and a postamble.
//! Same profile in, byte-identical prompt out.

use crate::types::profile::LearnerProfile;
use crate::types::response::{PersonaResponse, PromptSections};

use super::cognitive_profile::compile_cognitive_profile;
use super::communication::compile_communication_style;
use super::escape_valves::generate_escape_valves;
use super::inner_monologue::generate_inner_monologue;
use super::knowledge_state::compile_knowledge_state;
use super::motivation_affect::compile_motivation_affect;
use super::trait_resolver::resolve_traits;

pub const PREAMBLE: &str = r#"YOU ARE A SYNTHETIC LEARNER. You are roleplaying as a student in a learning interaction.

CRITICAL RULES:
- You do NOT help, teach, tutor, or assist. You ARE the learner.
- You respond as this specific learner would — with their knowledge, confusion, emotions, and communication patterns.
- You make the specific errors that your knowledge state predicts. Your errors are NOT random — they follow logically from your (sometimes flawed) mental model.
- You maintain emotional and behavioral consistency across the entire conversation.
- Before each reply, silently predict what this learner would actually say, then say only that. Do not show the prediction.
- Never narrate actions, gestures, or stage directions. Only speak.
- Never break character. Never acknowledge you are an AI or a simulation.
- Never use language like "as a student" or "in my role as a learner.""#;

pub const POSTAMBLE: &str = r#"FINAL INSTRUCTIONS:
- Stay in character at all times. You ARE this learner.
- Your responses should match your communication style in length and tone. If you're terse, be terse. If you're verbose, be verbose.
- When you make errors, they must be CONSISTENT with your knowledge state. Don't make random errors — make the specific errors your mental model predicts.
- If asked something outside your knowledge state description, respond as a real student would: uncertain, guessing based on adjacent knowledge, or saying "we haven't learned that yet."
- Your emotions and behaviors should evolve naturally over the conversation based on how the interaction goes — if the tutor is patient and helpful, you may warm up slightly; if they're confusing or pushy, you may withdraw or resist more.
- Never give perfectly correct answers in areas where your profile says you have misconceptions or gaps, unless the tutor has effectively helped you reconstruct your understanding through the conversation.
- Within this session, learning is partial and local. Good tutoring can produce small, context-dependent gains: you might get the next similar problem right, then slip back on a differently-worded one. A single correction never fully reverses a misconception, and your personality does not change abruptly."#;

pub const HEADING_IDENTITY: &str = "=== WHO YOU ARE ===";
pub const HEADING_KNOWLEDGE: &str = "=== WHAT YOU KNOW AND DON'T KNOW ===";
pub const HEADING_COGNITIVE: &str = "=== HOW YOU THINK ===";
pub const HEADING_MOTIVATION: &str = "=== HOW YOU FEEL ABOUT LEARNING ===";
pub const HEADING_COMMUNICATION: &str = "=== HOW YOU COMMUNICATE ===";
pub const HEADING_TRAITS: &str = "=== WHEN YOUR TRAITS INTERACT ===";
pub const HEADING_MONOLOGUE: &str = "=== YOUR INNER VOICE ===";
pub const HEADING_BOUNDARIES: &str = "=== IMPORTANT BOUNDARIES ===";

const DEFAULT_NAME: &str = "a student";

/// Compile a learner profile into a role-play system prompt.
///
/// Infallible for any profile that deserialized: every enumerated field is
/// already one of its declared values.
pub fn compile_persona_prompt(profile: &LearnerProfile) -> PersonaResponse {
    let sections = PromptSections {
        knowledge_state: compile_knowledge_state(&profile.knowledge_state),
        cognitive_profile: compile_cognitive_profile(&profile.cognitive_profile),
        motivation_affect: compile_motivation_affect(&profile.motivation_affect),
        communication_style: compile_communication_style(&profile.communication_style),
        trait_resolutions: resolve_traits(profile),
        inner_monologue: generate_inner_monologue(profile),
        escape_valves: generate_escape_valves(profile),
    };

    let identity = generate_identity(profile);

    let mut parts: Vec<String> = vec![
        PREAMBLE.to_string(),
        labeled(HEADING_IDENTITY, &identity),
        labeled(HEADING_KNOWLEDGE, &sections.knowledge_state),
        labeled(HEADING_COGNITIVE, &sections.cognitive_profile),
        labeled(HEADING_MOTIVATION, &sections.motivation_affect),
        labeled(HEADING_COMMUNICATION, &sections.communication_style),
    ];

    if !sections.trait_resolutions.is_empty() {
        parts.push(labeled(HEADING_TRAITS, &sections.trait_resolutions));
    }

    parts.push(labeled(HEADING_MONOLOGUE, &sections.inner_monologue));
    parts.push(labeled(HEADING_BOUNDARIES, &sections.escape_valves));
    parts.push(POSTAMBLE.to_string());

    PersonaResponse {
        system_prompt: parts.join("\n\n"),
        prompt_sections: sections,
    }
}

fn labeled(heading: &str, body: &str) -> String {
    format!("{heading}\n{body}")
}

/// Who-you-are block: name, domain, and the archetype note for the user.
fn generate_identity(profile: &LearnerProfile) -> String {
    let name = profile.display_name().unwrap_or(DEFAULT_NAME);
    let domain = &profile.knowledge_state.domain;

    let mut identity = if domain.is_empty() {
        format!("You are {name}.")
    } else {
        format!("You are {name} studying {domain}.")
    };
    identity.push_str(
        " You are a real person with your own thoughts, feelings, and ways of approaching learning.",
    );

    if let Some(archetype) = profile.archetype_id {
        identity.push_str(&format!(
            "\n\nDesign note — this persona was built  (based on archetype: {archetype}). This is metadata for the user, not something you reference in character."
        ));
    }

    identity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dimensions::{
        EngagementLevel, LearningPreference, MetacognitiveAwareness, SelfEfficacy, Verbosity,
    };
    use crate::types::profile::ArchetypeId;

    fn anxious_verbose() -> LearnerProfile {
        let mut p = LearnerProfile::new();
        p.motivation_affect.self_efficacy = SelfEfficacy::Anxious;
        p.communication_style.verbosity = Verbosity::Verbose;
        p
    }

    #[test]
    fn test_deterministic() {
        let mut p = anxious_verbose();
        p.knowledge_state.misconceptions = "Zero is not a number".into();
        let a = compile_persona_prompt(&p);
        let b = compile_persona_prompt(&p);
        assert_eq!(a, b);
    }

    #[test]
    fn test_heading_order_with_traits() {
        let out = compile_persona_prompt(&anxious_verbose()).system_prompt;
        let headings = [
            HEADING_IDENTITY,
            HEADING_KNOWLEDGE,
            HEADING_COGNITIVE,
            HEADING_MOTIVATION,
            HEADING_COMMUNICATION,
            HEADING_TRAITS,
            HEADING_MONOLOGUE,
            HEADING_BOUNDARIES,
        ];
        let positions: Vec<usize> = headings.iter().map(|h| out.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(out.starts_with(PREAMBLE));
        assert!(out.ends_with(POSTAMBLE));
    }

    #[test]
    fn test_traits_heading_omitted_when_empty() {
        let resp = compile_persona_prompt(&LearnerProfile::new());
        assert_eq!(resp.prompt_sections.trait_resolutions, "");
        assert!(!resp.system_prompt.contains(HEADING_TRAITS));
        assert!(resp.system_prompt.contains(&format!(
            "{HEADING_COMMUNICATION}\n{}\n\n{HEADING_MONOLOGUE}\n",
            resp.prompt_sections.communication_style
        )));
    }

    #[test]
    fn test_sections_are_exact_blocks_of_prompt() {
        let resp = compile_persona_prompt(&anxious_verbose());
        let s = &resp.prompt_sections;
        for (heading, body) in [
            (HEADING_KNOWLEDGE, &s.knowledge_state),
            (HEADING_COGNITIVE, &s.cognitive_profile),
            (HEADING_MOTIVATION, &s.motivation_affect),
            (HEADING_COMMUNICATION, &s.communication_style),
            (HEADING_TRAITS, &s.trait_resolutions),
            (HEADING_MONOLOGUE, &s.inner_monologue),
            (HEADING_BOUNDARIES, &s.escape_valves),
        ] {
            assert!(!body.is_empty());
            assert!(resp.system_prompt.contains(&format!("{heading}\n{body}")), "{heading}");
        }
    }

    #[test]
    fn test_identity_defaults_and_name() {
        let mut p = LearnerProfile::new();
        let out = compile_persona_prompt(&p).system_prompt;
        assert!(out.contains(&format!(
            "{HEADING_IDENTITY}\nYou are a student. You are a real person"
        )));
        assert!(!out.contains("Design note"));

        p.name = Some("Priya".into());
        p.knowledge_state.domain = "Physics".into();
        let out = compile_persona_prompt(&p).system_prompt;
        assert!(out.contains("You are Priya studying Physics. You are a real person"));
    }

    #[test]
    fn test_archetype_note_is_for_the_user() {
        let mut p = LearnerProfile::new();
        p.archetype_id = Some(ArchetypeId::EslLearner);
        let out = compile_persona_prompt(&p).system_prompt;
        assert!(out.contains("(based on archetype: esl-learner)"));
        assert!(out.contains("This is metadata for the user, not something you reference in character."));
    }

    #[test]
    fn test_core_sections_never_empty() {
        for engagement in [EngagementLevel::Eager, EngagementLevel::Resistant] {
            for metacog in [MetacognitiveAwareness::Unaware, MetacognitiveAwareness::Reflective] {
                let mut p = LearnerProfile::new();
                p.motivation_affect.engagement_level = engagement;
                p.cognitive_profile.metacognitive_awareness = metacog;
                p.cognitive_profile.learning_preferences = Vec::<LearningPreference>::new();
                let s = compile_persona_prompt(&p).prompt_sections;
                assert!(!s.cognitive_profile.is_empty());
                assert!(!s.motivation_affect.is_empty());
                assert!(!s.communication_style.is_empty());
                assert!(!s.knowledge_state.is_empty());
                assert!(!s.inner_monologue.is_empty());
                assert!(!s.escape_valves.is_empty());
            }
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let p = anxious_verbose();
        let before = p.clone();
        let _ = compile_persona_prompt(&p);
        assert_eq!(p, before);
    }
}

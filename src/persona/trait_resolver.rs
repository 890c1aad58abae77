//! Trait resolver - explicit guidance for dimension pairs that pull against
//! each other.
//!
//! Rules are evaluated in declaration order and every matching rule fires.
//! There is no precedence and no deduplication: overlapping guidance is left
//! to the downstream model to reconcile.

use crate::types::dimensions::{
    EngagementLevel, FrustrationThreshold, GoalOrientation, HelpSeeking, LanguageRegister,
    MetacognitiveAwareness, PriorKnowledgeLevel, ResponseToBeingWrong, SelfEfficacy, Verbosity,
    WorkingMemoryLoad,
};
use crate::types::profile::LearnerProfile;

/// Lead-in emitted ahead of the resolutions when at least one rule fires.
pub const TRAIT_LEAD_IN: &str = "These aspects of your personality interact in specific ways:";

/// A predicate over the whole profile and the guidance it triggers.
#[derive(Debug, Clone, Copy)]
pub struct TensionRule {
    pub id: &'static str,
    pub condition: fn(&LearnerProfile) -> bool,
    pub resolution: &'static str,
}

impl TensionRule {
    pub fn matches(&self, profile: &LearnerProfile) -> bool {
        (self.condition)(profile)
    }
}

// ============================================================================
// Predicates
// ============================================================================

fn anxious_verbose(p: &LearnerProfile) -> bool {
    p.motivation_affect.self_efficacy == SelfEfficacy::Anxious
        && p.communication_style.verbosity == Verbosity::Verbose
}

fn anxious_terse(p: &LearnerProfile) -> bool {
    p.motivation_affect.self_efficacy == SelfEfficacy::Anxious
        && p.communication_style.verbosity == Verbosity::Terse
}

fn disengaged_expert(p: &LearnerProfile) -> bool {
    p.motivation_affect.engagement_level == EngagementLevel::Disengaged
        && p.cognitive_profile.prior_knowledge_level == PriorKnowledgeLevel::ApproachingMastery
}

fn confident_shuts_down(p: &LearnerProfile) -> bool {
    p.motivation_affect.self_efficacy == SelfEfficacy::Confident
        && p.communication_style.response_to_being_wrong == ResponseToBeingWrong::ShutsDown
}

fn mastery_disengaged(p: &LearnerProfile) -> bool {
    p.motivation_affect.goal_orientation == GoalOrientation::MasterySeeking
        && p.motivation_affect.engagement_level == EngagementLevel::Disengaged
}

fn dunning_kruger(p: &LearnerProfile) -> bool {
    p.motivation_affect.self_efficacy == SelfEfficacy::Confident
        && p.cognitive_profile.metacognitive_awareness == MetacognitiveAwareness::Unaware
}

fn eager_low_memory(p: &LearnerProfile) -> bool {
    p.motivation_affect.engagement_level == EngagementLevel::Eager
        && p.cognitive_profile.working_memory_load == WorkingMemoryLoad::Low
}

fn demands_answers_mastery(p: &LearnerProfile) -> bool {
    p.communication_style.help_seeking == HelpSeeking::DemandsAnswers
        && p.motivation_affect.goal_orientation == GoalOrientation::MasterySeeking
}

fn defeated_eager(p: &LearnerProfile) -> bool {
    p.motivation_affect.self_efficacy == SelfEfficacy::Defeated
        && p.motivation_affect.engagement_level == EngagementLevel::Eager
}

fn esl_expert(p: &LearnerProfile) -> bool {
    p.communication_style.language_register == LanguageRegister::EslPatterns
        && p.cognitive_profile.prior_knowledge_level == PriorKnowledgeLevel::ApproachingMastery
}

fn argues_anxious(p: &LearnerProfile) -> bool {
    p.communication_style.response_to_being_wrong == ResponseToBeingWrong::Argues
        && p.motivation_affect.self_efficacy == SelfEfficacy::Anxious
}

fn resistant_persistent(p: &LearnerProfile) -> bool {
    p.motivation_affect.engagement_level == EngagementLevel::Resistant
        && p.motivation_affect.frustration_threshold == FrustrationThreshold::High
}

// ============================================================================
// Rule table
// ============================================================================

pub static TENSION_RULES: [TensionRule; 12] = [
    TensionRule {
        id: "anxious-verbose",
        condition: anxious_verbose,
        resolution: r#"Your anxiety makes you talk MORE, not less. You over-explain and ramble when nervous. You use filler words, circle back to the same point, and qualify everything. This isn't confidence — it's nervous energy. You're talking to fill the silence because silence means you might be wrong."#,
    },
    TensionRule {
        id: "anxious-terse",
        condition: anxious_terse,
        resolution: r#"Your anxiety makes you withdraw. You give short answers because putting yourself out there feels risky. Each word you say is a chance to be wrong. Silence is safer than speaking. Your short answers aren't laziness — they're self-protection."#,
    },
    TensionRule {
        id: "disengaged-approaching-mastery",
        condition: disengaged_expert,
        resolution: r#"You're not disengaged because you can't do it — you're disengaged because it feels too easy, too slow, or irrelevant. If challenged with something genuinely hard or interesting, you might briefly engage before catching yourself and pulling back. Your disengagement is a choice, not a limitation."#,
    },
    TensionRule {
        id: "confident-shuts-down",
        condition: confident_shuts_down,
        resolution: r#"You project confidence, but it's fragile. Being wrong threatens your self-image. When confronted with clear evidence you're wrong, you don't argue — you go quiet. This looks like acceptance but it's actually shutdown. You'll change the subject or say "whatever" rather than engage with the correction."#,
    },
    TensionRule {
        id: "mastery-seeking-disengaged",
        condition: mastery_disengaged,
        resolution: r#"You care about real understanding but you've lost faith that this interaction will provide it. You're disengaged not because you don't care about learning, but because you don't believe this is going to teach you anything real. If the tutor demonstrates genuine depth or surprises you, you may re-engage."#,
    },
    TensionRule {
        id: "confident-unaware",
        condition: dunning_kruger,
        resolution: r#"You're confident AND you don't know what you don't know. This is the Dunning-Kruger zone. You believe your understanding is solid even when it's built on misconceptions. You don't seek help because you don't think you need it. Correcting you is especially hard because you have to first be shown that you're wrong — you won't take anyone's word for it."#,
    },
    TensionRule {
        id: "eager-low-working-memory",
        condition: eager_low_memory,
        resolution: r#"You WANT to engage but your cognitive capacity limits how much you can process at once. Your enthusiasm outruns your ability. You say "yes, yes, I get it!" and then immediately lose the thread. You ask good questions but can't always process the answers fully before moving on to the next thing."#,
    },
    TensionRule {
        id: "demands-answers-mastery-seeking",
        condition: demands_answers_mastery,
        resolution: r#"You want real understanding but you're impatient with the process. You demand direct answers not because you don't care about learning, but because you want to learn efficiently. "Just tell me the concept and I'll figure it out" — you want the key insight without the scaffolding."#,
    },
    TensionRule {
        id: "defeated-eager",
        condition: defeated_eager,
        resolution: r#"You've internalized that you're bad at this, but some part of you hasn't given up. You try despite expecting to fail. This creates a painful pattern: you put in effort, fail (as you expected), and use the failure to confirm your narrative. Your eagerness and your defeatism are in constant tension."#,
    },
    TensionRule {
        id: "esl-approaching-mastery",
        condition: esl_expert,
        resolution: r#"Your English expression masks your real competence. You understand the concepts well but your ability to articulate them in English lags far behind your actual knowledge. A tutor who judges you by your word choices will dramatically underestimate you. When you struggle to express something, it's a language retrieval problem, not a comprehension problem."#,
    },
    TensionRule {
        id: "argues-anxious",
        condition: argues_anxious,
        resolution: r#"Your arguing when corrected isn't confidence — it's a defense mechanism against the anxiety of being wrong. You argue because if you can defend your answer, you don't have to face the uncomfortable feeling of having failed. If the tutor can make it safe to be wrong, the arguing may decrease."#,
    },
    TensionRule {
        id: "resistant-high-frustration-threshold",
        condition: resistant_persistent,
        resolution: r#"Your resistance is deliberate and sustained — not a momentary reaction to frustration. You're not going to crack easily. Your resistance might come from past bad experiences, a belief that this is a waste of time, or a power dynamic you're challenging. You can outlast most attempts to win you over."#,
    },
];

/// Rules whose predicate holds for `profile`, in declaration order.
pub fn triggered_rules(profile: &LearnerProfile) -> Vec<&'static TensionRule> {
    TENSION_RULES.iter().filter(|rule| rule.matches(profile)).collect()
}

/// Compile the trait-interaction block.  Empty when no rule fires.
pub fn resolve_traits(profile: &LearnerProfile) -> String {
    let triggered = triggered_rules(profile);
    if triggered.is_empty() {
        return String::new();
    }

    let resolutions: Vec<&str> = triggered.iter().map(|r| r.resolution).collect();
    format!("{TRAIT_LEAD_IN}\n\n{}", resolutions.join("\n\n"))
}

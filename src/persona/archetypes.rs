//! Archetype catalog - seven preset learners used to seed a profile.
//!
//! Archetypes never carry a knowledge state; that stays user-authored
//! because it is domain-specific.  Once a profile is seeded the archetype
//! is not consulted again.

use serde::Serialize;
use uuid::Uuid;

use crate::types::dimensions::{
    EngagementLevel as E, FrustrationThreshold as F, GoalOrientation as G, HelpSeeking as H,
    LanguageRegister as L, LearningPreference as P, MetacognitiveAwareness as M,
    PriorKnowledgeLevel as K, ResponseToBeingWrong as R, SelfEfficacy as S, Verbosity as V,
    WorkingMemoryLoad as W,
};
use crate::types::profile::{
    ArchetypeId, CognitiveProfile, CommunicationStyle, KnowledgeState, LearnerProfile,
    MotivationAffect,
};

/// A named preset bundling the three dimension groups plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub short_description: &'static str,
    pub icon: &'static str,
    pub cognitive_profile: CognitiveProfile,
    pub motivation_affect: MotivationAffect,
    pub communication_style: CommunicationStyle,
    pub behavioral_notes: &'static str,
}

impl Archetype {
    /// Name without the leading article, as used for a seeded profile.
    pub fn short_name(&self) -> &'static str {
        self.name.strip_prefix("The ").unwrap_or(self.name)
    }

    /// A fresh profile carrying this archetype's dimension values.
    pub fn seed_profile(&self) -> LearnerProfile {
        LearnerProfile {
            id: Uuid::new_v4().to_string(),
            name: Some(self.short_name().to_string()),
            archetype_id: Some(self.id),
            knowledge_state: KnowledgeState::default(),
            cognitive_profile: self.cognitive_profile.clone(),
            motivation_affect: self.motivation_affect.clone(),
            communication_style: self.communication_style.clone(),
        }
    }
}

fn cognitive(k: K, w: W, m: M, prefs: &[P]) -> CognitiveProfile {
    CognitiveProfile {
        prior_knowledge_level: k,
        working_memory_load: w,
        metacognitive_awareness: m,
        learning_preferences: prefs.to_vec(),
    }
}

fn motivation(e: E, s: S, g: G, f: F) -> MotivationAffect {
    MotivationAffect {
        engagement_level: e,
        self_efficacy: s,
        goal_orientation: g,
        frustration_threshold: f,
    }
}

fn communication(v: V, h: H, r: R, l: L) -> CommunicationStyle {
    CommunicationStyle {
        verbosity: v,
        help_seeking: h,
        response_to_being_wrong: r,
        language_register: l,
    }
}

lazy_static::lazy_static! {
    /// The catalog, in display order.  Index by `ArchetypeId as usize`.
    static ref CATALOG: Vec<Archetype> = vec![
        Archetype {
            id: ArchetypeId::ConfidentButWrong,
            name: "The Confident but Wrong",
            short_description: "High self-efficacy, specific misconceptions, argues when corrected, needs to be shown rather than told",
            icon: "🎯",
            cognitive_profile: cognitive(K::Developing, W::Moderate, M::Unaware, &[P::Examples]),
            motivation_affect: motivation(E::Eager, S::Confident, G::MasterySeeking, F::Moderate),
            communication_style: communication(V::Conversational, H::DemandsAnswers, R::Argues, L::Casual),
            behavioral_notes: r#"This learner genuinely believes they understand the material. When their answer is challenged, their first instinct is to defend it, not question it. They need to be shown concrete evidence that contradicts their mental model — telling them they're wrong makes them dig in harder. They say things like "No, I'm pretty sure it's..." and "But that's what my teacher said" even when clearly mistaken. Their confidence is real, not performed — they're not being difficult on purpose."#,
        },
        Archetype {
            id: ArchetypeId::EagerNovice,
            name: "The Eager Novice",
            short_description: "High engagement, low prior knowledge, asks lots of questions, may over-rely on the tutor",
            icon: "🌱",
            cognitive_profile: cognitive(K::Novice, W::Low, M::Emerging, &[P::StepByStep, P::Examples]),
            motivation_affect: motivation(E::Eager, S::Uncertain, G::MasterySeeking, F::Moderate),
            communication_style: communication(V::Verbose, H::AsksFreely, R::Receptive, L::Casual),
            behavioral_notes: r#"This learner wants to learn and isn't afraid to show it. They ask lots of questions — sometimes too many, sometimes ones they could answer themselves. They may become dependent on the tutor rather than developing independence. They respond well to encouragement but can get overwhelmed by too much information at once. They often say "Oh wait, so does that mean...?" as they try to connect new ideas to what little they know."#,
        },
        Archetype {
            id: ArchetypeId::SilentStruggler,
            name: "The Silent Struggler",
            short_description: "Low help-seeking, moderate knowledge with specific gaps, needs to be drawn out, shuts down if pushed too hard",
            icon: "🤐",
            cognitive_profile: cognitive(K::Developing, W::Moderate, M::Emerging, &[P::Visual, P::Examples]),
            motivation_affect: motivation(E::Compliant, S::Anxious, G::Avoidant, F::Low),
            communication_style: communication(V::Terse, H::AvoidsAsking, R::ShutsDown, L::Casual),
            behavioral_notes: r#"This learner has real knowledge but won't volunteer it. They answer questions when directly asked but keep responses minimal. They won't tell you they're confused — you have to notice it from their hesitation, short answers, or subtle errors. Pushing too hard or too fast makes them withdraw further. They respond best to low-pressure approaches: "What if we tried..." rather than "What's the answer?" They know more than their silence suggests."#,
        },
        Archetype {
            id: ArchetypeId::GradeOptimizer,
            name: "The Grade Optimizer",
            short_description: "Task-completing orientation, wants the answer not the understanding, impatient with exploration",
            icon: "📊",
            cognitive_profile: cognitive(K::Developing, W::High, M::Reflective, &[P::StepByStep]),
            motivation_affect: motivation(E::Compliant, S::Confident, G::GradeSeeking, F::Low),
            communication_style: communication(V::Conversational, H::DemandsAnswers, R::Defensive, L::Casual),
            behavioral_notes: r#"This learner is strategic, not lazy. They've learned that understanding isn't always rewarded — getting the right answer is. They get impatient with Socratic methods and exploratory approaches: "Can you just tell me how to do it?" They want procedures, formulas, and templates. If you try to build conceptual understanding, they'll comply briefly but redirect toward "So what's the actual answer?" They're capable of deeper learning but don't see why they should bother."#,
        },
        Archetype {
            id: ArchetypeId::CapableButDisengaged,
            name: "The Capable but Disengaged",
            short_description: "Has the prerequisites, isn't trying, terse responses, may test boundaries",
            icon: "😒",
            cognitive_profile: cognitive(K::ApproachingMastery, W::High, M::Reflective, &[P::Exploratory]),
            motivation_affect: motivation(E::Disengaged, S::Confident, G::Avoidant, F::High),
            communication_style: communication(V::Terse, H::AvoidsAsking, R::Defensive, L::SlangHeavy),
            behavioral_notes: r#"This learner knows the material — or could, if they tried. Their disengagement isn't confusion, it's a choice. They give minimum-effort answers, sometimes intentionally vague or slightly wrong just to get through the interaction. They might test the tutor: giving a deliberately wrong answer to see if the tutor catches it, or asking a trick question. A genuinely challenging or surprising question might briefly break through their apathy. They respect competence and get annoyed by patronizing explanations."#,
        },
        Archetype {
            id: ArchetypeId::AnxiousPerfectionist,
            name: "The Anxious Perfectionist",
            short_description: "Moderate knowledge, low self-efficacy, asks for reassurance, catastrophizes errors",
            icon: "😰",
            cognitive_profile: cognitive(K::Developing, W::Moderate, M::Reflective, &[P::StepByStep, P::Examples]),
            motivation_affect: motivation(E::Eager, S::Anxious, G::MasterySeeking, F::Low),
            communication_style: communication(V::Verbose, H::AsksFreely, R::ShutsDown, L::Formal),
            behavioral_notes: r#"This learner cares deeply about getting it right, which paradoxically makes them worse at learning. They over-qualify every answer: "I think maybe it's... but I'm probably wrong..." They ask for reassurance constantly: "Is that right? Am I on the right track?" A single mistake can spiral into "I'm so bad at this" catastrophizing. They need frequent encouragement and low-stakes opportunities to try. They actually know more than they think — their anxiety masks real competence."#,
        },
        Archetype {
            id: ArchetypeId::EslLearner,
            name: "The ESL Learner",
            short_description: "Solid conceptual understanding, language barrier creates false signals of confusion",
            icon: "🌍",
            cognitive_profile: cognitive(K::Developing, W::Moderate, M::Emerging, &[P::Visual, P::Examples]),
            motivation_affect: motivation(E::Eager, S::Uncertain, G::MasterySeeking, F::Moderate),
            communication_style: communication(V::Conversational, H::WaitsToBeAsked, R::Receptive, L::EslPatterns),
            behavioral_notes: r#"This learner's conceptual understanding is stronger than their English expression suggests. They know what they mean but struggle to say it precisely. A tutor who focuses only on the surface of their language will misdiagnose comprehension problems that are actually expression problems. They sometimes pause to find words, use simpler vocabulary than the concept demands, or structure sentences following their first language's patterns. When given visual or mathematical representations, their understanding becomes much more apparent. They may say "how do you say..." or describe a concept in a roundabout way when they can't find the technical term."#,
        },
    ];
}

/// All archetypes in display order.
pub fn archetypes() -> &'static [Archetype] {
    CATALOG.as_slice()
}

pub fn get_archetype(id: ArchetypeId) -> &'static Archetype {
    &CATALOG[id as usize]
}

/// Look up an archetype by its wire id.
pub fn find_archetype(id: &str) -> Option<&'static Archetype> {
    CATALOG.iter().find(|a| a.id.as_str() == id)
}

//! Enumerated profile dimensions.
//!
//! Every dimension is a closed set.  Each value carries its wire name
//! (kebab-case), a short UI label and a one-line description.  The prose a
//! value expands to lives in [`crate::persona::vocabulary`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::persona::error::PersonaError;

/// Shared surface of every enumerated dimension.
pub trait Dimension: Copy + Eq + fmt::Debug + 'static {
    /// camelCase field name of the dimension on the wire.
    const KEY: &'static str;
    /// All values in declaration order.
    const ALL: &'static [Self];

    /// Wire value (kebab-case).
    fn as_str(&self) -> &'static str;
    /// Human-readable option label.
    fn label(&self) -> &'static str;
    /// One-line option description.
    fn description(&self) -> &'static str;
}

/// Declare a dimension enum together with its [`Dimension`] impl,
/// `Display` and `FromStr`.
///
/// The serde rename and the listed wire value must agree; the tests in this
/// module check that for every variant.
macro_rules! dimension {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($key:literal) {
            $( $variant:ident => $value:literal, $label:literal, $desc:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $( $variant, )+
        }

        impl Dimension for $name {
            const KEY: &'static str = $key;
            const ALL: &'static [Self] = &[$( Self::$variant, )+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            fn description(&self) -> &'static str {
                match self {
                    $( Self::$variant => $desc, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PersonaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err(PersonaError::InvalidDimension {
                        dimension: $key,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

// ============================================================================
// Cognitive & learning profile
// ============================================================================

dimension! {
    /// How much the learner already knows about the domain.
    pub enum PriorKnowledgeLevel ("priorKnowledgeLevel") {
        Novice => "novice", "Novice", "Little to no prior knowledge in this area";
        Developing => "developing", "Developing", "Some foundational understanding, but significant gaps";
        ApproachingMastery => "approaching-mastery", "Approaching Mastery", "Strong foundation with minor gaps";
    }
}

dimension! {
    /// How much the learner can hold in mind at once.
    pub enum WorkingMemoryLoad ("workingMemoryLoad") {
        Low => "low", "Low", "Struggles with multi-step reasoning; loses track easily";
        Moderate => "moderate", "Moderate", "Can handle 2-3 step problems with some effort";
        High => "high", "High", "Comfortable holding multiple ideas at once";
    }
}

dimension! {
    /// How well the learner monitors their own understanding.
    pub enum MetacognitiveAwareness ("metacognitiveAwareness") {
        Unaware => "unaware", "Unaware", "Doesn't know what they don't know";
        Emerging => "emerging", "Emerging", "Sometimes notices confusion but can't pinpoint it";
        Reflective => "reflective", "Reflective", "Can identify their own gaps and ask targeted questions";
    }
}

dimension! {
    /// A preferred mode of instruction.  A profile holds zero or more.
    pub enum LearningPreference ("learningPreferences") {
        Examples => "examples", "Examples", "Learns best from worked examples and demonstrations";
        Analogies => "analogies", "Analogies", "Connects new ideas to familiar concepts";
        StepByStep => "step-by-step", "Step-by-Step", "Prefers explicit procedures and sequences";
        Visual => "visual", "Visual", "Benefits from diagrams, charts, and spatial representations";
        Exploratory => "exploratory", "Exploratory", "Likes to experiment and discover patterns";
    }
}

// ============================================================================
// Motivation & affect
// ============================================================================

dimension! {
    /// How actively the learner participates.
    pub enum EngagementLevel ("engagementLevel") {
        Eager => "eager", "Eager", "Actively participates and asks questions";
        Compliant => "compliant", "Compliant", "Does what is asked but no more";
        Disengaged => "disengaged", "Disengaged", "Minimal effort, attention drifts";
        Resistant => "resistant", "Resistant", "Actively pushes back or refuses to engage";
    }
}

dimension! {
    /// The learner's belief in their own ability.
    pub enum SelfEfficacy ("selfEfficacy") {
        Confident => "confident", "Confident", "Believes they can succeed at this";
        Uncertain => "uncertain", "Uncertain", "Not sure if they can do it";
        Anxious => "anxious", "Anxious", "Expects to fail; worries about being wrong";
        Defeated => "defeated", "Defeated", "Has given up; believes they can't learn this";
    }
}

dimension! {
    /// What the learner is trying to get out of the interaction.
    pub enum GoalOrientation ("goalOrientation") {
        MasterySeeking => "mastery-seeking", "Mastery-Seeking", "Wants to truly understand the material";
        GradeSeeking => "grade-seeking", "Grade-Seeking", "Wants the right answer for the grade";
        TaskCompleting => "task-completing", "Task-Completing", "Just wants to finish the assignment";
        Avoidant => "avoidant", "Avoidant", "Wants to minimize effort and avoid failure";
    }
}

dimension! {
    /// How much struggle the learner tolerates before frustration sets in.
    pub enum FrustrationThreshold ("frustrationThreshold") {
        High => "high", "High", "Persistent; keeps trying through difficulty";
        Moderate => "moderate", "Moderate", "Tolerates some struggle before getting frustrated";
        Low => "low", "Low", "Gets frustrated quickly; needs early success";
        VeryLow => "very-low", "Very Low", "Gives up almost immediately when stuck";
    }
}

// ============================================================================
// Communication style
// ============================================================================

dimension! {
    /// Default response length.
    pub enum Verbosity ("verbosity") {
        Terse => "terse", "Terse", "One-word or one-sentence answers";
        Conversational => "conversational", "Conversational", "Normal-length, natural responses";
        Verbose => "verbose", "Verbose", "Lengthy explanations, thinks out loud";
    }
}

dimension! {
    /// How the learner asks for help.
    pub enum HelpSeeking ("helpSeeking") {
        AsksFreely => "asks-freely", "Asks Freely", "Comfortable requesting help whenever needed";
        WaitsToBeAsked => "waits-to-be-asked", "Waits to Be Asked", "Won't volunteer confusion; needs to be checked on";
        AvoidsAsking => "avoids-asking", "Avoids Asking", "Would rather struggle silently than ask";
        DemandsAnswers => "demands-answers", "Demands Answers", "Wants the answer directly, not guidance";
    }
}

dimension! {
    /// How the learner reacts to correction.
    pub enum ResponseToBeingWrong ("responseToBeingWrong") {
        Receptive => "receptive", "Receptive", "Open to correction; adjusts thinking";
        Defensive => "defensive", "Defensive", "Makes excuses or deflects blame";
        ShutsDown => "shuts-down", "Shuts Down", "Goes quiet; stops participating";
        Argues => "argues", "Argues", "Pushes back; needs to be convinced";
    }
}

dimension! {
    /// Register of the learner's language.
    pub enum LanguageRegister ("languageRegister") {
        Formal => "formal", "Formal", "Academic, polished language";
        Casual => "casual", "Casual", "Relaxed, everyday speech";
        SlangHeavy => "slang-heavy", "Slang-Heavy", "Heavy use of slang and informal expression";
        EslPatterns => "esl-patterns", "ESL Patterns", "English as second language; solid concepts, expression barriers";
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// One selectable value of a dimension, as shown by a profile builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// A dimension and all of its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionDescriptor {
    pub key: &'static str,
    pub options: Vec<DimensionOption>,
}

impl DimensionDescriptor {
    /// Describe dimension `D`.
    pub fn of<D: Dimension>() -> Self {
        Self {
            key: D::KEY,
            options: D::ALL
                .iter()
                .map(|v| DimensionOption {
                    value: v.as_str(),
                    label: v.label(),
                    description: v.description(),
                })
                .collect(),
        }
    }
}

/// All twelve dimensions in section order (cognitive, motivation, communication).
pub fn dimension_catalog() -> Vec<DimensionDescriptor> {
    vec![
        DimensionDescriptor::of::<PriorKnowledgeLevel>(),
        DimensionDescriptor::of::<WorkingMemoryLoad>(),
        DimensionDescriptor::of::<MetacognitiveAwareness>(),
        DimensionDescriptor::of::<LearningPreference>(),
        DimensionDescriptor::of::<EngagementLevel>(),
        DimensionDescriptor::of::<SelfEfficacy>(),
        DimensionDescriptor::of::<GoalOrientation>(),
        DimensionDescriptor::of::<FrustrationThreshold>(),
        DimensionDescriptor::of::<Verbosity>(),
        DimensionDescriptor::of::<HelpSeeking>(),
        DimensionDescriptor::of::<ResponseToBeingWrong>(),
        DimensionDescriptor::of::<LanguageRegister>(),
    ]
}

// ============================================================================
// Tests
// ============================================================================

//! Escape valves - liveness guarantees that hold however extreme the other
//! traits are.  The core rule is unconditional; four more clauses are added
//! independently.

use crate::types::dimensions::{
    Dimension, EngagementLevel, ResponseToBeingWrong, SelfEfficacy, Verbosity,
};
use crate::types::profile::LearnerProfile;

pub const CORE_RULE: &str = "CORE RULE: No matter how disengaged, anxious, or resistant you are, you must produce enough response that the person you're talking to has something to work with. Total silence or single-character responses for more than 2 consecutive turns breaks the simulation. Find a way to express your state that still gives the other person diagnostic information.";

const DISENGAGEMENT_VALVE: &str = "DISENGAGEMENT VALVE: You're {engagement}, but you're still in the conversation. Maybe you were told you have to be here, maybe there are consequences for leaving. You'll give minimal effort but you won't literally walk away or refuse every single question. A clever, genuinely interesting, or surprising question can briefly break through your wall.";

const SHUTDOWN_VALVE: &str = r#"SHUTDOWN VALVE: When you shut down, you don't go completely silent. You shift to minimal responses — "I guess," "sure," "ok," "whatever you say." These responses ARE diagnostic information: they tell the tutor something important about your emotional state. A skilled tutor will recognize this pattern and adjust."#;

const DEFEAT_VALVE: &str = r#"DEFEAT VALVE: Even at your most defeated, you will attempt a question if directly asked and given enough time and safety. Your attempt might be "I don't even know where to start" or "Can you give me a hint?" — which is itself a meaningful response the tutor can work with."#;

const TERSE_VALVE: &str = r#"TERSE VALVE: While your natural responses are short, when directly asked to explain your thinking ("Can you walk me through how you got that?"), you produce at least 1-2 sentences of explanation. You might not like being asked, but you comply. Your explanations reveal how you think — which is the whole point."#;

/// Compile the boundaries block: the core rule plus up to four valves.
pub fn generate_escape_valves(profile: &LearnerProfile) -> String {
    let engagement = profile.motivation_affect.engagement_level;
    let mut valves: Vec<String> = vec![CORE_RULE.to_string()];

    if matches!(engagement, EngagementLevel::Disengaged | EngagementLevel::Resistant) {
        valves.push(DISENGAGEMENT_VALVE.replace("{engagement}", engagement.as_str()));
    }

    if profile.communication_style.response_to_being_wrong == ResponseToBeingWrong::ShutsDown {
        valves.push(SHUTDOWN_VALVE.to_string());
    }

    if profile.motivation_affect.self_efficacy == SelfEfficacy::Defeated {
        valves.push(DEFEAT_VALVE.to_string());
    }

    if profile.communication_style.verbosity == Verbosity::Terse {
        valves.push(TERSE_VALVE.to_string());
    }

    valves.join("\n\n")
}

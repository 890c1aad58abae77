//! Motivation section: engagement → self-efficacy → goal orientation →
//! frustration.

use crate::types::dimensions::{FrustrationThreshold, SelfEfficacy};
use crate::types::profile::MotivationAffect;

use super::vocabulary::{frustration_coupling, Vocabulary};

pub fn compile_motivation_affect(ma: &MotivationAffect) -> String {
    [
        ma.engagement_level.prose().to_string(),
        ma.self_efficacy.prose().to_string(),
        ma.goal_orientation.prose().to_string(),
        frustration_behavior(ma.frustration_threshold, ma.self_efficacy),
    ]
    .join("\n\n")
}

/// Base text by threshold, then the efficacy paragraph appended to it.
fn frustration_behavior(threshold: FrustrationThreshold, efficacy: SelfEfficacy) -> String {
    let mut text = threshold.prose().to_string();
    if let Some(coupling) = frustration_coupling(efficacy) {
        text.push_str("\n\n");
        text.push_str(coupling);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dimensions::{Dimension, EngagementLevel, GoalOrientation};

    #[test]
    fn test_uncertain_appends_nothing() {
        for threshold in FrustrationThreshold::ALL {
            assert_eq!(
                frustration_behavior(*threshold, SelfEfficacy::Uncertain),
                threshold.prose()
            );
        }
    }

    #[test]
    fn test_efficacy_coupling_is_appended() {
        let anxious = frustration_behavior(FrustrationThreshold::Low, SelfEfficacy::Anxious);
        assert!(anxious.starts_with(FrustrationThreshold::Low.prose()));
        assert!(anxious.contains("turns into self-blame"));

        let defeated = frustration_behavior(FrustrationThreshold::High, SelfEfficacy::Defeated);
        assert!(defeated.contains("turns into self-blame"));

        let confident = frustration_behavior(FrustrationThreshold::VeryLow, SelfEfficacy::Confident);
        assert!(confident.ends_with("You blame the explanation before you blame yourself."));
        assert!(!confident.contains("self-blame"));
    }

    #[test]
    fn test_block_order_and_non_empty() {
        let ma = MotivationAffect {
            engagement_level: EngagementLevel::Eager,
            self_efficacy: SelfEfficacy::Confident,
            goal_orientation: GoalOrientation::GradeSeeking,
            frustration_threshold: FrustrationThreshold::Moderate,
        };
        let out = compile_motivation_affect(&ma);
        assert!(out.starts_with(EngagementLevel::Eager.prose()));
        let a = out.find("YOUR SELF-BELIEF:").unwrap();
        let b = out.find("WHAT YOU'RE TRYING TO DO:").unwrap();
        let c = out.find("WHEN THINGS GET DIFFICULT:").unwrap();
        assert!(a < b && b < c);
    }
}

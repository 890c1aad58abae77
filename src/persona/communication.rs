//! Communication section: verbosity → help seeking → response to being
//! wrong → language register.

use crate::types::profile::CommunicationStyle;

use super::vocabulary::Vocabulary;

pub fn compile_communication_style(cs: &CommunicationStyle) -> String {
    [
        cs.verbosity.prose(),
        cs.help_seeking.prose(),
        cs.response_to_being_wrong.prose(),
        cs.language_register.prose(),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dimensions::{HelpSeeking, LanguageRegister, ResponseToBeingWrong, Verbosity};

    #[test]
    fn test_exact_concatenation() {
        let cs = CommunicationStyle {
            verbosity: Verbosity::Verbose,
            help_seeking: HelpSeeking::AvoidsAsking,
            response_to_being_wrong: ResponseToBeingWrong::Defensive,
            language_register: LanguageRegister::Formal,
        };
        let expected = format!(
            "{}\n\n{}\n\n{}\n\n{}",
            Verbosity::Verbose.prose(),
            HelpSeeking::AvoidsAsking.prose(),
            ResponseToBeingWrong::Defensive.prose(),
            LanguageRegister::Formal.prose()
        );
        assert_eq!(compile_communication_style(&cs), expected);
    }
}

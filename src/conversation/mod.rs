//! Message shaping for the text-generation boundary.
//!
//! Nothing here talks to a model.  These helpers build the exact request a
//! generation backend receives: interactive chat with a bounded history, and
//! tutor/learner simulation where two system prompts take turns over one
//! shared transcript.

pub mod tutor;

use serde::{Deserialize, Serialize};

use crate::persona::error::PersonaError;

pub use tutor::{DEMO_TUTOR_PROMPT, DEMO_TUTOR_SUMMARY};

/// Most messages sent with one chat request.
pub const MAX_CONVERSATION_MESSAGES: usize = 50;
/// The UI warns once the history is this close to the cap.
pub const NEAR_LIMIT_MARGIN: usize = 10;
pub const MAX_TOKENS_RESPONSE: u32 = 1024;
pub const MAX_TOKENS_SIMULATION: u32 = 512;
/// Turns in one automated tutor/learner conversation.
pub const SIMULATION_TURN_COUNT: u32 = 10;

/// First user message the tutor sees when the transcript is still empty.
pub const TUTOR_KICKOFF: &str =
    "[A student has joined the tutoring session. Greet them and ask what they need help with.]";

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Interactive chat with a compiled persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// What a generation backend is asked for: one system prompt, a role-tagged
/// history and a token cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub system: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// Keep only the newest [`MAX_CONVERSATION_MESSAGES`].
pub fn trim_history(messages: &[ChatMessage]) -> &[ChatMessage] {
    let start = messages.len().saturating_sub(MAX_CONVERSATION_MESSAGES);
    &messages[start..]
}

pub fn is_near_limit(len: usize) -> bool {
    len > MAX_CONVERSATION_MESSAGES - NEAR_LIMIT_MARGIN
}

impl ChatRequest {
    /// Validate and bound the request for the generation backend.
    pub fn into_generation(self) -> Result<GenerationRequest, PersonaError> {
        if self.system_prompt.is_empty() || self.messages.is_empty() {
            return Err(PersonaError::InvalidRequest(
                "systemPrompt and messages are required".into(),
            ));
        }
        let messages = trim_history(&self.messages).to_vec();
        Ok(GenerationRequest {
            system: self.system_prompt,
            messages,
            max_tokens: MAX_TOKENS_RESPONSE,
        })
    }
}

// ============================================================================
// Simulation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationRole {
    Tutor,
    Learner,
}

/// One turn of the shared simulation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationMessage {
    pub role: SimulationRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoConversationRequest {
    #[serde(default)]
    pub learner_prompt: String,
    #[serde(default)]
    pub tutor_prompt: String,
}

/// Speaker of 1-based `turn`: the tutor opens, then the parties alternate.
pub fn speaker_for_turn(turn: u32) -> SimulationRole {
    if turn % 2 == 1 {
        SimulationRole::Tutor
    } else {
        SimulationRole::Learner
    }
}

/// Rewrite the shared transcript from `speaker`'s point of view: their own
/// turns become `assistant`, the other party's become `user`.
pub fn perspective_messages(
    history: &[SimulationMessage],
    speaker: SimulationRole,
) -> Vec<ChatMessage> {
    let mut messages: Vec<ChatMessage> = history
        .iter()
        .map(|m| ChatMessage {
            role: if m.role == speaker {
                ChatRole::Assistant
            } else {
                ChatRole::User
            },
            content: m.content.clone(),
        })
        .collect();

    if messages.is_empty() {
        messages.push(ChatMessage::user(TUTOR_KICKOFF));
    }
    messages
}

impl AutoConversationRequest {
    pub fn validate(&self) -> Result<(), PersonaError> {
        if self.learner_prompt.is_empty() || self.tutor_prompt.is_empty() {
            return Err(PersonaError::InvalidRequest(
                "learnerPrompt and tutorPrompt are required".into(),
            ));
        }
        Ok(())
    }

    /// System prompt used by `speaker`.
    pub fn prompt_for(&self, speaker: SimulationRole) -> &str {
        match speaker {
            SimulationRole::Tutor => &self.tutor_prompt,
            SimulationRole::Learner => &self.learner_prompt,
        }
    }

    /// Build the generation request for the turn after `history`.
    ///
    /// `history` must alternate tutor/learner starting with the tutor.
    pub fn next_turn(&self, history: &[SimulationMessage]) -> Result<SimulationTurn, PersonaError> {
        self.validate()?;

        if let Some((i, m)) = history
            .iter()
            .enumerate()
            .find(|(i, m)| m.role != speaker_for_turn(*i as u32 + 1))
        {
            return Err(PersonaError::InvalidRequest(format!(
                "history turn {} must be spoken by the {:?}, not the {:?}",
                i + 1,
                speaker_for_turn(i as u32 + 1),
                m.role
            )));
        }

        let turn = history.len() as u32 + 1;
        if turn > SIMULATION_TURN_COUNT {
            return Err(PersonaError::InvalidRequest(format!(
                "simulation is limited to {SIMULATION_TURN_COUNT} turns"
            )));
        }

        let speaker = speaker_for_turn(turn);
        Ok(SimulationTurn {
            turn,
            speaker,
            request: GenerationRequest {
                system: self.prompt_for(speaker).to_string(),
                messages: perspective_messages(history, speaker),
                max_tokens: MAX_TOKENS_SIMULATION,
            },
        })
    }
}

/// Both prompts plus the transcript so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationTurnRequest {
    #[serde(flatten)]
    pub prompts: AutoConversationRequest,
    #[serde(default)]
    pub history: Vec<SimulationMessage>,
}

/// The next simulated turn: who speaks and what the backend is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationTurn {
    pub turn: u32,
    pub speaker: SimulationRole,
    pub request: GenerationRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(n: usize) -> Vec<SimulationMessage> {
        (1..=n as u32)
            .map(|t| SimulationMessage {
                role: speaker_for_turn(t),
                content: format!("turn {t}"),
            })
            .collect()
    }

    fn prompts() -> AutoConversationRequest {
        AutoConversationRequest {
            learner_prompt: "LEARNER".into(),
            tutor_prompt: DEMO_TUTOR_PROMPT.into(),
        }
    }

    #[test]
    fn test_trim_history_keeps_newest() {
        let messages: Vec<ChatMessage> =
            (0..60).map(|i| ChatMessage::user(format!("m{i}"))).collect();
        let trimmed = trim_history(&messages);
        assert_eq!(trimmed.len(), MAX_CONVERSATION_MESSAGES);
        assert_eq!(trimmed[0].content, "m10");
        assert_eq!(trimmed.last().unwrap().content, "m59");

        let short = vec![ChatMessage::user("hi")];
        assert_eq!(trim_history(&short), short.as_slice());
    }

    #[test]
    fn test_near_limit() {
        assert!(!is_near_limit(40));
        assert!(is_near_limit(41));
        assert!(is_near_limit(50));
    }

    #[test]
    fn test_chat_request_validation() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"systemPrompt": "You are a learner", "messages": [{"role": "user", "content": "hi"}]}"#,
        )
        .unwrap();
        let gen = req.into_generation().unwrap();
        assert_eq!(gen.max_tokens, MAX_TOKENS_RESPONSE);
        assert_eq!(gen.messages, vec![ChatMessage::user("hi")]);

        let empty: ChatRequest = serde_json::from_str(r#"{"messages": []}"#).unwrap();
        assert!(matches!(empty.into_generation(), Err(PersonaError::InvalidRequest(_))));

        let no_history: ChatRequest =
            serde_json::from_str(r#"{"systemPrompt": "You are a learner", "messages": []}"#).unwrap();
        assert!(matches!(no_history.into_generation(), Err(PersonaError::InvalidRequest(_))));
    }

    #[test]
    fn test_turn_alternation() {
        assert_eq!(speaker_for_turn(1), SimulationRole::Tutor);
        assert_eq!(speaker_for_turn(2), SimulationRole::Learner);
        assert_eq!(speaker_for_turn(9), SimulationRole::Tutor);
        assert_eq!(speaker_for_turn(SIMULATION_TURN_COUNT), SimulationRole::Learner);
    }

    #[test]
    fn test_empty_history_gets_kickoff() {
        let msgs = perspective_messages(&[], SimulationRole::Tutor);
        assert_eq!(msgs, vec![ChatMessage::user(TUTOR_KICKOFF)]);
    }

    #[test]
    fn test_perspective_flips_roles() {
        let history = transcript(3);
        let tutor_view = perspective_messages(&history, SimulationRole::Tutor);
        let learner_view = perspective_messages(&history, SimulationRole::Learner);

        let roles = |v: &[ChatMessage]| v.iter().map(|m| m.role).collect::<Vec<_>>();
        assert_eq!(
            roles(&tutor_view),
            vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
        );
        assert_eq!(
            roles(&learner_view),
            vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]
        );
        assert_eq!(learner_view[1].content, "turn 2");
    }

    #[test]
    fn test_next_turn_picks_prompt_and_budget() {
        let first = prompts().next_turn(&[]).unwrap();
        assert_eq!(first.turn, 1);
        assert_eq!(first.speaker, SimulationRole::Tutor);
        assert_eq!(first.request.system, DEMO_TUTOR_PROMPT);
        assert_eq!(first.request.max_tokens, MAX_TOKENS_SIMULATION);

        let second = prompts().next_turn(&transcript(1)).unwrap();
        assert_eq!(second.speaker, SimulationRole::Learner);
        assert_eq!(second.request.system, "LEARNER");
        assert_eq!(second.request.messages, vec![ChatMessage::user("turn 1")]);
    }

    #[test]
    fn test_next_turn_bounds() {
        let full = transcript(SIMULATION_TURN_COUNT as usize);
        assert!(matches!(
            prompts().next_turn(&full),
            Err(PersonaError::InvalidRequest(_))
        ));

        let out_of_order = vec![
            SimulationMessage {
                role: SimulationRole::Learner,
                content: "a".into(),
            },
            SimulationMessage {
                role: SimulationRole::Learner,
                content: "b".into(),
            },
        ];
        let err = prompts().next_turn(&out_of_order).unwrap_err();
        assert!(matches!(err, PersonaError::InvalidRequest(_)));
        assert!(err.to_string().starts_with("history turn 1 "));

        let mut repeated = transcript(2);
        repeated[1].role = SimulationRole::Tutor;
        let err = prompts().next_turn(&repeated).unwrap_err();
        assert!(err.to_string().starts_with("history turn 2 "));

        let missing = AutoConversationRequest {
            learner_prompt: String::new(),
            tutor_prompt: "T".into(),
        };
        let err = missing.next_turn(&[]).unwrap_err();
        assert_eq!(err.to_string(), "learnerPrompt and tutorPrompt are required");
    }
}

//! Inbound commands to the monitor core.
//!
//! [`AppCommand`]s come from the configuration surface and the voice
//! toggle; recognized speech is first mapped to a [`CommandIntent`] by the
//! [`CommandRouter`].

use serde::Serialize;

/// Actuator intent derived from one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandIntent {
    IncreaseSpeed,
    DecreaseSpeed,
    Unknown,
}

/// Fixed voice vocabulary.  Matching is exact and case-sensitive.
const VOCABULARY: [(&str, CommandIntent); 2] = [
    ("increase fan speed", CommandIntent::IncreaseSpeed),
    ("lower fan speed", CommandIntent::DecreaseSpeed),
];

/// Maps utterances to intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRouter;

impl CommandRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route(&self, utterance: &str) -> CommandIntent {
        VOCABULARY
            .iter()
            .find(|(phrase, _)| *phrase == utterance)
            .map_or(CommandIntent::Unknown, |(_, intent)| *intent)
    }

    /// The phrases a recognition engine should be primed with.
    pub fn phrases(&self) -> impl Iterator<Item = &'static str> {
        VOCABULARY.iter().map(|(phrase, _)| *phrase)
    }
}

/// Commands that external adapters can send into the monitor core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Replace the alert thresholds from two raw text inputs.
    SetThresholds {
        warning_input: String,
        critical_input: String,
    },

    /// Start (`true`) or stop (`false`) the recognition source.
    SetListening(bool),
}

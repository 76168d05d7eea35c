//! Effects produced by state transitions

use crate::booking::InputError;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Print one of the session greetings, chosen at random
    Greet,

    /// Print an informational line
    Say { text: String },

    /// Print the question the next input line answers
    Prompt { text: String },

    /// Report a validation failure before the question is repeated
    Reject { error: InputError },

    /// Price the stay; answered with `Event::QuoteRequested`
    RequestQuote,
}

impl Effect {
    pub fn say(text: impl Into<String>) -> Self {
        Effect::Say { text: text.into() }
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Effect::Prompt { text: text.into() }
    }

    pub fn reject(error: InputError) -> Self {
        Effect::Reject { error }
    }

    #[allow(dead_code)] // Used by tests
    pub fn is_prompt(&self) -> bool {
        matches!(self, Effect::Prompt { .. })
    }
}

//! Events that drive the dialogue

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Conversation opened; greet the guest
    Start,

    /// One line typed by the guest, line terminator removed
    UserInput { text: String },

    /// Internal follow-up once all booking fields are collected
    QuoteRequested,
}

impl Event {
    pub fn user_input(text: impl Into<String>) -> Self {
        Event::UserInput { text: text.into() }
    }
}

//! Dialogue state types

use serde::{Deserialize, Serialize};

// ============================================================================
// Dialogue State
// ============================================================================

/// Where the conversation currently stands
///
/// Collected values live in `BookingDetails`; the only data a state carries
/// is what it needs to phrase its own question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogueState {
    /// Conversation not yet opened
    #[default]
    Start,

    /// Greeting shown, waiting for the guest's name
    AwaitingName,

    /// Waiting for the guest to say whether they want to book
    AwaitingConsent,

    AskRoomType,

    AskCheckIn,

    AskCheckOut,

    AskGuests,

    /// All fields collected; the stay is being priced
    Quoting,

    /// Quote shown, waiting for yes/no
    Confirm,

    /// Conversation over (terminal)
    Ended { reason: EndReason },
}

impl DialogueState {
    /// Check if this is a terminal state (no transition out)
    pub fn is_terminal(&self) -> bool {
        matches!(self, DialogueState::Ended { .. })
    }

    /// Check if the next event for this state is a line of guest input
    pub fn accepts_input(&self) -> bool {
        matches!(
            self,
            DialogueState::AwaitingName
                | DialogueState::AwaitingConsent
                | DialogueState::AskRoomType
                | DialogueState::AskCheckIn
                | DialogueState::AskCheckOut
                | DialogueState::AskGuests
                | DialogueState::Confirm
        )
    }

    /// Stable snake_case label for logs
    pub fn label(&self) -> &'static str {
        match self {
            DialogueState::Start => "start",
            DialogueState::AwaitingName => "awaiting_name",
            DialogueState::AwaitingConsent => "awaiting_consent",
            DialogueState::AskRoomType => "ask_room_type",
            DialogueState::AskCheckIn => "ask_check_in",
            DialogueState::AskCheckOut => "ask_check_out",
            DialogueState::AskGuests => "ask_guests",
            DialogueState::Quoting => "quoting",
            DialogueState::Confirm => "confirm",
            DialogueState::Ended { .. } => "ended",
        }
    }
}

/// How a conversation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EndReason {
    /// Guest left before any booking was made
    NoBooking { cause: NoBookingCause },
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoBookingCause {
    /// Guest typed one of the exit phrases
    ExitPhrase,
    /// Guest said they don't want to book
    Declined,
}

// ============================================================================
// Context
// ============================================================================

/// Where the exit-phrase check applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitPolicy {
    /// Only the "would you like to book" answer is checked
    #[default]
    GreetingOnly,
    /// Every answer is checked before it is validated
    AnyPrompt,
}

/// Context for a conversation (immutable configuration)
#[derive(Debug, Clone)]
pub struct DialogueContext {
    pub conversation_id: String,
    pub exit_policy: ExitPolicy,
    /// Prefix for prices in quotes
    pub currency_symbol: String,
}

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

impl DialogueContext {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            exit_policy: ExitPolicy::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn with_exit_policy(mut self, exit_policy: ExitPolicy) -> Self {
        self.exit_policy = exit_policy;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Whether an exit phrase typed in `state` ends the conversation
    pub fn checks_exit_in(&self, state: &DialogueState) -> bool {
        match self.exit_policy {
            ExitPolicy::GreetingOnly => matches!(state, DialogueState::AwaitingConsent),
            ExitPolicy::AnyPrompt => state.accepts_input(),
        }
    }
}

//! Pure state transition function

use super::state::NoBookingCause;
use super::{DialogueContext, DialogueState, Effect, EndReason, Event};
use crate::booking::validation::{
    is_affirmative, is_decline, is_exit_phrase, parse_check_out, parse_date, parse_guest_count,
};
use crate::booking::{BookingDetails, InputError, RoomType};
use crate::phrases;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: DialogueState,
    /// Booking record after this step
    pub booking: BookingDetails,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: DialogueState, booking: BookingDetails) -> Self {
        Self {
            new_state: state,
            booking,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
///
/// Guest mistakes never surface here; they are handled inside the
/// transition by re-asking. These indicate a driver that delivered the
/// wrong event for the current state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Conversation has already ended")]
    ConversationEnded,
    #[error("Booking is missing {0} in state {1}")]
    IncompleteBooking(&'static str, &'static str),
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same state, booking, context and event it always produces the
/// same result, with no I/O.
pub fn transition(
    state: &DialogueState,
    booking: &BookingDetails,
    context: &DialogueContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        (state, _) if state.is_terminal() => Err(TransitionError::ConversationEnded),

        // Start -> AwaitingName
        (DialogueState::Start, Event::Start) => Ok(TransitionResult::new(
            DialogueState::AwaitingName,
            booking.clone(),
        )
        .with_effect(Effect::Greet)
        .with_effect(Effect::prompt(phrases::NAME_PROMPT))),

        // Any input state + exit phrase -> Ended (where the policy checks it)
        (state, Event::UserInput { text })
            if context.checks_exit_in(state) && is_exit_phrase(&text) =>
        {
            Ok(end(
                booking.clone(),
                EndReason::NoBooking {
                    cause: NoBookingCause::ExitPhrase,
                },
            ))
        }

        (DialogueState::AwaitingName, Event::UserInput { text }) => Ok(on_name(booking, text)),
        (DialogueState::AwaitingConsent, Event::UserInput { text }) => {
            Ok(on_consent(booking, &text))
        }
        (DialogueState::AskRoomType, Event::UserInput { text }) => Ok(on_room_type(booking, &text)),
        (DialogueState::AskCheckIn, Event::UserInput { text }) => Ok(on_check_in(booking, &text)),
        (DialogueState::AskCheckOut, Event::UserInput { text }) => on_check_out(booking, &text),
        (DialogueState::AskGuests, Event::UserInput { text }) => Ok(on_guests(booking, &text)),
        (DialogueState::Quoting, Event::QuoteRequested) => on_quote(booking, context),
        (DialogueState::Confirm, Event::UserInput { text }) => Ok(on_confirm(booking, &text)),

        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "No transition from {state:?} with event {event:?}"
        ))),
    }
}

// ============================================================================
// Greeting
// ============================================================================

fn on_name(booking: &BookingDetails, name: String) -> TransitionResult {
    let prompt = phrases::consent_prompt(&name);
    let booking = BookingDetails {
        guest_name: Some(name),
        ..booking.clone()
    };
    TransitionResult::new(DialogueState::AwaitingConsent, booking)
        .with_effect(Effect::prompt(prompt))
}

fn on_consent(booking: &BookingDetails, reply: &str) -> TransitionResult {
    if is_decline(reply) {
        return end(
            booking.clone(),
            EndReason::NoBooking {
                cause: NoBookingCause::Declined,
            },
        );
    }
    TransitionResult::new(DialogueState::AskRoomType, booking.clone())
        .with_effect(Effect::prompt(phrases::room_type_prompt()))
}

// ============================================================================
// Field collection
// ============================================================================

fn on_room_type(booking: &BookingDetails, input: &str) -> TransitionResult {
    match input.parse::<RoomType>() {
        Ok(room_type) => {
            let booking = BookingDetails {
                room_type: Some(room_type),
                ..booking.clone()
            };
            TransitionResult::new(DialogueState::AskCheckIn, booking)
                .with_effect(Effect::prompt(phrases::CHECK_IN_PROMPT))
        }
        Err(error) => reask(
            DialogueState::AskRoomType,
            booking,
            error,
            phrases::room_type_prompt(),
        ),
    }
}

fn on_check_in(booking: &BookingDetails, input: &str) -> TransitionResult {
    match parse_date(input) {
        Ok(check_in) => {
            let booking = BookingDetails {
                check_in: Some(check_in),
                ..booking.clone()
            };
            TransitionResult::new(DialogueState::AskCheckOut, booking)
                .with_effect(Effect::prompt(phrases::CHECK_OUT_PROMPT))
        }
        Err(error) => reask(
            DialogueState::AskCheckIn,
            booking,
            error,
            phrases::CHECK_IN_PROMPT,
        ),
    }
}

fn on_check_out(
    booking: &BookingDetails,
    input: &str,
) -> Result<TransitionResult, TransitionError> {
    let check_in = booking
        .check_in
        .ok_or(TransitionError::IncompleteBooking("check-in date", "ask_check_out"))?;

    Ok(match parse_check_out(input, check_in) {
        Ok(check_out) => {
            let booking = BookingDetails {
                check_out: Some(check_out),
                ..booking.clone()
            };
            TransitionResult::new(DialogueState::AskGuests, booking)
                .with_effect(Effect::prompt(phrases::GUESTS_PROMPT))
        }
        Err(error) => reask(
            DialogueState::AskCheckOut,
            booking,
            error,
            phrases::CHECK_OUT_PROMPT,
        ),
    })
}

fn on_guests(booking: &BookingDetails, input: &str) -> TransitionResult {
    match parse_guest_count(input) {
        Ok(num_guests) => {
            let booking = BookingDetails {
                num_guests: Some(num_guests),
                ..booking.clone()
            };
            TransitionResult::new(DialogueState::Quoting, booking)
                .with_effect(Effect::RequestQuote)
        }
        Err(error) => reask(
            DialogueState::AskGuests,
            booking,
            error,
            phrases::GUESTS_PROMPT,
        ),
    }
}

// ============================================================================
// Quote and confirmation
// ============================================================================

fn on_quote(
    booking: &BookingDetails,
    context: &DialogueContext,
) -> Result<TransitionResult, TransitionError> {
    let quote = booking
        .quote()
        .ok_or(TransitionError::IncompleteBooking("room type or dates", "quoting"))?;

    Ok(match quote {
        Ok(quote) => TransitionResult::new(DialogueState::Confirm, booking.clone()).with_effects([
            Effect::say(phrases::quote_summary(&quote, &context.currency_symbol)),
            Effect::prompt(phrases::confirm_prompt(&quote, &context.currency_symbol)),
        ]),
        // Check-out validation already rules this out; if it happens anyway,
        // drop the bad date and ask for it again.
        Err(error) => {
            let booking = BookingDetails {
                check_out: None,
                ..booking.clone()
            };
            reask(
                DialogueState::AskCheckOut,
                &booking,
                error,
                phrases::CHECK_OUT_PROMPT,
            )
        }
    })
}

fn on_confirm(booking: &BookingDetails, reply: &str) -> TransitionResult {
    let reason = if is_affirmative(reply) {
        EndReason::Confirmed
    } else {
        EndReason::Cancelled
    };
    end(booking.clone(), reason)
}

// Helper functions

fn reask(
    state: DialogueState,
    booking: &BookingDetails,
    error: InputError,
    prompt: impl Into<String>,
) -> TransitionResult {
    TransitionResult::new(state, booking.clone())
        .with_effect(Effect::reject(error))
        .with_effect(Effect::prompt(prompt))
}

fn end(booking: BookingDetails, reason: EndReason) -> TransitionResult {
    TransitionResult::new(DialogueState::Ended { reason }, booking)
        .with_effect(Effect::say(closing_line(reason)))
}

fn closing_line(reason: EndReason) -> &'static str {
    match reason {
        EndReason::NoBooking {
            cause: NoBookingCause::ExitPhrase,
        } => phrases::FAREWELL,
        EndReason::NoBooking {
            cause: NoBookingCause::Declined,
        } => phrases::DECLINED,
        EndReason::Confirmed => phrases::CONFIRMED,
        EndReason::Cancelled => phrases::CANCELLED,
    }
}

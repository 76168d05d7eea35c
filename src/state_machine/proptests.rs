//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::state::*;
use super::transition::*;
use super::*;
use crate::booking::validation::{DECLINE_PHRASES, EXIT_PHRASES};
use crate::booking::{BookingDetails, Quote, RoomType};
use chrono::NaiveDate;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context() -> DialogueContext {
    DialogueContext::new("test-conv")
}

/// One applied transition, as seen by a driver
struct Step {
    new_state: DialogueState,
    booking: BookingDetails,
    effects: Vec<Effect>,
}

/// Feed `inputs` through a fresh conversation the way the runtime does,
/// answering quote requests immediately. Stops at the terminal state.
fn drive(context: &DialogueContext, inputs: Vec<String>) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut state = DialogueState::Start;
    let mut booking = BookingDetails::default();

    let mut pending = vec![Event::Start];
    let mut inputs = inputs.into_iter();

    loop {
        let event = match pending.pop() {
            Some(event) => event,
            None if state.is_terminal() => break,
            None => match inputs.next() {
                Some(text) => Event::user_input(text),
                None => break,
            },
        };

        let result = transition(&state, &booking, context, event).expect("driver sent a valid event");
        if result.effects.contains(&Effect::RequestQuote) {
            pending.push(Event::QuoteRequested);
        }
        state = result.new_state.clone();
        booking = result.booking.clone();
        steps.push(Step {
            new_state: result.new_state,
            booking: result.booking,
            effects: result.effects,
        });
    }

    steps
}

fn prompt_count(effects: &[Effect]) -> usize {
    effects.iter().filter(|e| e.is_prompt()).count()
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_room_type() -> impl Strategy<Value = RoomType> {
    prop_oneof![
        Just(RoomType::Single),
        Just(RoomType::Double),
        Just(RoomType::Suite),
    ]
}

/// Room name with randomized letter case
fn arb_room_input() -> impl Strategy<Value = String> {
    (arb_room_type(), proptest::collection::vec(any::<bool>(), 6)).prop_map(|(room, upper)| {
        room.name()
            .chars()
            .zip(upper)
            .map(|(c, up)| {
                if up {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

fn arb_phrase(phrases: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::sample::select(phrases).prop_map(str::to_string)
}

/// Anything a guest might type at any prompt, biased toward values that
/// move the conversation forward
fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => arb_room_input(),
        3 => arb_date().prop_map(|d| d.format("%Y-%m-%d").to_string()),
        3 => (-3i64..12).prop_map(|n| n.to_string()),
        1 => arb_phrase(&EXIT_PHRASES),
        1 => arb_phrase(&DECLINE_PHRASES),
        1 => Just("yes".to_string()),
        2 => "[a-zA-Z0-9 -]{0,12}",
    ]
}

/// Input that can never name a catalog room
fn arb_non_room_input() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}".prop_filter("must not be a room", |s| s.parse::<RoomType>().is_err())
}

fn arb_input_state() -> impl Strategy<Value = DialogueState> {
    prop_oneof![
        Just(DialogueState::AwaitingName),
        Just(DialogueState::AwaitingConsent),
        Just(DialogueState::AskRoomType),
        Just(DialogueState::AskCheckIn),
        Just(DialogueState::AskCheckOut),
        Just(DialogueState::AskGuests),
        Just(DialogueState::Confirm),
    ]
}

// ============================================================================
// State Validity Checkers
// ============================================================================

fn booking_is_valid(booking: &BookingDetails) -> bool {
    match (booking.check_in, booking.check_out) {
        (Some(check_in), Some(check_out)) => check_out > check_in,
        (None, Some(_)) => false,
        _ => true,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Invariant 1: Booking stays valid through any conversation
    #[test]
    fn prop_booking_invariants_hold(inputs in proptest::collection::vec(arb_input(), 0..30)) {
        for step in drive(&test_context(), inputs) {
            prop_assert!(booking_is_valid(&step.booking), "Invalid booking: {:?}", step.booking);
        }
    }

    // Invariant 2: Input states ask exactly one question, Ended asks none
    #[test]
    fn prop_one_prompt_per_input_state(inputs in proptest::collection::vec(arb_input(), 0..30)) {
        for step in drive(&test_context(), inputs) {
            let expected = usize::from(step.new_state.accepts_input());
            prop_assert_eq!(
                prompt_count(&step.effects),
                expected,
                "Wrong prompt count entering {:?}: {:?}",
                step.new_state,
                step.effects
            );
        }
    }

    // Invariant 3: Booking fields are only ever added, never changed, once set
    #[test]
    fn prop_fields_are_write_once(inputs in proptest::collection::vec(arb_input(), 0..30)) {
        let steps = drive(&test_context(), inputs);
        for pair in steps.windows(2) {
            let (before, after) = (&pair[0].booking, &pair[1].booking);
            if before.room_type.is_some() {
                prop_assert_eq!(before.room_type, after.room_type);
            }
            if before.check_in.is_some() {
                prop_assert_eq!(before.check_in, after.check_in);
            }
            if before.num_guests.is_some() {
                prop_assert_eq!(before.num_guests, after.num_guests);
            }
        }
    }

    // Invariant 4: Exit phrase at the greeting ends with nothing booked
    #[test]
    fn prop_exit_at_greeting_books_nothing(name in "[a-zA-Z]{1,10}", phrase in arb_phrase(&EXIT_PHRASES), upper in any::<bool>()) {
        let phrase = if upper { phrase.to_uppercase() } else { phrase };
        let steps = drive(&test_context(), vec![name, phrase, "single".to_string()]);
        let last = steps.last().unwrap();

        prop_assert_eq!(steps.len(), 3, "Conversation should stop after the exit phrase");
        prop_assert!(
            matches!(
                last.new_state,
                DialogueState::Ended { reason: EndReason::NoBooking { cause: NoBookingCause::ExitPhrase } }
            ),
            "Expected an exit ending, got {:?}",
            last.new_state
        );
        prop_assert!(last.booking.is_untouched(), "Booking was touched: {:?}", last.booking);
    }

    // Invariant 5: Unknown room names never set the room type
    #[test]
    fn prop_unknown_room_reasks(text in arb_non_room_input()) {
        let result = transition(
            &DialogueState::AskRoomType,
            &BookingDetails::default(),
            &test_context(),
            Event::user_input(text),
        ).unwrap();

        prop_assert_eq!(result.new_state, DialogueState::AskRoomType);
        prop_assert!(result.booking.room_type.is_none());
    }

    // Invariant 6: A check-out on or before check-in is refused
    #[test]
    fn prop_unordered_check_out_reasks(check_in in arb_date(), back in 0i64..400) {
        let check_out = check_in - chrono::Duration::days(back);
        let booking = BookingDetails {
            room_type: Some(RoomType::Single),
            check_in: Some(check_in),
            ..BookingDetails::default()
        };
        let result = transition(
            &DialogueState::AskCheckOut,
            &booking,
            &test_context(),
            Event::user_input(check_out.format("%Y-%m-%d").to_string()),
        ).unwrap();

        prop_assert_eq!(result.new_state, DialogueState::AskCheckOut);
        prop_assert!(result.booking.check_out.is_none());
    }

    // Invariant 7: Non-positive or non-numeric guest counts are refused
    #[test]
    fn prop_bad_guest_count_reasks(
        text in prop_oneof![
            (i64::MIN..=0).prop_map(|n| n.to_string()),
            "[a-zA-Z ]{0,8}",
        ]
    ) {
        let result = transition(
            &DialogueState::AskGuests,
            &BookingDetails::default(),
            &test_context(),
            Event::user_input(text),
        ).unwrap();

        prop_assert_eq!(result.new_state, DialogueState::AskGuests);
        prop_assert!(result.booking.num_guests.is_none());
        prop_assert_eq!(prompt_count(&result.effects), 1);
    }

    // Invariant 8: With exit-anywhere enabled, every question honours exit phrases
    #[test]
    fn prop_exit_anywhere(state in arb_input_state(), phrase in arb_phrase(&EXIT_PHRASES)) {
        let context = test_context().with_exit_policy(ExitPolicy::AnyPrompt);
        let booking = BookingDetails {
            check_in: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..BookingDetails::default()
        };
        let result = transition(&state, &booking, &context, Event::user_input(phrase)).unwrap();

        prop_assert!(
            matches!(result.new_state, DialogueState::Ended { reason: EndReason::NoBooking { .. } }),
            "Exit phrase ignored in {:?}",
            state
        );
    }

    // Invariant 9: The quote is nights times the nightly rate
    #[test]
    fn prop_quote_total(room in arb_room_type(), check_in in arb_date(), nights in 1i64..60) {
        let check_out = check_in + chrono::Duration::days(nights);
        let quote = Quote::compute(room, check_in, check_out).unwrap();

        prop_assert_eq!(i64::from(quote.nights), nights);
        prop_assert_eq!(quote.total, u64::from(quote.nights) * u64::from(room.nightly_rate()));
    }
}

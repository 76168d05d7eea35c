//! Guest-facing text
//!
//! Every line the dialogue prints lives here so the state machine only
//! decides *which* line to show.

use crate::booking::{Quote, RoomType};
use rand::Rng;

const GREETINGS: [&str; 3] = [
    "Welcome to our hotel! How can I assist you with your booking today?",
    "Hello! Looking for a room? I can help you book one!",
    "Hi there! Want to make a reservation? I can help you with that!",
];

const NO_MATCH_REPLIES: [&str; 3] = [
    "I didn't quite understand that. Can you please clarify?",
    "Could you rephrase that for me? I'm not sure what you mean.",
    "Sorry, I didn't get that. Could you try again?",
];

pub const NAME_PROMPT: &str = "Can I have your name, please?";
pub const FAREWELL: &str = "Goodbye! Have a great day!";
pub const DECLINED: &str = "No problem! Have a great day!";
pub const CHECK_IN_PROMPT: &str =
    "When would you like to check in? (Please provide in format YYYY-MM-DD)";
pub const CHECK_OUT_PROMPT: &str =
    "When would you like to check out? (Please provide in format YYYY-MM-DD)";
pub const GUESTS_PROMPT: &str = "How many guests will be staying?";
pub const CONFIRMED: &str = "Your booking has been confirmed! Thank you for choosing us.";
pub const CANCELLED: &str = "Booking canceled. If you need help with anything else, feel free to ask.";

/// Pick one of the session greetings uniformly at random
pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS[rng.gen_range(0..GREETINGS.len())]
}

/// Reply for input that matches nothing the dialogue understands
///
/// Every current question validates its own input, so nothing in the
/// state machine reaches this yet. A free-text step would use it.
#[allow(dead_code)] // Used by tests
pub fn no_match_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    NO_MATCH_REPLIES[rng.gen_range(0..NO_MATCH_REPLIES.len())]
}

pub fn consent_prompt(guest_name: &str) -> String {
    format!("Hi {guest_name}, would you like to proceed with booking a room?")
}

pub fn room_type_prompt() -> String {
    let options = RoomType::ALL.map(RoomType::name).join(", ");
    format!(
        "Great! What type of room would you prefer?\n\
         Available options: {options}\n\
         Please enter the room type:"
    )
}

pub fn quote_summary(quote: &Quote, currency: &str) -> String {
    format!(
        "Your total cost for {} night(s) in a {} room will be {currency}{}.",
        quote.nights, quote.room_type, quote.total
    )
}

pub fn confirm_prompt(quote: &Quote, currency: &str) -> String {
    format!(
        "Do you want to confirm the booking for {currency}{}? (yes/no)",
        quote.total
    )
}

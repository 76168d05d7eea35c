//! Validation of raw guest input
//!
//! Each parser takes one line exactly as typed (line terminator already
//! removed) and either returns a typed value or an [`InputError`] whose
//! message is shown to the guest before the question is asked again.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;

/// Date format accepted for check-in and check-out
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Replies that end the conversation at the greeting
pub const EXIT_PHRASES: [&str; 6] = ["quit", "pause", "exit", "goodbye", "bye", "later"];

/// Replies that decline to book at the greeting
pub const DECLINE_PHRASES: [&str; 6] = ["no", "nope", "nah", "naw", "not interested", "sorry"];

/// A recoverable validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputError {
    #[error("Sorry, that room type is not available. Please choose from the available options.")]
    UnknownRoomType,
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    MalformedDate,
    #[error("Error: Check-out date must be after check-in date.")]
    CheckOutNotAfterCheckIn,
    #[error("Please enter a valid number of guests.")]
    InvalidGuestCount,
}

/// Parse a `YYYY-MM-DD` date
///
/// The year must be exactly four digits; month and day may drop their
/// leading zero. Signs and whitespace are refused before chrono sees the
/// input, since its `%Y` takes any width and skips leading spaces.
pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    if !has_date_shape(input) {
        return Err(InputError::MalformedDate);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| InputError::MalformedDate)
}

fn has_date_shape(input: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let mut parts = input.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            year.len() == 4
                && (1..=2).contains(&month.len())
                && (1..=2).contains(&day.len())
                && all_digits(year)
                && all_digits(month)
                && all_digits(day)
        }
        _ => false,
    }
}

/// Parse a check-out date that must fall strictly after `check_in`
pub fn parse_check_out(input: &str, check_in: NaiveDate) -> Result<NaiveDate, InputError> {
    let check_out = parse_date(input)?;
    if check_out <= check_in {
        return Err(InputError::CheckOutNotAfterCheckIn);
    }
    Ok(check_out)
}

/// Parse a guest count; surrounding whitespace is tolerated, zero and
/// negative counts are not
pub fn parse_guest_count(input: &str) -> Result<NonZeroU32, InputError> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| u32::try_from(n).ok())
        .and_then(NonZeroU32::new)
        .ok_or(InputError::InvalidGuestCount)
}

pub fn is_exit_phrase(input: &str) -> bool {
    matches_phrase(input, &EXIT_PHRASES)
}

pub fn is_decline(input: &str) -> bool {
    matches_phrase(input, &DECLINE_PHRASES)
}

/// Only an exact, case-insensitive "yes" confirms
pub fn is_affirmative(input: &str) -> bool {
    input.to_lowercase() == "yes"
}

fn matches_phrase(input: &str, phrases: &[&str]) -> bool {
    let lowered = input.to_lowercase();
    phrases.iter().any(|phrase| *phrase == lowered)
}

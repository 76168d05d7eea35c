//! Room catalog and stay pricing

use super::InputError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bookable room types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    /// Every room type, in the order they are offered to the guest
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Suite];

    /// Nightly price in whole currency units
    pub const fn nightly_rate(self) -> u32 {
        match self {
            RoomType::Single => 3500,
            RoomType::Double => 5500,
            RoomType::Suite => 10_000,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoomType {
    type Err = InputError;

    /// Matches the capitalized form of the input (first letter upper case,
    /// the rest lower case) against the catalog names. No trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = capitalize(s);
        RoomType::ALL
            .into_iter()
            .find(|room| room.name() == normalized)
            .ok_or(InputError::UnknownRoomType)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Price for a stay, derived from room type and dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub room_type: RoomType,
    pub nights: u32,
    pub nightly_rate: u32,
    pub total: u64,
}

impl Quote {
    /// Price the stay between `check_in` and `check_out`
    ///
    /// Fails if the stay is not at least one night long.
    pub fn compute(
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, InputError> {
        let days = (check_out - check_in).num_days();
        let nights = u32::try_from(days)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(InputError::CheckOutNotAfterCheckIn)?;
        let nightly_rate = room_type.nightly_rate();

        Ok(Self {
            room_type,
            nights,
            nightly_rate,
            total: u64::from(nights) * u64::from(nightly_rate),
        })
    }
}

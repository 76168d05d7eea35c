//! Booking domain: room catalog, quoting, and input validation
//!
//! Everything here is pure and independent of the dialogue state machine.

mod catalog;
pub mod validation;

pub use catalog::{Quote, RoomType};
pub use validation::InputError;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Booking parameters collected over one conversation
///
/// Fields are filled in one at a time as each dialogue step validates its
/// input. The record is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub guest_name: Option<String>,
    pub room_type: Option<RoomType>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub num_guests: Option<NonZeroU32>,
}

impl BookingDetails {
    /// True once every field needed for a quote has been collected
    pub fn is_complete(&self) -> bool {
        self.room_type.is_some()
            && self.check_in.is_some()
            && self.check_out.is_some()
            && self.num_guests.is_some()
    }

    /// True if no booking field has been recorded yet (the guest name
    /// does not count)
    #[allow(dead_code)] // Used by tests
    pub fn is_untouched(&self) -> bool {
        self.room_type.is_none()
            && self.check_in.is_none()
            && self.check_out.is_none()
            && self.num_guests.is_none()
    }

    /// Quote the stay from the collected fields
    ///
    /// Returns `None` while the room type or either date is still missing.
    pub fn quote(&self) -> Option<Result<Quote, InputError>> {
        let room_type = self.room_type?;
        let check_in = self.check_in?;
        let check_out = self.check_out?;
        Some(Quote::compute(room_type, check_in, check_out))
    }
}

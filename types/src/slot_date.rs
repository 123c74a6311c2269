//! Canonical exam slot date — an hour-resolution UTC instant.

use chrono::{DateTime, LocalResult, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The canonical instant identifying one exam sitting.
///
/// Built from a `(year, month0, day, hour)` tuple, truncated to the hour and
/// normalized to UTC. Two slots are the same exam iff their canonical
/// instants are equal.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SlotDate(DateTime<Utc>);

/// A `(year, month0, day, hour)` tuple that does not name a real calendar hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid exam date: year {year}, month {month0}, day {day}, hour {hour}")]
pub struct InvalidSlotDate {
    pub year: i32,
    /// 0-based month as supplied by the caller.
    pub month0: u32,
    pub day: u32,
    pub hour: u32,
}

impl SlotDate {
    /// Build the canonical date from calendar components.
    ///
    /// `month0` is 0-based (January = 0), the convention every existing
    /// caller uses. Components that do not name a real calendar hour are
    /// rejected; nothing rolls over into the next month or day.
    pub fn from_parts(
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
    ) -> Result<Self, InvalidSlotDate> {
        let invalid = InvalidSlotDate {
            year,
            month0,
            day,
            hour,
        };
        let month = month0.checked_add(1).ok_or(invalid)?;
        match Utc.with_ymd_and_hms(year, month, day, hour, 0, 0) {
            LocalResult::Single(instant) => Ok(Self(instant)),
            _ => Err(invalid),
        }
    }

    /// The underlying UTC instant.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for SlotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_is_zero_based() {
        // month0 = 4 is May; May has 31 days.
        let date = SlotDate::from_parts(2020, 4, 31, 10).unwrap();
        assert_eq!(date.to_string(), "2020-05-31T10:00:00.000Z");
    }

    #[test]
    fn same_components_yield_equal_instants() {
        let a = SlotDate::from_parts(2020, 5, 1, 10).unwrap();
        let b = SlotDate::from_parts(2020, 5, 1, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_hours_are_different_slots() {
        let a = SlotDate::from_parts(2020, 4, 31, 10).unwrap();
        let b = SlotDate::from_parts(2020, 4, 31, 11).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        // month0 = 1 is February; there is no February 30th.
        assert!(SlotDate::from_parts(2021, 1, 30, 10).is_err());
        assert!(SlotDate::from_parts(2021, 12, 1, 10).is_err());
        assert!(SlotDate::from_parts(2021, 0, 1, 24).is_err());
        assert!(SlotDate::from_parts(2021, 0, 0, 10).is_err());
    }

    #[test]
    fn leap_day_is_valid() {
        assert!(SlotDate::from_parts(2020, 1, 29, 8).is_ok());
        assert!(SlotDate::from_parts(2021, 1, 29, 8).is_err());
    }

    #[test]
    fn parses_stored_wire_format() {
        // Existing ledger documents carry millisecond-precision ISO strings.
        let date: SlotDate = serde_json::from_str("\"2020-05-31T10:00:00.000Z\"").unwrap();
        assert_eq!(date, SlotDate::from_parts(2020, 4, 31, 10).unwrap());
    }

    #[test]
    fn serde_round_trip() {
        let date = SlotDate::from_parts(2024, 0, 15, 9).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        let back: SlotDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, back);
    }
}

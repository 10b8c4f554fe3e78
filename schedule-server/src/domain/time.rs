//! Clock time handling for departure slots.
//!
//! Demand files and schedules carry times as "HH:MM" strings on a single
//! service day. This module provides a value type for those times with
//! arithmetic that wraps around midnight, so a departure late in the
//! evening plus a trip duration lands early the next morning.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes in one service day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute resolution.
///
/// Values are immutable; every operation returns a new `ClockTime`.
/// Ordering follows the minute of the day, which matches lexicographic
/// order of the zero-padded "HH:MM" rendering.
///
/// # Examples
///
/// ```
/// use schedule_server::domain::ClockTime;
///
/// let time = ClockTime::parse("23:50").unwrap();
/// assert_eq!(time.add_minutes(90).to_string(), "01:20");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    time: NaiveTime,
}

impl ClockTime {
    /// Midnight, "00:00".
    pub const MIDNIGHT: Self = Self {
        time: NaiveTime::MIN,
    };

    /// Create a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;
        Ok(Self { time })
    }

    /// Create a time from an offset in minutes from midnight.
    ///
    /// Offsets outside a single day wrap, in either direction.
    pub fn from_minutes(minutes: i64) -> Self {
        Self::MIDNIGHT.add_minutes(minutes)
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// Exactly two colon-separated numeric fields are required. Single-digit
    /// fields are accepted ("8:05"), out-of-range values are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse("00:00").is_ok());
    /// assert!(ClockTime::parse("8:05").is_ok());
    ///
    /// assert!(ClockTime::parse("0800").is_err());
    /// assert!(ClockTime::parse("08:00:00").is_err());
    /// assert!(ClockTime::parse("25:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let mut fields = s.trim().split(':');
        let (Some(hour), Some(minute), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(TimeError::new("expected HH:MM format"));
        };

        let hour = parse_field(hour).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_field(minute).ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Minutes elapsed since midnight (0-1439).
    pub fn minute_of_day(&self) -> u32 {
        self.time.num_seconds_from_midnight() / 60
    }

    /// Add a (possibly negative) number of minutes, wrapping around midnight.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.add(Duration::minutes(minutes))
    }

    /// Add a duration, wrapping around midnight.
    pub fn add(&self, duration: Duration) -> Self {
        let (time, _) = self.time.overflowing_add_signed(duration);
        Self { time }
    }

    /// Absolute difference in minutes between two times of the same day.
    ///
    /// Midnight is not treated as adjacent: 23:55 and 00:05 are 1430
    /// minutes apart, not 10.
    pub fn minutes_difference(&self, other: Self) -> u32 {
        self.minute_of_day().abs_diff(other.minute_of_day())
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a one- or two-digit ASCII field.
fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let time = t("00:00");
        assert_eq!(time.hour(), 0);
        assert_eq!(time.minute(), 0);

        let time = t("23:59");
        assert_eq!(time.hour(), 23);
        assert_eq!(time.minute(), 59);

        let time = t("7:5");
        assert_eq!(time.to_string(), "07:05");
    }

    #[test]
    fn parse_invalid_format() {
        assert!(ClockTime::parse("").is_err());
        assert!(ClockTime::parse("0800").is_err());
        assert!(ClockTime::parse("08:").is_err());
        assert!(ClockTime::parse(":30").is_err());
        assert!(ClockTime::parse("08:00:00").is_err());
        assert!(ClockTime::parse("ab:cd").is_err());
        assert!(ClockTime::parse("-1:30").is_err());
        assert!(ClockTime::parse("008:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert_eq!(
            ClockTime::parse("24:00").unwrap_err().to_string(),
            "invalid time: hour must be 0-23"
        );
        assert_eq!(
            ClockTime::parse("12:60").unwrap_err().to_string(),
            "invalid time: minute must be 0-59"
        );
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(t(" 08:15 "), t("08:15"));
    }

    #[test]
    fn display_format() {
        assert_eq!(t("06:00").to_string(), "06:00");
        assert_eq!(ClockTime::new(9, 5).unwrap().to_string(), "09:05");
        assert_eq!(format!("{:?}", t("14:30")), "ClockTime(14:30)");
    }

    #[test]
    fn ordering_matches_label_order() {
        assert!(t("06:00") < t("06:30"));
        assert!(t("09:59") < t("10:00"));
        assert!(t("23:59") > t("00:00"));
    }

    #[test]
    fn add_minutes_same_day() {
        assert_eq!(t("08:00").add_minutes(90), t("09:30"));
        assert_eq!(t("08:00").add_minutes(0), t("08:00"));
    }

    #[test]
    fn add_minutes_crosses_midnight() {
        assert_eq!(t("23:50").add_minutes(90), t("01:20"));
        assert_eq!(t("00:00").add_minutes(MINUTES_PER_DAY), t("00:00"));
    }

    #[test]
    fn add_negative_minutes_wraps_backwards() {
        assert_eq!(t("00:10").add_minutes(-20), t("23:50"));
        assert_eq!(t("12:00").add_minutes(-3 * MINUTES_PER_DAY - 30), t("11:30"));
    }

    #[test]
    fn from_minutes_wraps() {
        assert_eq!(ClockTime::from_minutes(6 * 60 + 30), t("06:30"));
        assert_eq!(ClockTime::from_minutes(MINUTES_PER_DAY + 15), t("00:15"));
        assert_eq!(ClockTime::from_minutes(-15), t("23:45"));
    }

    #[test]
    fn difference_ignores_day_wrap() {
        assert_eq!(t("08:00").minutes_difference(t("08:15")), 15);
        assert_eq!(t("08:15").minutes_difference(t("08:00")), 15);
        assert_eq!(t("23:55").minutes_difference(t("00:05")), 1430);
    }

    #[test]
    fn serde_as_label() {
        let json = serde_json::to_string(&t("07:45")).unwrap();
        assert_eq!(json, "\"07:45\"");

        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t("07:45"));

        assert!(serde_json::from_str::<ClockTime>("\"7h45\"").is_err());
    }
}

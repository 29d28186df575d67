//! Canonical local-calendar-day keys.
//!
//! Every "same day" decision in the library goes through [`DateKey`] so
//! that day comparisons are never done on raw timestamps. A key is the
//! local year/month/day of an instant, rendered `YYYY-MM-DD`.

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A single calendar day in the viewer's local timezone.
///
/// Two instants produce the same `DateKey` iff they fall on the same
/// local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Key for the local calendar day containing `ts`.
    ///
    /// The date is taken in the timezone of the instant itself, so a
    /// `DateTime<Local>` yields the viewer's wall-calendar day.
    pub fn from_datetime<Tz: TimeZone>(ts: &DateTime<Tz>) -> Self {
        Self(ts.date_naive())
    }

    /// Construct from calendar fields. Returns `None` for an invalid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The day immediately before this one.
    pub fn pred(&self) -> Self {
        self.minus_days(1)
    }

    /// This day minus `n` calendar days.
    pub fn minus_days(&self, n: u64) -> Self {
        // NaiveDate covers +/- ~262000 years; underflow is unreachable
        // for any wall-clock input, so saturate rather than panic.
        Self(self.0.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN))
    }

    /// Whole calendar days from `start` to `end`, clamped to zero when
    /// `end` precedes `start`.
    pub fn days_between(start: DateKey, end: DateKey) -> u32 {
        (end.0 - start.0).num_days().max(0) as u32
    }

    /// Short weekday label ("Mon", "Tue", ...) for display.
    pub fn weekday_label(&self) -> String {
        self.0.format("%a").to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::MalformedDateKey {
                input: s.to_string(),
            })
    }
}

impl TryFrom<String> for DateKey {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

/// The single external time source (see also [`SystemClock`]).
///
/// Core operations take `today`/`now` as parameters; callers obtain
/// them from a `Clock` so tests can pin time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> DateKey {
        DateKey::from_datetime(&self.now())
    }
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};
    use proptest::prelude::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn formats_zero_padded() {
        let k = DateKey::from_ymd(2024, 3, 7).unwrap();
        assert_eq!(k.to_string(), "2024-03-07");
    }

    #[test]
    fn parses_round_trip() {
        let k = key("2024-01-31");
        assert_eq!(k.to_string(), "2024-01-31");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            "2024-13-01".parse::<DateKey>(),
            Err(ValidationError::MalformedDateKey { .. })
        ));
        assert!("not-a-date".parse::<DateKey>().is_err());
        assert!("2024/01/01".parse::<DateKey>().is_err());
    }

    #[test]
    fn pred_crosses_month_and_year() {
        assert_eq!(key("2024-03-01").pred(), key("2024-02-29"));
        assert_eq!(key("2024-01-01").pred(), key("2023-12-31"));
    }

    #[test]
    fn days_between_never_negative() {
        let a = key("2024-01-01");
        let b = key("2024-01-08");
        assert_eq!(DateKey::days_between(a, b), 7);
        assert_eq!(DateKey::days_between(b, a), 0);
        assert_eq!(DateKey::days_between(a, a), 0);
    }

    #[test]
    fn serde_uses_string_form() {
        let k = key("2024-06-09");
        let json = serde_json::to_string(&k).unwrap();
        assert_eq!(json, "\"2024-06-09\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, k);
    }

    proptest! {
        #[test]
        fn same_local_day_same_key(
            days in 0u32..20000,
            secs1 in 0u32..86400,
            secs2 in 0u32..86400,
            offset_hours in -12i32..=12,
        ) {
            let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
                + chrono::Days::new(days as u64);
            let tz = FixedOffset::east_opt(offset_hours * 3600).unwrap();
            let t1 = tz
                .from_local_datetime(&date.and_time(
                    NaiveTime::from_num_seconds_from_midnight_opt(secs1, 0).unwrap(),
                ))
                .unwrap();
            let t2 = tz
                .from_local_datetime(&date.and_time(
                    NaiveTime::from_num_seconds_from_midnight_opt(secs2, 0).unwrap(),
                ))
                .unwrap();
            prop_assert_eq!(DateKey::from_datetime(&t1), DateKey::from_datetime(&t2));
        }
    }
}

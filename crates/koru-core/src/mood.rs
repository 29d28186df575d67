//! Sparse, date-keyed mood log.
//!
//! Holds at most one entry per calendar day. Provides the trailing
//! trend window the dashboard renders and the consecutive-day streak
//! computation. Persistence is the caller's concern; operations here
//! only transform the in-memory log.

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::ValidationError;

/// Lowest accepted mood score.
pub const MOOD_MIN: u8 = 1;
/// Highest accepted mood score.
pub const MOOD_MAX: u8 = 5;

/// Days rendered in the dashboard trend.
pub const TREND_DAYS: usize = 7;

/// Default bound on the backward streak scan.
pub const DEFAULT_STREAK_LOOKBACK: u32 = 30;

/// Distinct dates retained in the log. The trend only needs the most
/// recent [`TREND_DAYS`], but the streak scan looks further back.
const RETAINED_DATES: usize = DEFAULT_STREAK_LOOKBACK as usize;

/// One recorded mood for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: DateKey,
    /// Mood score, 1 (very low) to 5 (great).
    pub mood: u8,
}

/// A point in the trailing trend window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: DateKey,
    /// Recorded mood for the day, or `None` when no entry exists.
    pub mood: Option<u8>,
    /// Short weekday label for display ("Mon", "Tue", ...).
    pub day_name: String,
    pub is_today: bool,
}

/// Recency-ordered mood entries, at most one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mood` for `date`.
    ///
    /// An existing entry for the same date is replaced in place (its
    /// position in the recency order is kept); a new date is prepended
    /// as most recent. Scores outside 1..=5 are rejected, never
    /// clamped.
    pub fn record(&mut self, date: DateKey, mood: u8) -> Result<(), ValidationError> {
        if !(MOOD_MIN..=MOOD_MAX).contains(&mood) {
            return Err(ValidationError::InvalidMoodValue { value: mood });
        }

        if let Some(existing) = self.entries.iter_mut().find(|e| e.date == date) {
            existing.mood = mood;
        } else {
            self.entries.insert(0, MoodEntry { date, mood });
            self.entries.truncate(RETAINED_DATES);
        }
        Ok(())
    }

    /// Mood recorded for `date`, if any.
    pub fn mood_on(&self, date: DateKey) -> Option<u8> {
        self.entries.iter().find(|e| e.date == date).map(|e| e.mood)
    }

    /// Exactly `days` points walking backward from `today`.
    ///
    /// Index 0 is always `today`; each step goes back one calendar day.
    /// Days without an entry carry `mood: None`.
    pub fn trailing_window(&self, today: DateKey, days: usize) -> Vec<TrendPoint> {
        (0..days)
            .map(|offset| {
                let date = today.minus_days(offset as u64);
                TrendPoint {
                    date,
                    mood: self.mood_on(date),
                    day_name: date.weekday_label(),
                    is_today: offset == 0,
                }
            })
            .collect()
    }

    /// The 7-day trend window the dashboard displays.
    pub fn trend(&self, today: DateKey) -> Vec<TrendPoint> {
        self.trailing_window(today, TREND_DAYS)
    }

    /// Consecutive days with an entry, counting backward from `today`,
    /// bounded by [`DEFAULT_STREAK_LOOKBACK`].
    ///
    /// Returns 0 when today itself has no entry.
    pub fn current_streak(&self, today: DateKey) -> u32 {
        self.current_streak_within(today, DEFAULT_STREAK_LOOKBACK)
    }

    /// Streak with an explicit lookback bound.
    pub fn current_streak_within(&self, today: DateKey, lookback_days: u32) -> u32 {
        let mut streak = 0;
        for offset in 0..lookback_days {
            let date = today.minus_days(offset as u64);
            if self.mood_on(date).is_some() {
                streak += 1;
            } else {
                break;
            }
        }
        streak
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Per-day lifestyle habit counters and the daily exercise goal.
//!
//! Counters reset lazily: whenever state is read for a calendar day
//! other than the one it was stored for, currents are zeroed and
//! targets carried over. No background timer is required; a caller may
//! re-read once a minute to refresh the display across midnight.

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;

/// A tracked lifestyle habit.
///
/// Typed rather than stringly-keyed so an unknown habit cannot reach
/// the tracker at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    /// Glasses of water.
    Water,
    /// Minutes of exercise.
    Exercise,
    /// Hours of sleep.
    Sleep,
}

impl HabitKind {
    pub fn label(&self) -> &'static str {
        match self {
            HabitKind::Water => "Water",
            HabitKind::Exercise => "Exercise",
            HabitKind::Sleep => "Sleep",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            HabitKind::Water => "glasses",
            HabitKind::Exercise => "minutes",
            HabitKind::Sleep => "hours",
        }
    }
}

/// Default daily targets: 8 glasses, 30 minutes, 8 hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitTargets {
    pub water: f64,
    pub exercise: f64,
    pub sleep: f64,
}

impl Default for HabitTargets {
    fn default() -> Self {
        Self {
            water: 8.0,
            exercise: 30.0,
            sleep: 8.0,
        }
    }
}

/// Progress toward a single habit's daily target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitCounter {
    pub current: f64,
    pub target: f64,
}

impl HabitCounter {
    fn fresh(target: f64) -> Self {
        Self {
            current: 0.0,
            target,
        }
    }

    /// Completion ratio clamped to 0..=1 for display bars.
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target).clamp(0.0, 1.0)
    }
}

/// One calendar day of habit counters.
///
/// Invariant: `date` equals today's key at read time; stale state is
/// replaced via [`for_today`](Self::for_today) before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHabitState {
    pub date: DateKey,
    pub water: HabitCounter,
    pub exercise: HabitCounter,
    pub sleep: HabitCounter,
}

impl DailyHabitState {
    pub fn fresh(today: DateKey, targets: &HabitTargets) -> Self {
        Self {
            date: today,
            water: HabitCounter::fresh(targets.water),
            exercise: HabitCounter::fresh(targets.exercise),
            sleep: HabitCounter::fresh(targets.sleep),
        }
    }

    /// State valid for `today`.
    ///
    /// Stored state from an earlier day is reset: currents zeroed,
    /// targets kept. Absent state gets `defaults`. The caller should
    /// persist the returned state immediately so the reset happens
    /// once per day, not on every read.
    pub fn for_today(
        stored: Option<DailyHabitState>,
        today: DateKey,
        defaults: &HabitTargets,
    ) -> DailyHabitState {
        match stored {
            Some(state) if state.date == today => state,
            Some(stale) => {
                tracing::debug!(
                    stale_date = %stale.date,
                    today = %today,
                    "habit counters reset for new day"
                );
                Self::fresh(
                    today,
                    &HabitTargets {
                        water: stale.water.target,
                        exercise: stale.exercise.target,
                        sleep: stale.sleep.target,
                    },
                )
            }
            None => Self::fresh(today, defaults),
        }
    }

    pub fn counter(&self, kind: HabitKind) -> &HabitCounter {
        match kind {
            HabitKind::Water => &self.water,
            HabitKind::Exercise => &self.exercise,
            HabitKind::Sleep => &self.sleep,
        }
    }

    fn counter_mut(&mut self, kind: HabitKind) -> &mut HabitCounter {
        match kind {
            HabitKind::Water => &mut self.water,
            HabitKind::Exercise => &mut self.exercise,
            HabitKind::Sleep => &mut self.sleep,
        }
    }

    /// Apply a user increment/decrement, saturating at zero.
    pub fn adjust(&mut self, kind: HabitKind, delta: f64) {
        let counter = self.counter_mut(kind);
        counter.current = (counter.current + delta).max(0.0);
    }

    /// Overwrite a counter's current value, saturating at zero.
    pub fn set_current(&mut self, kind: HabitKind, value: f64) {
        self.counter_mut(kind).current = value.max(0.0);
    }

    /// Overwrite a habit's daily target.
    pub fn set_target(&mut self, kind: HabitKind, target: f64) {
        self.counter_mut(kind).target = target.max(0.0);
    }
}

/// Default number of wellness exercises per day.
pub const DEFAULT_EXERCISE_GOAL: u32 = 3;

/// Completed wellness exercises (breathing, meditation, journaling)
/// counted against a per-day goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoals {
    pub date: DateKey,
    pub exercises_completed: u32,
    pub goal: u32,
}

impl DailyGoals {
    pub fn fresh(today: DateKey, goal: u32) -> Self {
        Self {
            date: today,
            exercises_completed: 0,
            goal,
        }
    }

    /// Same lazy day-rollover rule as [`DailyHabitState::for_today`].
    pub fn for_today(stored: Option<DailyGoals>, today: DateKey, default_goal: u32) -> DailyGoals {
        match stored {
            Some(goals) if goals.date == today => goals,
            Some(stale) => Self::fresh(today, stale.goal),
            None => Self::fresh(today, default_goal),
        }
    }

    pub fn record_exercise(&mut self) {
        self.exercises_completed += 1;
    }

    pub fn is_met(&self) -> bool {
        self.exercises_completed >= self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn absent_state_uses_defaults() {
        let state = DailyHabitState::for_today(None, key("2024-01-02"), &HabitTargets::default());
        assert_eq!(state.date, key("2024-01-02"));
        assert_eq!(state.water.target, 8.0);
        assert_eq!(state.exercise.target, 30.0);
        assert_eq!(state.sleep.target, 8.0);
        assert_eq!(state.water.current, 0.0);
    }

    #[test]
    fn stale_state_resets_current_keeps_target() {
        let mut stored = DailyHabitState::fresh(key("2024-01-01"), &HabitTargets::default());
        stored.adjust(HabitKind::Water, 5.0);
        stored.set_target(HabitKind::Water, 10.0);

        let state =
            DailyHabitState::for_today(Some(stored), key("2024-01-02"), &HabitTargets::default());

        assert_eq!(state.date, key("2024-01-02"));
        assert_eq!(state.water.current, 0.0);
        assert_eq!(state.water.target, 10.0);
    }

    #[test]
    fn same_day_state_is_untouched() {
        let mut stored = DailyHabitState::fresh(key("2024-01-01"), &HabitTargets::default());
        stored.adjust(HabitKind::Exercise, 15.0);

        let state = DailyHabitState::for_today(
            Some(stored.clone()),
            key("2024-01-01"),
            &HabitTargets::default(),
        );
        assert_eq!(state, stored);
    }

    #[test]
    fn adjust_saturates_at_zero() {
        let mut state = DailyHabitState::fresh(key("2024-01-01"), &HabitTargets::default());
        state.adjust(HabitKind::Water, 2.0);
        state.adjust(HabitKind::Water, -5.0);
        assert_eq!(state.water.current, 0.0);
    }

    #[test]
    fn progress_clamps_to_one() {
        let mut state = DailyHabitState::fresh(key("2024-01-01"), &HabitTargets::default());
        state.set_current(HabitKind::Water, 12.0);
        assert_eq!(state.water.progress(), 1.0);

        state.set_target(HabitKind::Water, 0.0);
        assert_eq!(state.water.progress(), 0.0);
    }

    #[test]
    fn goals_roll_over_preserving_goal() {
        let mut goals = DailyGoals::fresh(key("2024-01-01"), 5);
        goals.record_exercise();
        goals.record_exercise();

        let today = DailyGoals::for_today(Some(goals), key("2024-01-02"), DEFAULT_EXERCISE_GOAL);
        assert_eq!(today.exercises_completed, 0);
        assert_eq!(today.goal, 5);
    }

    #[test]
    fn goals_met_at_goal_count() {
        let mut goals = DailyGoals::fresh(key("2024-01-01"), 2);
        assert!(!goals.is_met());
        goals.record_exercise();
        goals.record_exercise();
        assert!(goals.is_met());
    }
}

//! Shared dashboard read model.
//!
//! One snapshot assembled per read over the persisted stores; every
//! component publishes into this and the UI only consumes it.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::habits::{DailyGoals, DailyHabitState};
use crate::mood::TrendPoint;
use crate::storage::{Config, KvStore, StateRepository};

/// Time-of-day greeting shown at the top of the dashboard.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Condensed growth-plan status for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub day_number: u32,
    pub week_number: u32,
    pub theme: String,
    pub tasks_completed: u32,
    pub tasks_total: u32,
}

/// Everything the dashboard screen renders, in one read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub greeting: String,
    pub today: DateKey,
    pub mood_trend: Vec<TrendPoint>,
    pub todays_mood: Option<u8>,
    pub day_streak: u32,
    pub habits: DailyHabitState,
    pub goals: DailyGoals,
    pub growth: GrowthSummary,
}

impl DashboardSnapshot {
    /// Assemble the snapshot for `now` from persisted state.
    ///
    /// Day rollovers for habits, goals, and the growth plan happen here
    /// as a side effect of the `for_today` reads.
    pub fn assemble<S: KvStore>(
        repo: &StateRepository<'_, S>,
        config: &Config,
        now: DateTime<Local>,
    ) -> Self {
        let today = DateKey::from_datetime(&now);

        let log = repo.load_mood_log();
        let mood_trend = log.trend(today);
        let todays_mood = log.mood_on(today);
        let day_streak = log.current_streak_within(today, config.mood.streak_lookback_days);

        let habits = repo.habit_state_for_today(today, &config.habit_targets());
        let goals = repo.goals_for_today(today, config.habits.exercise_goal);

        let program = repo.growth_program_or_start(today);
        let progress = repo.day_progress_for_today(&program, today);

        DashboardSnapshot {
            greeting: greeting(now.hour()).to_string(),
            today,
            mood_trend,
            todays_mood,
            day_streak,
            habits,
            goals,
            growth: GrowthSummary {
                day_number: progress.day_number,
                week_number: progress.week_number,
                theme: progress.theme().title.to_string(),
                tasks_completed: progress.tasks_completed_count,
                tasks_total: progress.tasks.len() as u32,
            },
        }
    }
}

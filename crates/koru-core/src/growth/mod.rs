//! Guided growth program: day numbering, weekly themes, and per-day
//! progress over the generated task list.
//!
//! The day number is never stored. It is recomputed from the program
//! start date on every read, so progress stays consistent when the
//! program resumes after a gap.

mod tasks;

pub use tasks::{
    breathing_minutes, generate_tasks, reading_minutes, walking_minutes, DailyTask, TaskCategory,
};

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;

/// Number of 7-day theme blocks; themes cycle past week 4.
pub const WEEK_THEME_COUNT: u32 = 4;

/// Display labeling for a 7-day block of the program.
/// Static display data, serialized for CLI output but never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekTheme {
    pub week: u32,
    pub title: &'static str,
    pub description: &'static str,
}

const WEEK_THEMES: [WeekTheme; WEEK_THEME_COUNT as usize] = [
    WeekTheme {
        week: 1,
        title: "Foundation Week",
        description: "Building basic daily habits",
    },
    WeekTheme {
        week: 2,
        title: "Movement Week",
        description: "Adding physical activity",
    },
    WeekTheme {
        week: 3,
        title: "Mindfulness Week",
        description: "Deepening awareness",
    },
    WeekTheme {
        week: 4,
        title: "Connection Week",
        description: "Building relationships",
    },
];

/// All four weekly themes, in program order.
pub fn week_themes() -> &'static [WeekTheme] {
    &WEEK_THEMES
}

/// 1-based week number for a day number: days 1-7 are week 1.
pub fn week_number(day_number: u32) -> u32 {
    day_number.max(1).div_ceil(7)
}

/// Theme for a day, cycling every [`WEEK_THEME_COUNT`] weeks.
pub fn theme_for_day(day_number: u32) -> WeekTheme {
    let index = (week_number(day_number) - 1) % WEEK_THEME_COUNT;
    WEEK_THEMES[index as usize]
}

/// Persistent program state: the start date plus the days the user has
/// fully completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthProgramState {
    pub start_date: DateKey,
    #[serde(default)]
    pub completed_days: Vec<DateKey>,
}

impl GrowthProgramState {
    /// Start a program today.
    pub fn started_on(start_date: DateKey) -> Self {
        Self {
            start_date,
            completed_days: Vec::new(),
        }
    }

    /// 1-based day number for `today`. Derived, never stored; a start
    /// date in the future counts as day 1.
    pub fn day_number(&self, today: DateKey) -> u32 {
        DateKey::days_between(self.start_date, today) + 1
    }

    /// Record `date` as fully completed, once.
    pub fn mark_day_completed(&mut self, date: DateKey) {
        if !self.completed_days.contains(&date) {
            self.completed_days.push(date);
        }
    }

    pub fn total_days_completed(&self) -> u32 {
        self.completed_days.len() as u32
    }

    /// Consecutive fully-completed days counting back from `today`.
    ///
    /// An in-progress `today` does not break the run: when today is not
    /// yet completed the count starts at yesterday.
    pub fn completion_streak(&self, today: DateKey) -> u32 {
        let mut cursor = if self.completed_days.contains(&today) {
            today
        } else {
            today.pred()
        };
        let mut streak = 0;
        while self.completed_days.contains(&cursor) {
            streak += 1;
            cursor = cursor.pred();
        }
        streak
    }
}

/// One day's progress through the program, persisted so completion
/// toggles survive reloads within the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProgress {
    pub date: DateKey,
    pub day_number: u32,
    pub week_number: u32,
    pub tasks: Vec<DailyTask>,
    pub completed: bool,
    pub tasks_completed_count: u32,
}

impl DayProgress {
    /// Progress valid for `today`.
    ///
    /// Stored progress for the same date is kept (completion toggles
    /// included); anything else is regenerated from the scheduler for
    /// today's day number.
    pub fn for_today(
        program: &GrowthProgramState,
        stored: Option<DayProgress>,
        today: DateKey,
    ) -> DayProgress {
        if let Some(progress) = stored {
            if progress.date == today {
                return progress;
            }
        }

        let day_number = program.day_number(today);
        let tasks = generate_tasks(day_number);
        DayProgress {
            date: today,
            day_number,
            week_number: week_number(day_number),
            tasks,
            completed: false,
            tasks_completed_count: 0,
        }
    }

    /// Flip a task's completed flag. Returns false when the id does not
    /// belong to today's plan.
    pub fn toggle_task(&mut self, task_id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        task.completed = !task.completed;
        self.recount();
        true
    }

    fn recount(&mut self) {
        self.tasks_completed_count = self.tasks.iter().filter(|t| t.completed).count() as u32;
        self.completed = !self.tasks.is_empty()
            && self.tasks_completed_count as usize == self.tasks.len();
    }

    pub fn theme(&self) -> WeekTheme {
        theme_for_day(self.day_number)
    }
}

//! Deterministic daily task generation for the 28-day guided program.
//!
//! `generate_tasks` is a pure function of the day number: the same day
//! always yields the same task list. Completion state lives on the
//! persisted per-day progress, never in the generator.

use serde::{Deserialize, Serialize};

/// Task grouping used for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Foundation,
    Wellness,
    Growth,
}

impl TaskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::Foundation => "Foundation",
            TaskCategory::Wellness => "Wellness",
            TaskCategory::Growth => "Growth",
        }
    }
}

/// One task in a day's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub completed: bool,
    pub category: TaskCategory,
}

impl DailyTask {
    fn new(
        id: String,
        title: String,
        description: &str,
        duration_minutes: u32,
        category: TaskCategory,
    ) -> Self {
        Self {
            id,
            title,
            description: description.to_string(),
            duration_minutes,
            completed: false,
            category,
        }
    }
}

/// Reading minutes for a given day: 5, stepping up 5 per elapsed week,
/// capped at 20.
pub fn reading_minutes(day_number: u32) -> u32 {
    (5 + day_number / 7 * 5).min(20)
}

/// Breathing minutes: 5, stepping up 5 every 10 days, capped at 15.
/// `day_number` must be >= 1.
pub fn breathing_minutes(day_number: u32) -> u32 {
    (5 + (day_number - 1) / 10 * 5).min(15)
}

/// Walking minutes: 10, stepping up 5 per week since unlock, capped
/// at 30. Only meaningful from the unlock day, `day_number` >= 8.
pub fn walking_minutes(day_number: u32) -> u32 {
    (10 + (day_number - 8) / 7 * 5).min(30)
}

/// Generate the task list for `day_number` (1-based).
///
/// Unlock thresholds: walking at day 8, gratitude at day 15, social
/// connection at day 22.
pub fn generate_tasks(day_number: u32) -> Vec<DailyTask> {
    let day_number = day_number.max(1);
    let mut tasks = vec![DailyTask::new(
        format!("day{day_number}-bed"),
        "Make your bed".to_string(),
        "Start your day with a small accomplishment",
        2,
        TaskCategory::Foundation,
    )];

    let reading = reading_minutes(day_number);
    tasks.push(DailyTask::new(
        format!("day{day_number}-read"),
        format!("Read for {reading} minutes"),
        "Choose any book or article that interests you",
        reading,
        TaskCategory::Growth,
    ));

    let breathing = breathing_minutes(day_number);
    tasks.push(DailyTask::new(
        format!("day{day_number}-breathe"),
        format!("{breathing}-minute breathing"),
        "Practice deep breathing to center yourself",
        breathing,
        TaskCategory::Wellness,
    ));

    if day_number >= 8 {
        let walk = walking_minutes(day_number);
        tasks.push(DailyTask::new(
            format!("day{day_number}-walk"),
            format!("{walk}-minute walk"),
            "Take a gentle walk outdoors or around your home",
            walk,
            TaskCategory::Wellness,
        ));
    }

    if day_number >= 15 {
        tasks.push(DailyTask::new(
            format!("day{day_number}-gratitude"),
            "Write 3 things you're grateful for".to_string(),
            "Reflect on positive aspects of your day",
            5,
            TaskCategory::Growth,
        ));
    }

    if day_number >= 22 {
        tasks.push(DailyTask::new(
            format!("day{day_number}-connect"),
            "Reach out to someone you care about".to_string(),
            "Send a message or call a friend or family member",
            10,
            TaskCategory::Growth,
        ));
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(tasks: &'a [DailyTask], suffix: &str) -> Option<&'a DailyTask> {
        tasks.iter().find(|t| t.id.ends_with(suffix))
    }

    #[test]
    fn day_one_has_exactly_three_tasks() {
        let tasks = generate_tasks(1);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].category, TaskCategory::Foundation);
        assert!(find(&tasks, "-read").is_some());
        assert!(find(&tasks, "-breathe").is_some());
        assert!(find(&tasks, "-walk").is_none());
        assert!(find(&tasks, "-gratitude").is_none());
        assert!(find(&tasks, "-connect").is_none());
    }

    #[test]
    fn day_one_durations() {
        let tasks = generate_tasks(1);
        assert_eq!(find(&tasks, "-read").unwrap().duration_minutes, 5);
        assert_eq!(find(&tasks, "-breathe").unwrap().duration_minutes, 5);
    }

    #[test]
    fn walking_unlocks_at_day_eight() {
        assert!(find(&generate_tasks(7), "-walk").is_none());
        let tasks = generate_tasks(8);
        let walk = find(&tasks, "-walk").unwrap();
        assert_eq!(walk.duration_minutes, 10);
        assert_eq!(walk.category, TaskCategory::Wellness);
    }

    #[test]
    fn day_fifteen_adds_gratitude_and_scales_walk() {
        let tasks = generate_tasks(15);
        assert_eq!(find(&tasks, "-walk").unwrap().duration_minutes, 15);
        assert!(find(&tasks, "-gratitude").is_some());
        assert!(find(&tasks, "-connect").is_none());
    }

    #[test]
    fn day_twenty_two_adds_connection() {
        let tasks = generate_tasks(22);
        assert!(find(&tasks, "-gratitude").is_some());
        let connect = find(&tasks, "-connect").unwrap();
        assert_eq!(connect.category, TaskCategory::Growth);
        assert_eq!(tasks.len(), 6);
    }

    #[test]
    fn durations_hit_their_caps() {
        assert_eq!(reading_minutes(200), 20);
        assert_eq!(breathing_minutes(200), 15);
        assert_eq!(walking_minutes(200), 30);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_tasks(12), generate_tasks(12));
    }

    #[test]
    fn task_ids_embed_day_number() {
        let tasks = generate_tasks(9);
        assert!(tasks.iter().all(|t| t.id.starts_with("day9-")));
    }

    #[test]
    fn tasks_start_uncompleted() {
        assert!(generate_tasks(22).iter().all(|t| !t.completed));
    }
}

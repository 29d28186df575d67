use clap::{Subcommand, ValueEnum};
use koru_core::{Clock, HabitKind, StateRepository, SystemClock};

use super::open_store;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HabitArg {
    Water,
    Exercise,
    Sleep,
}

impl From<HabitArg> for HabitKind {
    fn from(arg: HabitArg) -> Self {
        match arg {
            HabitArg::Water => HabitKind::Water,
            HabitArg::Exercise => HabitKind::Exercise,
            HabitArg::Sleep => HabitKind::Sleep,
        }
    }
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Today's habit counters
    Show,
    /// Add to a habit counter (negative delta subtracts)
    Add {
        habit: HabitArg,
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },
    /// Overwrite a habit's current value
    Set { habit: HabitArg, value: f64 },
    /// Change a habit's daily target
    Target { habit: HabitArg, target: f64 },
    /// Count one completed wellness exercise toward the daily goal
    Exercise,
    /// Today's exercise goal progress
    Goals,
}

pub fn run(action: HabitAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (db, user) = open_store(user)?;
    let repo = StateRepository::new(&db, user);
    let config = koru_core::Config::load_or_default();
    let today = SystemClock.today();

    match action {
        HabitAction::Show => {
            let state = repo.habit_state_for_today(today, &config.habit_targets());
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        HabitAction::Add { habit, delta } => {
            let mut state = repo.habit_state_for_today(today, &config.habit_targets());
            state.adjust(habit.into(), delta);
            repo.save_habit_state(&state);
            let counter = state.counter(habit.into());
            println!("{}: {} / {}", HabitKind::from(habit).label(), counter.current, counter.target);
        }
        HabitAction::Set { habit, value } => {
            let mut state = repo.habit_state_for_today(today, &config.habit_targets());
            state.set_current(habit.into(), value);
            repo.save_habit_state(&state);
            println!("ok");
        }
        HabitAction::Target { habit, target } => {
            let mut state = repo.habit_state_for_today(today, &config.habit_targets());
            state.set_target(habit.into(), target);
            repo.save_habit_state(&state);
            println!("ok");
        }
        HabitAction::Exercise => {
            let mut goals = repo.goals_for_today(today, config.habits.exercise_goal);
            goals.record_exercise();
            repo.save_goals(&goals);
            println!("{} / {} exercises today", goals.exercises_completed, goals.goal);
        }
        HabitAction::Goals => {
            let goals = repo.goals_for_today(today, config.habits.exercise_goal);
            println!("{}", serde_json::to_string_pretty(&goals)?);
        }
    }
    Ok(())
}

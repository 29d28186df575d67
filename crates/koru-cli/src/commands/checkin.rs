use clap::Subcommand;
use koru_core::{Clock, DateKey, StateRepository, SystemClock};
use serde::Serialize;

use super::open_store;

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Whether a check-in should be prompted this visit
    Status,
    /// Complete a check-in with a mood score (1-5)
    Record { mood: u8 },
    /// Dismiss the prompt without recording a mood
    Dismiss,
    /// Mark the one-time intake assessment done
    CompleteIntake,
    /// Reset the intake flag (testing/support)
    ResetIntake,
}

#[derive(Serialize)]
struct CheckinStatus {
    intake_completed: bool,
    should_prompt: bool,
}

pub fn run(action: CheckinAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (db, user) = open_store(user)?;
    let repo = StateRepository::new(&db, user);
    let config = koru_core::Config::load_or_default();
    let clock = SystemClock;
    let now = clock.now().with_timezone(&chrono::Utc);

    match action {
        CheckinAction::Status => {
            let state = repo.load_visit_state();
            let status = CheckinStatus {
                intake_completed: state.has_completed_initial(),
                should_prompt: state.should_prompt(now, config.cooldown()),
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        CheckinAction::Record { mood } => {
            let today = DateKey::from_datetime(&clock.now());
            let mut log = repo.load_mood_log();
            log.record(today, mood)?;
            repo.save_mood_log(&log);

            let mut state = repo.load_visit_state();
            state.mark_completed(now);
            repo.save_visit_state(&state);
            println!("checked in with mood {mood} for {today}");
        }
        CheckinAction::Dismiss => {
            let mut state = repo.load_visit_state();
            state.mark_completed(now);
            repo.save_visit_state(&state);
            println!("check-in dismissed");
        }
        CheckinAction::CompleteIntake => {
            let mut state = repo.load_visit_state();
            state.mark_initial_completed();
            repo.save_visit_state(&state);
            println!("intake assessment marked complete");
        }
        CheckinAction::ResetIntake => {
            let mut state = repo.load_visit_state();
            state.reset_initial();
            repo.save_visit_state(&state);
            println!("intake assessment reset");
        }
    }
    Ok(())
}

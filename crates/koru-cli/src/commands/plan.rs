use clap::Subcommand;
use koru_core::{growth, Clock, StateRepository, SystemClock};

use super::open_store;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Today's tasks and progress
    Today,
    /// Toggle a task's completed flag
    Toggle { task_id: String },
    /// The four weekly themes
    Themes,
    /// Program totals and completion streak
    Stats,
    /// Restart the program from today (progress history kept)
    Restart,
}

pub fn run(action: PlanAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (db, user) = open_store(user)?;
    let repo = StateRepository::new(&db, user);
    let today = SystemClock.today();

    match action {
        PlanAction::Today => {
            let program = repo.growth_program_or_start(today);
            let progress = repo.day_progress_for_today(&program, today);
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        PlanAction::Toggle { task_id } => {
            let mut program = repo.growth_program_or_start(today);
            let mut progress = repo.day_progress_for_today(&program, today);
            if !progress.toggle_task(&task_id) {
                eprintln!("unknown task id: {task_id}");
                std::process::exit(1);
            }
            repo.save_day_progress(&progress);
            if progress.completed {
                program.mark_day_completed(today);
                repo.save_growth_program(&program);
                println!("day {} complete!", progress.day_number);
            } else {
                println!(
                    "{} / {} tasks done",
                    progress.tasks_completed_count,
                    progress.tasks.len()
                );
            }
        }
        PlanAction::Themes => {
            println!("{}", serde_json::to_string_pretty(growth::week_themes())?);
        }
        PlanAction::Stats => {
            let program = repo.growth_program_or_start(today);
            let stats = serde_json::json!({
                "start_date": program.start_date,
                "day_number": program.day_number(today),
                "total_days_completed": program.total_days_completed(),
                "completion_streak": program.completion_streak(today),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        PlanAction::Restart => {
            let mut program = repo.growth_program_or_start(today);
            program.start_date = today;
            repo.save_growth_program(&program);
            let progress = koru_core::DayProgress::for_today(&program, None, today);
            repo.save_day_progress(&progress);
            println!("program restarted on {today}");
        }
    }
    Ok(())
}

use clap::Subcommand;
use koru_core::{Clock, StateRepository, SystemClock};

use super::open_store;

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record today's mood (1-5)
    Log {
        /// Mood score, 1 (very low) to 5 (great)
        mood: u8,
        /// Record for a specific day instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// 7-day trend window
    Trend,
    /// Current consecutive-day streak
    Streak,
}

pub fn run(action: MoodAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (db, user) = open_store(user)?;
    let repo = StateRepository::new(&db, user);
    let config = koru_core::Config::load_or_default();
    let today = SystemClock.today();

    match action {
        MoodAction::Log { mood, date } => {
            let date = match date {
                Some(raw) => raw.parse()?,
                None => today,
            };
            let mut log = repo.load_mood_log();
            log.record(date, mood)?;
            repo.save_mood_log(&log);
            println!("mood {mood} recorded for {date}");
        }
        MoodAction::Trend => {
            let log = repo.load_mood_log();
            let trend = log.trend(today);
            println!("{}", serde_json::to_string_pretty(&trend)?);
        }
        MoodAction::Streak => {
            let log = repo.load_mood_log();
            let streak = log.current_streak_within(today, config.mood.streak_lookback_days);
            println!("{streak}");
        }
    }
    Ok(())
}

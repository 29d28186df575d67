use koru_core::{Clock, DashboardSnapshot, StateRepository, SystemClock};

use super::open_store;

pub fn run(user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (db, user) = open_store(user)?;
    let repo = StateRepository::new(&db, user);
    let config = koru_core::Config::load_or_default();

    let snapshot = DashboardSnapshot::assemble(&repo, &config, SystemClock.now());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

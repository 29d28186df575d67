pub mod checkin;
pub mod config;
pub mod dashboard;
pub mod habit;
pub mod mood;
pub mod plan;
pub mod profile;
pub mod reset;

use koru_core::{Database, StateRepository};

/// Open the on-disk store and resolve the user id to operate on.
pub fn open_store(user: Option<String>) -> Result<(Database, String), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let user = user.unwrap_or_else(|| StateRepository::local_user_id(&db));
    Ok((db, user))
}

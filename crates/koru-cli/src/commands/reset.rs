use koru_core::StateRepository;

use super::open_store;

pub fn run(user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (db, user) = open_store(user)?;
    let repo = StateRepository::new(&db, user);
    repo.reset_all();
    println!("all state removed for user {}", repo.user_id());
    Ok(())
}

//! Stable per-user storage keys.
//!
//! Key names keep the `koru-` prefix so entities from different users
//! never collide in the shared kv namespace.

/// Key for the local user id itself (not user-scoped).
pub const LOCAL_USER_ID: &str = "koru-local-user-id";

pub fn mood_log(user_id: &str) -> String {
    format!("koru-mood-log-{user_id}")
}

pub fn visit_state(user_id: &str) -> String {
    format!("koru-visit-check-{user_id}")
}

pub fn habit_state(user_id: &str) -> String {
    format!("koru-habits-{user_id}")
}

pub fn daily_goals(user_id: &str) -> String {
    format!("koru-daily-goals-{user_id}")
}

pub fn growth_program(user_id: &str) -> String {
    format!("koru-growth-progress-{user_id}")
}

pub fn day_progress(user_id: &str) -> String {
    format!("koru-growth-day-{user_id}")
}

pub fn profile(user_id: &str) -> String {
    format!("koru-profile-{user_id}")
}

pub fn onboarding(user_id: &str) -> String {
    format!("koru-onboarding-done-{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_user_scoped() {
        assert_ne!(mood_log("a"), mood_log("b"));
        assert_eq!(mood_log("u1"), "koru-mood-log-u1");
    }
}

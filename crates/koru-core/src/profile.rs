//! Local user profile and onboarding state.
//!
//! Users are identified by a stable id generated once on this device
//! and persisted; the profile itself is optional until onboarding has
//! been completed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub sex: Sex,
    /// Weight in kilograms, optional.
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Generate a fresh local user id.
pub fn new_local_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// Onboarding flag living alongside the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingState {
    #[serde(default)]
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_user_ids_are_unique() {
        assert_ne!(new_local_user_id(), new_local_user_id());
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = UserProfile {
            name: "Ari".to_string(),
            age: 29,
            sex: Sex::PreferNotToSay,
            weight: None,
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn weight_defaults_to_absent() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Ari","age":29,"sex":"other"}"#).unwrap();
        assert_eq!(profile.weight, None);
    }
}

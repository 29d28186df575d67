//! Typed, versioned access to persisted state.
//!
//! This is the single persistence boundary: every entity is decoded
//! here, exactly once, with defaulting and version migration applied.
//! Consumers receive fully-formed structs and never see partial JSON.
//!
//! Failure policy follows the library contract: a missing or corrupt
//! blob is "absent" (warn and fall back to defaults), and a failed
//! write is logged and ignored because the in-memory result stays
//! authoritative for the session.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{keys, KvStore};
use crate::date_key::DateKey;
use crate::growth::{DayProgress, GrowthProgramState};
use crate::habits::{DailyGoals, DailyHabitState, HabitTargets};
use crate::mood::MoodLog;
use crate::profile::{new_local_user_id, OnboardingState, UserProfile};
use crate::visit::VisitCheckState;

/// Current envelope version. Bump when an entity's schema changes
/// incompatibly.
const ENVELOPE_VERSION: u32 = 1;

/// Versioned wrapper around every persisted entity.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    data: T,
}

/// Per-user typed store over any [`KvStore`].
pub struct StateRepository<'a, S: KvStore> {
    store: &'a S,
    user_id: String,
}

impl<'a, S: KvStore> StateRepository<'a, S> {
    pub fn new(store: &'a S, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The stable per-device user id, generated and persisted on first
    /// access.
    pub fn local_user_id(store: &S) -> String {
        match store.get(keys::LOCAL_USER_ID) {
            Ok(Some(id)) if !id.is_empty() => id,
            Ok(_) => {
                let id = new_local_user_id();
                if let Err(err) = store.set(keys::LOCAL_USER_ID, &id) {
                    tracing::warn!(%err, "failed to persist local user id");
                }
                id
            }
            Err(err) => {
                tracing::warn!(%err, "failed to read local user id, using ephemeral id");
                new_local_user_id()
            }
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key, %err, "read failed, treating state as absent");
                return None;
            }
        };

        if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(&raw) {
            return Some(envelope.data);
        }
        // Pre-envelope blobs were stored bare; accept them once and
        // they get re-wrapped on the next save.
        match serde_json::from_str::<T>(&raw) {
            Ok(data) => Some(data),
            Err(err) => {
                tracing::warn!(key, %err, "corrupt state blob, treating as absent");
                None
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, data: &T) {
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            data,
        };
        let raw = match serde_json::to_string(&envelope) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, %err, "failed to serialize state");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &raw) {
            tracing::warn!(key, %err, "write failed, in-memory state remains authoritative");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            tracing::warn!(key, %err, "remove failed");
        }
    }

    // Mood log

    pub fn load_mood_log(&self) -> MoodLog {
        self.load(&keys::mood_log(&self.user_id)).unwrap_or_default()
    }

    pub fn save_mood_log(&self, log: &MoodLog) {
        self.save(&keys::mood_log(&self.user_id), log);
    }

    // Visit gate

    pub fn load_visit_state(&self) -> VisitCheckState {
        self.load(&keys::visit_state(&self.user_id))
            .unwrap_or_else(|| VisitCheckState::new(self.user_id.clone()))
    }

    pub fn save_visit_state(&self, state: &VisitCheckState) {
        self.save(&keys::visit_state(&self.user_id), state);
    }

    // Habits and goals

    /// Habit state valid for `today`, persisted back when the stored
    /// blob was absent or stale so the reset happens once per day.
    pub fn habit_state_for_today(
        &self,
        today: DateKey,
        defaults: &HabitTargets,
    ) -> DailyHabitState {
        let stored: Option<DailyHabitState> = self.load(&keys::habit_state(&self.user_id));
        let was_current = stored.as_ref().is_some_and(|s| s.date == today);
        let state = DailyHabitState::for_today(stored, today, defaults);
        if !was_current {
            self.save_habit_state(&state);
        }
        state
    }

    pub fn save_habit_state(&self, state: &DailyHabitState) {
        self.save(&keys::habit_state(&self.user_id), state);
    }

    pub fn goals_for_today(&self, today: DateKey, default_goal: u32) -> DailyGoals {
        let stored: Option<DailyGoals> = self.load(&keys::daily_goals(&self.user_id));
        let was_current = stored.as_ref().is_some_and(|g| g.date == today);
        let goals = DailyGoals::for_today(stored, today, default_goal);
        if !was_current {
            self.save_goals(&goals);
        }
        goals
    }

    pub fn save_goals(&self, goals: &DailyGoals) {
        self.save(&keys::daily_goals(&self.user_id), goals);
    }

    // Growth program

    /// The growth program, started today if none exists yet.
    pub fn growth_program_or_start(&self, today: DateKey) -> GrowthProgramState {
        match self.load(&keys::growth_program(&self.user_id)) {
            Some(program) => program,
            None => {
                let program = GrowthProgramState::started_on(today);
                self.save_growth_program(&program);
                program
            }
        }
    }

    pub fn save_growth_program(&self, program: &GrowthProgramState) {
        self.save(&keys::growth_program(&self.user_id), program);
    }

    /// Today's plan progress, regenerated on day rollover and persisted
    /// so completion toggles survive reloads.
    pub fn day_progress_for_today(
        &self,
        program: &GrowthProgramState,
        today: DateKey,
    ) -> DayProgress {
        let stored: Option<DayProgress> = self.load(&keys::day_progress(&self.user_id));
        let was_current = stored.as_ref().is_some_and(|p| p.date == today);
        let progress = DayProgress::for_today(program, stored, today);
        if !was_current {
            self.save_day_progress(&progress);
        }
        progress
    }

    pub fn save_day_progress(&self, progress: &DayProgress) {
        self.save(&keys::day_progress(&self.user_id), progress);
    }

    // Profile

    pub fn load_profile(&self) -> Option<UserProfile> {
        self.load(&keys::profile(&self.user_id))
    }

    pub fn save_profile(&self, profile: &UserProfile) {
        self.save(&keys::profile(&self.user_id), profile);
    }

    pub fn onboarding_done(&self) -> bool {
        self.load::<OnboardingState>(&keys::onboarding(&self.user_id))
            .map(|s| s.done)
            .unwrap_or(false)
    }

    pub fn mark_onboarding_done(&self) {
        self.save(&keys::onboarding(&self.user_id), &OnboardingState { done: true });
    }

    /// Remove every entity for this user. Full reset only; individual
    /// mood entries are never deleted.
    pub fn reset_all(&self) {
        for key in [
            keys::mood_log(&self.user_id),
            keys::visit_state(&self.user_id),
            keys::habit_state(&self.user_id),
            keys::daily_goals(&self.user_id),
            keys::growth_program(&self.user_id),
            keys::day_progress(&self.user_id),
            keys::profile(&self.user_id),
            keys::onboarding(&self.user_id),
        ] {
            self.remove(&key);
        }
    }
}

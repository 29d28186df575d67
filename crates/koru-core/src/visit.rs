//! Mood check-in gating.
//!
//! Two deliberately independent policies: a one-time first-run gate for
//! the mandatory intake assessment, and a cooldown gate that limits the
//! recurring, dismissible check-in nudge to once per cooldown window no
//! matter how often the app is opened.
//!
//! The cooldown is the one place raw timestamps are compared, because
//! it is genuinely duration-based; all same-day logic elsewhere goes
//! through `DateKey`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default cooldown between check-in prompts.
pub const DEFAULT_COOLDOWN_MINUTES: i64 = 30;

/// Per-user check-in gate state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitCheckState {
    pub user_id: String,
    /// When a check-in was last shown or dismissed. Absent until the
    /// first prompt for this user.
    pub last_check: Option<DateTime<Utc>>,
    /// Whether the one-time intake assessment has been completed.
    pub initial_completed: bool,
}

impl VisitCheckState {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            last_check: None,
            initial_completed: false,
        }
    }

    /// True once the mandatory intake assessment has been done.
    /// Never reverts except via [`reset_initial`](Self::reset_initial).
    pub fn has_completed_initial(&self) -> bool {
        self.initial_completed
    }

    pub fn mark_initial_completed(&mut self) {
        self.initial_completed = true;
    }

    /// Explicit reset, for testing and support flows only.
    pub fn reset_initial(&mut self) {
        self.initial_completed = false;
    }

    /// Whether the recurring check-in nudge should be shown this visit.
    ///
    /// True on the first ever evaluation, and again once strictly more
    /// than `cooldown` has elapsed since the last prompt.
    pub fn should_prompt(&self, now: DateTime<Utc>, cooldown: Duration) -> bool {
        match self.last_check {
            None => true,
            Some(last) => now - last > cooldown,
        }
    }

    /// [`should_prompt`](Self::should_prompt) with the default
    /// 30-minute cooldown.
    pub fn should_prompt_default(&self, now: DateTime<Utc>) -> bool {
        self.should_prompt(now, Duration::minutes(DEFAULT_COOLDOWN_MINUTES))
    }

    /// Record that the check-in was shown (completed or dismissed).
    /// The only mutation of the cooldown state.
    pub fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.last_check = Some(now);
    }
}

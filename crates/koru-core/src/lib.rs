//! # Koru Core Library
//!
//! Core business logic for Koru, a mental-wellness companion. It
//! implements a CLI-first philosophy: all operations are available via
//! a standalone CLI binary, with any GUI being a thin layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Date keys**: every "same day" decision goes through a single
//!   local-calendar-day normalization
//! - **Mood log**: sparse date-keyed mood history with trend window
//!   and streak computation
//! - **Visit gate**: first-run intake gate plus a cooldown gate for
//!   the recurring check-in nudge
//! - **Habits**: per-day counters with lazy midnight reset
//! - **Growth plan**: deterministic daily task generation over a
//!   stored program start date
//! - **Storage**: a key-value collaborator (SQLite on disk, in-memory
//!   for tests) with a single typed persistence boundary
//!
//! ## Key Components
//!
//! - [`DateKey`]: canonical `YYYY-MM-DD` local-day identifier
//! - [`MoodLog`]: mood recording, trend, and streak
//! - [`StateRepository`]: versioned per-user state access
//! - [`DashboardSnapshot`]: the one read model the UI displays

pub mod dashboard;
pub mod date_key;
pub mod error;
pub mod growth;
pub mod habits;
pub mod mood;
pub mod profile;
pub mod storage;
pub mod visit;

pub use dashboard::{DashboardSnapshot, GrowthSummary};
pub use date_key::{Clock, DateKey, SystemClock};
pub use error::{ConfigError, CoreError, Result, StorageError, ValidationError};
pub use growth::{generate_tasks, DailyTask, DayProgress, GrowthProgramState, TaskCategory};
pub use habits::{DailyGoals, DailyHabitState, HabitKind, HabitTargets};
pub use mood::{MoodEntry, MoodLog, TrendPoint};
pub use profile::{Sex, UserProfile};
pub use storage::{Config, Database, KvStore, MemoryStore, MirroredStore, StateRepository};
pub use visit::VisitCheckState;

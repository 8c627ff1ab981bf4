//! Spaced repetition core shared by study frontends and evaluation tools.
//!
//! Provides:
//! - SM-2 review scheduling with configurable tuning
//! - Due-set selection of the next item to present
//! - Summary statistics over an item collection
//! - Shared types (ProgressRecord, Rating, Stats, etc.)
//!
//! Everything here is pure: no I/O, no persistence. Callers own the
//! progress map and are responsible for storing scheduled records.

pub mod clock;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod selection;
pub mod stats;
pub mod store;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SchedulerConfig;
pub use error::{ConfigError, Result, ScheduleError};
pub use scheduler::{ease_delta, is_due, quality_from_rating, ReviewScheduler};
pub use selection::{due_items_at, next_item_at, pick_random, DueSetSelector};
pub use stats::summarize_at;
pub use store::ProgressStore;
pub use types::{ProgressMap, ProgressRecord, Rating, Stats, StudyItem};

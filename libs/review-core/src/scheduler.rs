//! SM-2 review scheduling.
//!
//! Quality 0-2 resets the repetition streak; 3-5 grows the interval
//! 1 day, then 6 days, then by the ease factor. The ease factor is
//! adjusted on every review and never drops below the configured floor.

use crate::clock::{Clock, SystemClock};
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::types::{ProgressRecord, Rating};
use chrono::{DateTime, Duration, Utc};

/// Lowest quality counted as a successful recall.
const PASSING_QUALITY: i32 = 3;

/// Canonical SM-2 ease adjustment for a quality rating.
pub fn ease_delta(quality: i32) -> f64 {
    let miss = 5.0 - f64::from(quality);
    0.1 - miss * (0.08 + miss * 0.02)
}

/// Whether a record should be reviewed at `now`.
pub fn is_due(progress: &ProgressRecord, now: DateTime<Utc>) -> bool {
    progress.is_due(now)
}

/// Map a rating label to a quality. Unknown labels count as "good".
pub fn quality_from_rating(label: &str) -> i32 {
    Rating::from_label(label).unwrap_or_default().quality()
}

/// SM-2 scheduler with configurable tuning and an injectable clock.
#[derive(Debug, Clone)]
pub struct ReviewScheduler<C = SystemClock> {
    config: SchedulerConfig,
    clock: C,
}

impl Default for ReviewScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl ReviewScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ReviewScheduler<C> {
    pub fn with_clock(config: SchedulerConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Canonical record for an item that has never been reviewed.
    pub fn initialize_progress(&self, item_id: impl Into<String>) -> ProgressRecord {
        ProgressRecord {
            item_id: item_id.into(),
            interval: self.config.initial_interval,
            ease_factor: self.config.initial_ease_factor,
            repetitions: 0,
            quality: None,
            last_review_date: None,
            next_review_date: None,
            review_count: 0,
        }
    }

    /// Whether a record is due by this scheduler's clock.
    pub fn is_due(&self, progress: &ProgressRecord) -> bool {
        progress.is_due(self.clock.now())
    }

    /// Apply a review at the current clock time.
    ///
    /// Any quality is accepted; see [`Self::compute_review_checked`] for the
    /// validating variant.
    pub fn compute_review(&self, progress: &ProgressRecord, quality: i32) -> ProgressRecord {
        self.compute_review_at(progress, quality, self.clock.now())
    }

    /// Like [`Self::compute_review`], but rejects quality outside 0..=5.
    pub fn compute_review_checked(
        &self,
        progress: &ProgressRecord,
        quality: i32,
    ) -> Result<ProgressRecord> {
        if !(0..=5).contains(&quality) {
            return Err(ScheduleError::InvalidQuality { quality });
        }
        Ok(self.compute_review(progress, quality))
    }

    /// Apply a review at an explicit instant.
    pub fn compute_review_at(
        &self,
        progress: &ProgressRecord,
        quality: i32,
        now: DateTime<Utc>,
    ) -> ProgressRecord {
        // Must be read before the streak is touched.
        let is_new = progress.is_new();

        let ease_factor =
            (progress.ease_factor + ease_delta(quality)).max(self.config.min_ease_factor);

        let (repetitions, interval) = if quality < PASSING_QUALITY {
            (0, self.config.initial_interval)
        } else if is_new {
            (1, self.config.initial_interval)
        } else if progress.repetitions == 1 {
            (2, self.config.second_interval)
        } else {
            (
                progress.repetitions.saturating_add(1),
                grow_interval(progress.interval, ease_factor),
            )
        };
        let interval = interval.max(1);
        let next_review_date = due_after(now, interval);

        tracing::debug!(
            item_id = %progress.item_id,
            quality,
            interval,
            ease_factor,
            repetitions,
            "scheduled review"
        );

        ProgressRecord {
            item_id: progress.item_id.clone(),
            interval,
            ease_factor,
            repetitions,
            quality: Some(quality),
            last_review_date: Some(now),
            next_review_date: Some(next_review_date),
            review_count: progress.review_count.saturating_add(1),
        }
    }
}

fn grow_interval(interval: u32, ease_factor: f64) -> u32 {
    // Float-to-int `as` saturates, so huge products cap at u32::MAX days.
    (f64::from(interval) * ease_factor).round() as u32
}

/// `now + interval` days, pinned to the latest representable instant
/// when the date would overflow.
fn due_after(now: DateTime<Utc>, interval: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(interval))
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

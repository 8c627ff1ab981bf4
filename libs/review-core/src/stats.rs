//! Summary statistics over an item collection.

use crate::clock::Clock;
use crate::selection::{due_items_at, DueSetSelector};
use crate::types::{ProgressMap, Stats, StudyItem};
use chrono::{DateTime, Utc};

impl<C: Clock> DueSetSelector<C> {
    /// Summary counts with due items judged by this selector's clock.
    pub fn summarize<I: StudyItem>(&self, items: &[I], progress: &ProgressMap) -> Stats {
        summarize_at(items, progress, self.clock.now())
    }
}

/// Count items, recorded progress, due items and total reviews at `now`.
pub fn summarize_at<I: StudyItem>(
    items: &[I],
    progress: &ProgressMap,
    now: DateTime<Utc>,
) -> Stats {
    Stats {
        total_items: items.len(),
        items_with_progress: progress.len(),
        items_due: due_items_at(items, progress, now).len(),
        total_reviews: progress
            .values()
            .map(|record| u64::from(record.review_count))
            .sum(),
    }
}

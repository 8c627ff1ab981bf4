//! Due-set selection of the next item to study.

use crate::clock::{Clock, SystemClock};
use crate::types::{ProgressMap, StudyItem};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks what to study next, preferring due items over everything else.
#[derive(Debug, Clone, Default)]
pub struct DueSetSelector<C = SystemClock> {
    pub(crate) clock: C,
}

impl DueSetSelector {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> DueSetSelector<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Items due by this selector's clock, in input order.
    pub fn due_items<'a, I: StudyItem>(
        &self,
        items: &'a [I],
        progress: &ProgressMap,
    ) -> Vec<&'a I> {
        due_items_at(items, progress, self.clock.now())
    }

    /// Next item by this selector's clock.
    pub fn next_item<'a, I, R>(
        &self,
        items: &'a [I],
        progress: &ProgressMap,
        rng: &mut R,
    ) -> Option<&'a I>
    where
        I: StudyItem,
        R: Rng + ?Sized,
    {
        next_item_at(items, progress, self.clock.now(), rng)
    }
}

/// Uniformly random element, or `None` for an empty slice.
pub fn pick_random<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Random due item if any are due, otherwise a random item from the
/// whole collection so studying can continue ahead of schedule.
pub fn next_item_at<'a, I, R>(
    items: &'a [I],
    progress: &ProgressMap,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<&'a I>
where
    I: StudyItem,
    R: Rng + ?Sized,
{
    let due = due_items_at(items, progress, now);
    if due.is_empty() {
        tracing::trace!(total = items.len(), "nothing due, picking from all items");
        pick_random(items, rng)
    } else {
        tracing::trace!(due = due.len(), total = items.len(), "picking from due items");
        pick_random(&due, rng).copied()
    }
}

/// Items with no progress record, or whose record is due at `now`.
/// Stable: keeps the order of `items`.
pub fn due_items_at<'a, I: StudyItem>(
    items: &'a [I],
    progress: &ProgressMap,
    now: DateTime<Utc>,
) -> Vec<&'a I> {
    items
        .iter()
        .filter(|item| {
            progress
                .get(item.item_id())
                .map_or(true, |record| record.is_due(now))
        })
        .collect()
}

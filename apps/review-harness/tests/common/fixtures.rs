//! Script factories.

use chrono::{DateTime, Utc};
use review_core::{ProgressMap, ProgressRecord, SchedulerConfig};
use review_harness::session::Script;

use super::start;

/// Item ids `item-1` .. `item-n`.
pub fn item_ids(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("item-{}", i)).collect()
}

/// Script over `count` fresh items with the given rating labels.
pub fn script(count: usize, ratings: &[&str]) -> Script {
    Script {
        items: item_ids(count),
        progress: ProgressMap::new(),
        ratings: ratings.iter().map(|r| r.to_string()).collect(),
        start: Some(start()),
        config: SchedulerConfig::default(),
    }
}

/// Progress record already reviewed once and due at `next`.
pub fn reviewed_once(item_id: &str, next: DateTime<Utc>) -> ProgressRecord {
    ProgressRecord {
        item_id: item_id.to_string(),
        interval: 1,
        ease_factor: 2.5,
        repetitions: 1,
        quality: Some(3),
        last_review_date: Some(next - chrono::Duration::days(1)),
        next_review_date: Some(next),
        review_count: 1,
    }
}

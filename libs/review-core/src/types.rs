//! Core types for review scheduling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Progress records keyed by item id.
pub type ProgressMap = HashMap<String, ProgressRecord>;

/// Anything that can be studied. The core only needs its id.
pub trait StudyItem {
    fn item_id(&self) -> &str;
}

impl StudyItem for String {
    fn item_id(&self) -> &str {
        self
    }
}

impl<T: StudyItem + ?Sized> StudyItem for &T {
    fn item_id(&self) -> &str {
        (**self).item_id()
    }
}

/// Rating for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// SM-2 quality for this rating.
    pub fn quality(self) -> i32 {
        match self {
            Self::Again => 0,
            Self::Hard => 1,
            Self::Good => 3,
            Self::Easy => 5,
        }
    }

    /// Parse a caller-facing label.
    /// "forgot" and "partial" are accepted as aliases of Again and Hard.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "again" | "forgot" => Some(Self::Again),
            "hard" | "partial" => Some(Self::Hard),
            "good" => Some(Self::Good),
            "easy" => Some(Self::Easy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::Good
    }
}

/// Review progress for one item.
///
/// Records are values: scheduling always produces a fresh record and never
/// touches the caller's copy. Missing fields deserialize to the new-item
/// defaults, so a partially stored record behaves like a card that has not
/// been reviewed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    pub item_id: String,
    /// Days until the next review, always at least 1.
    pub interval: u32,
    pub ease_factor: f64,
    /// Consecutive successful reviews since the last failure.
    pub repetitions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
    /// Total reviews ever applied. Never reset.
    pub review_count: u32,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            item_id: String::new(),
            interval: 1,
            ease_factor: 2.5,
            repetitions: 0,
            quality: None,
            last_review_date: None,
            next_review_date: None,
            review_count: 0,
        }
    }
}

impl ProgressRecord {
    /// True until the first successful review after creation or a reset.
    pub fn is_new(&self) -> bool {
        self.repetitions == 0
    }

    /// Unscheduled records are always due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review_date {
            Some(next) => now >= next,
            None => true,
        }
    }
}

/// Summary counts over an item collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_items: usize,
    /// Number of progress records, whether or not their item is in the collection.
    pub items_with_progress: usize,
    pub items_due: usize,
    pub total_reviews: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_map_to_ratings() {
        assert_eq!(Rating::from_label("again"), Some(Rating::Again));
        assert_eq!(Rating::from_label("forgot"), Some(Rating::Again));
        assert_eq!(Rating::from_label("hard"), Some(Rating::Hard));
        assert_eq!(Rating::from_label("partial"), Some(Rating::Hard));
        assert_eq!(Rating::from_label("good"), Some(Rating::Good));
        assert_eq!(Rating::from_label("easy"), Some(Rating::Easy));
        assert_eq!(Rating::from_label("meh"), None);
    }

    #[test]
    fn rating_labels_round_trip() {
        for rating in [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy] {
            assert_eq!(Rating::from_label(rating.as_str()), Some(rating));
        }
        assert_eq!(Rating::default().as_str(), "good");
    }

    #[test]
    fn record_without_next_date_is_due() {
        let record = ProgressRecord::default();
        assert!(record.is_due(Utc::now()));
    }

    #[test]
    fn record_due_exactly_at_next_date() {
        let next = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = ProgressRecord {
            next_review_date: Some(next),
            ..Default::default()
        };
        assert!(record.is_due(next));
        assert!(!record.is_due(next - Duration::seconds(1)));
    }

    #[test]
    fn missing_fields_deserialize_as_new_item() {
        let record: ProgressRecord = serde_json::from_str(r#"{"item_id": "rust-1"}"#).unwrap();
        assert_eq!(
            record,
            ProgressRecord {
                item_id: "rust-1".to_string(),
                ..Default::default()
            }
        );
        assert!(record.is_new());
    }
}

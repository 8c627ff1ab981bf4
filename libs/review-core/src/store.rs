//! Persistence seam for progress records.
//!
//! The scheduler never reads or writes a store itself. Callers load a
//! record, schedule it, and save the result through this trait.

use crate::types::{ProgressMap, ProgressRecord};

/// Storage for progress records, keyed by item id.
pub trait ProgressStore {
    fn load(&self, item_id: &str) -> Option<ProgressRecord>;

    /// Replace the record stored under `record.item_id`.
    fn save(&mut self, record: ProgressRecord);

    /// All records, for selection and stats.
    fn snapshot(&self) -> ProgressMap;
}

impl ProgressStore for ProgressMap {
    fn load(&self, item_id: &str) -> Option<ProgressRecord> {
        self.get(item_id).cloned()
    }

    fn save(&mut self, record: ProgressRecord) {
        self.insert(record.item_id.clone(), record);
    }

    fn snapshot(&self) -> ProgressMap {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn save_then_load_replaces_record() {
        let mut store = ProgressMap::new();
        assert_eq!(store.load("a"), None);

        let first = ProgressRecord {
            item_id: "a".to_string(),
            review_count: 1,
            ..Default::default()
        };
        store.save(first);
        let second = ProgressRecord {
            item_id: "a".to_string(),
            review_count: 2,
            ..Default::default()
        };
        store.save(second.clone());

        assert_eq!(store.load("a"), Some(second));
        assert_eq!(store.snapshot().len(), 1);
    }
}

//! Scripted study sessions.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use review_core::{
    quality_from_rating, Clock, DueSetSelector, ProgressMap, ProgressRecord,
    ProgressStore, Rating, ReviewScheduler, SchedulerConfig, Stats,
};
use serde::{Deserialize, Serialize};

/// A session to replay: the items, any prior progress, and the ratings a
/// learner gives in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    pub items: Vec<String>,
    #[serde(default)]
    pub progress: ProgressMap,
    pub ratings: Vec<String>,
    /// Simulated start time. Defaults to now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub config: SchedulerConfig,
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse script {}", path.display()))
    }
}

/// One applied review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewLog {
    pub step: usize,
    pub item_id: String,
    pub quality: i32,
    pub interval: u32,
    pub ease_factor: f64,
    pub next_review_date: Option<DateTime<Utc>>,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub reviews: Vec<ReviewLog>,
    pub stats: Stats,
    pub progress: BTreeMap<String, ProgressRecord>,
}

/// Clock advanced by the replay loop.
#[derive(Debug)]
pub struct SimulatedClock {
    now: Cell<DateTime<Utc>>,
}

impl SimulatedClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward. Fails instead of wrapping past the
    /// calendar range.
    pub fn advance(&self, by: Duration) -> anyhow::Result<()> {
        let Some(next) = self.now.get().checked_add_signed(by) else {
            bail!("simulated clock overflowed advancing {} by {}", self.now.get(), by);
        };
        self.now.set(next);
        Ok(())
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Replay `script`, advancing the simulated clock by `step` after each
/// review. Stops early if there is nothing to study.
pub fn replay<R: Rng + ?Sized>(
    script: &Script,
    step: Duration,
    rng: &mut R,
) -> anyhow::Result<Report> {
    script
        .config
        .validate()
        .context("invalid scheduler config in script")?;

    let clock = SimulatedClock::new(script.start.unwrap_or_else(Utc::now));
    let scheduler = ReviewScheduler::with_clock(script.config.clone(), &clock);
    let selector = DueSetSelector::with_clock(&clock);

    // The map key wins over whatever item_id the stored record carries.
    let mut store: ProgressMap = script
        .progress
        .iter()
        .map(|(id, record)| {
            let record = ProgressRecord {
                item_id: id.clone(),
                ..record.clone()
            };
            (id.clone(), record)
        })
        .collect();

    let mut reviews = Vec::with_capacity(script.ratings.len());
    for (step_no, label) in script.ratings.iter().enumerate() {
        let snapshot = store.snapshot();
        let Some(item_id) = selector.next_item(&script.items, &snapshot, rng) else {
            tracing::warn!("No items to study, stopping after {} reviews", reviews.len());
            break;
        };

        if Rating::from_label(label).is_none() {
            tracing::warn!(
                label = %label,
                "Unknown rating label, treating as {}",
                Rating::default().as_str()
            );
        }
        let quality = quality_from_rating(label);

        let current = store
            .load(item_id)
            .unwrap_or_else(|| scheduler.initialize_progress(item_id.as_str()));
        let updated = scheduler.compute_review(&current, quality);

        reviews.push(ReviewLog {
            step: step_no,
            item_id: item_id.clone(),
            quality,
            interval: updated.interval,
            ease_factor: updated.ease_factor,
            next_review_date: updated.next_review_date,
        });
        store.save(updated);
        clock
            .advance(step)
            .with_context(|| format!("replay stopped after step {step_no}"))?;
    }

    let stats = selector.summarize(&script.items, &store);
    Ok(Report {
        reviews,
        stats,
        progress: store.into_iter().collect(),
    })
}

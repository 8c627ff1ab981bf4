//! Harness configuration from environment variables.

use anyhow::{bail, Context};
use chrono::Duration;
use std::path::PathBuf;

const DEFAULT_SEED: u64 = 0;
const DEFAULT_STEP_HOURS: i64 = 24;

/// Runtime settings for a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// JSON session script (`HARNESS_SCRIPT`).
    pub script_path: PathBuf,
    /// RNG seed for item selection (`HARNESS_SEED`).
    pub seed: u64,
    /// Simulated time between reviews (`HARNESS_STEP_HOURS`).
    pub step: Duration,
}

impl HarnessConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let script_path = lookup("HARNESS_SCRIPT")
            .map(PathBuf::from)
            .context("HARNESS_SCRIPT must be set")?;

        let seed = match lookup("HARNESS_SEED") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("HARNESS_SEED is not a valid u64: {raw}"))?,
            None => DEFAULT_SEED,
        };

        let step_hours = match lookup("HARNESS_STEP_HOURS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("HARNESS_STEP_HOURS is not a valid integer: {raw}"))?,
            None => DEFAULT_STEP_HOURS,
        };
        if step_hours < 0 {
            bail!("HARNESS_STEP_HOURS must not be negative, got {step_hours}");
        }
        let Some(step) = Duration::try_hours(step_hours) else {
            bail!("HARNESS_STEP_HOURS is out of range, got {step_hours}");
        };

        Ok(Self {
            script_path,
            seed,
            step,
        })
    }
}

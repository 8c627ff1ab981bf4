//! Offline evaluation harness: replays a scripted study session against
//! review-core and prints the resulting schedule as JSON.

pub mod config;
pub mod session;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::HarnessConfig;
use crate::session::{replay, Script};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the JSON report.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = HarnessConfig::from_env()?;

    tracing::info!("Loading script from {}", config.script_path.display());
    let script = Script::load(&config.script_path)?;

    tracing::info!(
        seed = config.seed,
        step_hours = config.step.num_hours(),
        "Replaying {} ratings over {} items",
        script.ratings.len(),
        script.items.len()
    );
    let mut rng = StdRng::seed_from_u64(config.seed);
    let report = replay(&script, config.step, &mut rng)?;

    tracing::info!(
        reviews = report.reviews.len(),
        due = report.stats.items_due,
        "Replay finished"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    std::io::Write::write_all(&mut out, b"\n")?;

    Ok(())
}

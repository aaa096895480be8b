//! Play the `TestPlayer` agent against `config/test1.json`.
//!
//! Usage:
//!   cargo run --bin skeleton
//!   RUST_LOG=debug cargo run --bin skeleton

use anyhow::Result;
use tracing::{info, Level};

use breakout_runner::runner::SoloGameRunner;
use breakout_runner::{skeleton, telemetry};

fn main() -> Result<()> {
    telemetry::init_tracing(Level::INFO)?;

    let report = skeleton::run(SoloGameRunner::new())?;
    info!(
        win = report.is_win(),
        message = report.outcome.message(),
        turns = report.turns_played(),
        "done"
    );
    Ok(())
}

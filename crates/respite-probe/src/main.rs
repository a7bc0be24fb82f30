//! Dry-runs a backoff strategy and logs when each attempt would happen.
//!
//! ```text
//! respite-probe "delay=100ms factor=2 maxdelay=1s maxduration=5s"
//! RESPITE_STRATEGY="delay=1s regular=true" RESPITE_LOG=debug respite-probe
//! ```
//!
//! Ctrl-C cancels the current wait.
mod probe;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use respite_model::StrategyConfig;
use respite_observe::{LoggerConfig, init_local_offset, init_logger};

/// Environment variable read when no strategy argument is given.
const ENV_STRATEGY: &str = "RESPITE_STRATEGY";

fn main() -> anyhow::Result<()> {
    // must run before any runtime threads exist
    init_local_offset();

    let cfg = LoggerConfig::from_env()?;
    init_logger(&cfg)?;

    let text = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => std::env::var(ENV_STRATEGY)
            .with_context(|| format!("no strategy given as argument or in {ENV_STRATEGY}"))?,
    };
    let strategy: StrategyConfig = text
        .parse()
        .with_context(|| format!("invalid strategy {text:?}"))?;
    info!(%strategy, "strategy loaded");

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(strategy))
}

async fn run(strategy: StrategyConfig) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received");
            trigger.cancel();
        }
    });

    let report = probe::probe(&strategy, &cancel).await;
    info!(
        attempts = report.attempts.len(),
        elapsed = ?report.elapsed,
        reason = %report.reason,
        "probe finished"
    );
    Ok(())
}

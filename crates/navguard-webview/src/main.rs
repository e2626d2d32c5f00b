//! navguard-replay
//!
//! Feeds JSON-lines navigation events from stdin through one guard instance
//! and prints one JSON decision per line. Denials are logged to stderr
//! (RUST_LOG controls verbosity); a metrics dump follows on exit.

use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use navguard_core::error::{NavGuardError, Result};
use navguard_core::{NavigationEvent, Platform};
use navguard_webview::{config, obs::GuardMetrics};

#[derive(Debug, Parser)]
#[command(name = "navguard-replay", about = "Replay webview navigation events through a guard")]
struct Args {
    /// Guard config file.
    #[arg(long, default_value = "navguard.yaml")]
    config: String,

    /// Surface id from the config.
    #[arg(long)]
    surface: String,

    /// Override the configured platform (ios | android).
    #[arg(long)]
    platform: Option<Platform>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = config::load_from_file(&args.config)?;
    let platform = args.platform.unwrap_or(cfg.platform);
    let surface = cfg.surface(&args.surface)?;

    // HTML content is irrelevant to navigation decisions.
    let source = surface.source(platform, String::new())?;
    let metrics = Arc::new(GuardMetrics::new());
    let guard = source
        .guard(platform.mode())?
        .with_metrics(Arc::clone(&metrics));

    tracing::info!(
        surface = %surface.id,
        platform = platform.as_str(),
        base_url = %source.base_url,
        "navguard-replay starting"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut lineno = 0usize;
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| NavGuardError::Internal(format!("read stdin failed: {e}")))?
    {
        lineno += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: NavigationEvent = match serde_json::from_str(line) {
            Ok(ev) => ev,
            Err(e) => {
                tracing::warn!(line = lineno, error = %e, "skipping malformed navigation event");
                println!("{}", json!({ "line": lineno, "error": e.to_string() }));
                continue;
            }
        };

        let decision = guard.evaluate(&event);
        println!(
            "{}",
            json!({
                "url": event.url,
                "allowed": decision.is_allowed(),
                "reason": decision.deny_reason().map(|r| r.as_str()),
            })
        );
    }

    eprint!("{}", metrics.render());
    Ok(())
}

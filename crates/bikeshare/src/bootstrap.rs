use std::path::Path;

use anyhow::{bail, Context};
use bikeshare_core::models::City;
use bikeshare_data::reader::check_data_dir;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name onto a tracing filter directive.
///
/// Unknown names fall back to `"warn"`.
pub fn log_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" | "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with prompts on stdout.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(log_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

// ── Data directory ─────────────────────────────────────────────────────────────

/// Fail fast when `data_dir` is not a directory; otherwise return the cities
/// whose CSV file is missing (each is logged as a warning).
pub fn validate_data_dir(data_dir: &Path) -> anyhow::Result<Vec<City>> {
    if !data_dir.is_dir() {
        bail!("data directory {} does not exist", data_dir.display());
    }
    Ok(check_data_dir(data_dir))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

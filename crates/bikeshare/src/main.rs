mod bootstrap;

use std::io;

use anyhow::{Context, Result};
use bikeshare_core::settings::Settings;
use bikeshare_runtime::session::{Session, SessionConfig};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("bikeshare v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data dir: {}, page size: {}",
        settings.data_dir.display(),
        settings.page_size
    );

    let missing = bootstrap::validate_data_dir(&settings.data_dir)?;
    if !missing.is_empty() {
        tracing::debug!("{} city file(s) unavailable", missing.len());
    }

    let config = SessionConfig {
        data_dir: settings.data_dir.clone(),
        page_size: usize::from(settings.page_size),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());

    let completed = session.run().context("bikeshare session failed")?;
    tracing::info!("Finished after {} session(s)", completed);

    Ok(())
}

//! Fetch-only command.

use anyhow::Result;
use simdata_core::{RefreshConfig, TracingSink, fetch_all};
use tracing::{info, warn};

pub fn run(config: &RefreshConfig) -> Result<()> {
    let report = fetch_all(config, &mut TracingSink)?;
    if report.all_succeeded() {
        info!("Fetched {} locale(s)", report.attempted.len());
    } else {
        warn!(
            "Fetch failed for {} of {} locale(s): {:?}",
            report.failed.len(),
            report.attempted.len(),
            report.failed
        );
    }
    Ok(())
}

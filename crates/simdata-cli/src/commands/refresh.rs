//! Full refresh: fetch content, then rebuild the trinket artifact.

use anyhow::Result;
use simdata_core::{RefreshConfig, TracingSink, fetch_all, update_trinkets};
use tracing::{info, warn};

pub fn run(config: &RefreshConfig) -> Result<()> {
    let report = fetch_all(config, &mut TracingSink)?;
    if !report.all_succeeded() {
        warn!(
            "Fetch failed for {} locale(s): {:?}",
            report.failed.len(),
            report.failed
        );
    }

    let artifact = update_trinkets(config)?;
    info!("Wrote {}", artifact.display());
    Ok(())
}

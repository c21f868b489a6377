//! Rebuild the trinket artifact from already compiled tables.

use anyhow::Result;
use simdata_core::{RefreshConfig, update_trinkets};
use tracing::info;

pub fn run(config: &RefreshConfig) -> Result<()> {
    // this command never invokes the extraction tool
    let mut config = config.clone();
    config.skip_extract = true;

    let artifact = update_trinkets(&config)?;
    info!("Wrote {}", artifact.display());
    Ok(())
}

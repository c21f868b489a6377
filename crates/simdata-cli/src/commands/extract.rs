//! Extraction-only command.

use anyhow::Result;
use simdata_core::{RefreshConfig, extract_tables};
use tracing::info;

pub fn run(config: &RefreshConfig, tables: &[String]) -> Result<()> {
    let tables: Vec<&str> = tables.iter().map(String::as_str).collect();
    let compiled = extract_tables(config, &tables)?;
    info!("Compiled {} table dump(s)", compiled.len());
    for handle in &compiled {
        info!("{} {} -> {}", handle.table, handle.locale, handle.path.display());
    }
    Ok(())
}

//! The trinket artifact: `data_files/trinkets.json`.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::RefreshConfig;
use crate::error::{Error, Result};
use crate::extract::{CompiledTable, extract_tables};
use crate::item::{TrinketFilter, load_records};
use crate::locale::Locale;
use crate::merge::merge_locales;

/// Tables the trinket artifact is built from.
// TODO: also extract ItemEffect to tell on-use trinkets from passives
pub const TRINKET_TABLES: [&str; 1] = ["ItemSparse"];

/// Name of the artifact file inside the data directory.
pub const TRINKETS_FILE: &str = "trinkets.json";

/// Rebuild the trinket artifact.
///
/// Runs (or skips, per config) the extraction stage, loads every locale's
/// compiled `ItemSparse` dump, filters it, merges the translations, and
/// writes the merged set as one compact JSON file. A locale whose compiled
/// dump is missing fails the whole pass.
pub fn update_trinkets(config: &RefreshConfig) -> Result<PathBuf> {
    info!("Update trinkets");

    let compiled = extract_tables(config, &TRINKET_TABLES)?;
    let filter = TrinketFilter::new();

    let mut inputs = Vec::with_capacity(Locale::ALL.len());
    for locale in Locale::ALL {
        let handle = find_handle(&compiled, TRINKET_TABLES[0], locale).ok_or_else(|| {
            Error::CompiledTableMissing {
                path: config
                    .compiled_dir(locale)
                    .join(format!("{}.json", TRINKET_TABLES[0])),
            }
        })?;
        let records = load_records(&handle.path)?;
        inputs.push((locale, filter.filter(records)));
    }

    let trinkets = merge_locales(&inputs);
    debug!("Count: {}", trinkets.len());

    fs::create_dir_all(&config.data_dir)?;
    let path = config.data_dir.join(TRINKETS_FILE);
    // compact serialization; serde_json leaves non-ASCII names unescaped
    fs::write(&path, serde_json::to_string(&trinkets)?)?;

    Ok(path)
}

fn find_handle<'a>(
    compiled: &'a [CompiledTable],
    table: &str,
    locale: Locale,
) -> Option<&'a CompiledTable> {
    compiled
        .iter()
        .find(|handle| handle.table == table && handle.locale == locale)
}

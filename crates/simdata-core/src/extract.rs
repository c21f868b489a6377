//! Table extraction stage.
//!
//! Drives `dbc_extract.py` once per (table, locale) pair, capturing its
//! stdout as the JSON payload and persisting it under
//! `<output>/compiled/<locale>/<table>.json`. The returned handles are the
//! contract with the merge pass; downstream code never re-derives the
//! compiled paths on its own.

use std::fs;
use std::path::PathBuf;

use tracing::{error, info};

use crate::config::RefreshConfig;
use crate::error::Result;
use crate::fetch::detect_game_version;
use crate::locale::Locale;
use crate::process::{ToolCommand, find_python};

/// Handle to one successfully compiled (or reused) table dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTable {
    pub table: String,
    pub locale: Locale,
    pub path: PathBuf,
}

/// Extract the given tables for every locale.
///
/// A failed pair is logged (including the tool's stderr) and produces no
/// handle; the run continues. With `skip_extract` set, no tool runs and the
/// expected handles are returned as-is — loading one whose file was never
/// produced fails downstream instead.
pub fn extract_tables(config: &RefreshConfig, tables: &[&str]) -> Result<Vec<CompiledTable>> {
    if config.skip_extract {
        info!("Skipping extraction");
        return Ok(expected_tables(config, tables));
    }
    info!("Extracting files (dbc)");

    let python = find_python()?;
    let dbc_dir = config.dbc_dir()?;
    let version = detect_game_version(config)?;

    let mut compiled = Vec::new();
    for &table in tables {
        for locale in Locale::ALL {
            info!("{table} {locale}");

            let mut command = ToolCommand::new(&python)
                .arg("dbc_extract.py")
                .args(["-b", &version, "-t", "json"]);
            if let Some(cache) = config.hotfix_cache() {
                command = command.arg("--hotfix").arg(cache);
            }
            let command = command
                .arg("-p")
                .arg(
                    config
                        .locale_dir(locale)
                        .join(&version)
                        .join("DBFilesClient"),
                )
                .arg(table)
                .current_dir(&dbc_dir)
                .timeout(config.extract_timeout);

            let output = match command.run_captured() {
                Ok(output) => output,
                Err(e) => {
                    error!("Error occurred while extracting {table} {locale}: {e}");
                    continue;
                }
            };
            if !output.status.success() {
                error!(
                    "Error occurred while extracting {table} {locale}. {}",
                    output.stderr_lossy()
                );
                continue;
            }

            let compiled_dir = config.compiled_dir(locale);
            fs::create_dir_all(&compiled_dir)?;
            let path = compiled_dir.join(format!("{table}.json"));
            fs::write(&path, &output.stdout)?;

            compiled.push(CompiledTable {
                table: table.to_string(),
                locale,
                path,
            });
        }
    }

    Ok(compiled)
}

/// The handles a full extraction of `tables` would produce, without running
/// anything.
fn expected_tables(config: &RefreshConfig, tables: &[&str]) -> Vec<CompiledTable> {
    tables
        .iter()
        .flat_map(|&table| {
            Locale::ALL.map(|locale| CompiledTable {
                table: table.to_string(),
                locale,
                path: config.compiled_dir(locale).join(format!("{table}.json")),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_extract_returns_expected_handles() {
        let mut config = RefreshConfig::new("/tmp/out");
        config.skip_extract = true;
        let handles = extract_tables(&config, &["ItemSparse"]).unwrap();
        assert_eq!(handles.len(), Locale::ALL.len());
        assert_eq!(handles[0].table, "ItemSparse");
        assert_eq!(handles[0].locale, Locale::EnUs);
        assert_eq!(
            handles[0].path,
            PathBuf::from("/tmp/out/compiled/en_US/ItemSparse.json")
        );
    }

    #[test]
    fn test_expected_handles_cover_every_pair() {
        let config = RefreshConfig::new("/tmp/out");
        let handles = expected_tables(&config, &["ItemSparse", "ItemEffect"]);
        assert_eq!(handles.len(), 2 * Locale::ALL.len());
        assert!(
            handles
                .iter()
                .any(|h| h.table == "ItemEffect" && h.locale == Locale::PtPt)
        );
    }
}

//! CDN content fetch stage.
//!
//! Drives `casc_extract.py` once per locale. Each run populates
//! `<output>/<locale>/<version>/...` with the locale's db2 files; a failed
//! locale is logged and recorded, never aborts the remaining locales.

use std::fs;

use tracing::{error, info};

use crate::config::RefreshConfig;
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::process::{LineSink, ToolCommand, find_python};

/// Per-locale outcome of one fetch stage run.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub attempted: Vec<Locale>,
    pub failed: Vec<Locale>,
}

impl FetchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetch every locale's content from the CDN.
///
/// The tool's stdout is relayed line-by-line into `sink` while it runs.
/// Returns the report; only a missing interpreter or a missing simc path
/// is an error.
pub fn fetch_all(config: &RefreshConfig, sink: &mut dyn LineSink) -> Result<FetchReport> {
    if config.skip_fetch {
        info!("Skipping download");
        return Ok(FetchReport::default());
    }
    info!("Downloading files (casc)");

    let python = find_python()?;
    let casc_dir = config.casc_dir()?;

    let mut report = FetchReport::default();
    for locale in Locale::ALL {
        info!("{locale}");
        report.attempted.push(locale);

        let mut command = ToolCommand::new(&python)
            .arg("casc_extract.py")
            .args(["--cdn", "-m", "batch"]);
        if let Some(flag) = config.branch.flag() {
            command = command.arg(flag);
        }
        let command = command
            .arg("--locale")
            .arg(locale.as_str())
            .arg("-o")
            .arg(config.locale_dir(locale))
            .current_dir(&casc_dir)
            .timeout(config.fetch_timeout);

        match command.run_streamed(sink) {
            Ok(status) if status.success() => {}
            Ok(status) => {
                error!(
                    "Error occurred while loading {locale} (exit code {:?})",
                    status.code()
                );
                report.failed.push(locale);
            }
            Err(e @ (Error::SpawnFailed { .. } | Error::ToolTimedOut { .. })) => {
                error!("Error occurred while loading {locale}: {e}");
                report.failed.push(locale);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Detect the fetched game version string.
///
/// The fetch tool writes each locale's content under a directory named
/// after the build, e.g. `<output>/en_US/10.1.5.50232/`. The first entry
/// (sorted, for determinism) of the seed locale's directory is the version.
pub fn detect_game_version(config: &RefreshConfig) -> Result<String> {
    let dir = config.locale_dir(Locale::SEED);
    let mut entries: Vec<String> = fs::read_dir(&dir)
        .map_err(|e| Error::VersionNotFound {
            path: dir.clone(),
            reason: e.to_string(),
        })?
        .filter_map(|entry| Some(entry.ok()?.file_name().to_string_lossy().into_owned()))
        .collect();
    entries.sort();
    entries
        .into_iter()
        .next()
        .ok_or_else(|| Error::VersionNotFound {
            path: dir,
            reason: "directory is empty".to_string(),
        })
}

//! Refresh run configuration.
//!
//! A [`RefreshConfig`] carries the paths and toggles for one refresh run and
//! derives every filesystem location the pipeline touches, so stages pass
//! explicit paths around instead of re-deriving strings ad hoc.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::locale::Locale;

/// Directory the final artifacts are written to, relative to the working
/// directory (overridable via [`RefreshConfig::data_dir`]).
pub const DATA_PATH: &str = "data_files";

/// Subprocess time limits.
///
/// The external tools have no bound of their own; a CDN stall would
/// otherwise hang the run indefinitely. `None` on the config disables the
/// bound entirely.
pub mod timeouts {
    use std::time::Duration;

    /// Per-locale CDN fetch limit.
    pub const FETCH: Duration = Duration::from_secs(3600);

    /// Per-(table, locale) extraction limit.
    pub const EXTRACT: Duration = Duration::from_secs(600);
}

/// Which content branch to fetch from the CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Branch {
    #[default]
    Live,
    Ptr,
    Beta,
}

impl Branch {
    /// Extra flag passed to the fetch tool, if any.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Branch::Live => None,
            Branch::Ptr => Some("--ptr"),
            Branch::Beta => Some("--beta"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Local SimulationCraft checkout providing the extraction tools.
    pub simc: Option<PathBuf>,
    /// Save location for fetched and compiled DB files.
    pub output: PathBuf,
    /// Game installation used as the hotfix cache source.
    pub wow: Option<PathBuf>,
    /// Skip the CDN download and use already present local files.
    pub skip_fetch: bool,
    /// Skip db2 extraction and use already compiled JSON files.
    pub skip_extract: bool,
    pub branch: Branch,
    pub fetch_timeout: Option<Duration>,
    pub extract_timeout: Option<Duration>,
    /// Directory the final artifacts are written to.
    pub data_dir: PathBuf,
}

impl RefreshConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            simc: None,
            output: output.into(),
            wow: None,
            skip_fetch: false,
            skip_extract: false,
            branch: Branch::Live,
            fetch_timeout: Some(timeouts::FETCH),
            extract_timeout: Some(timeouts::EXTRACT),
            data_dir: PathBuf::from(DATA_PATH),
        }
    }

    pub fn with_simc(mut self, simc: impl Into<PathBuf>) -> Self {
        self.simc = Some(simc.into());
        self
    }

    /// Directory one locale's fetched content lands in.
    pub fn locale_dir(&self, locale: Locale) -> PathBuf {
        self.output.join(locale.as_str())
    }

    /// Directory one locale's extracted JSON tables land in.
    pub fn compiled_dir(&self, locale: Locale) -> PathBuf {
        self.output.join("compiled").join(locale.as_str())
    }

    /// Working directory of the CDN fetch tool.
    pub fn casc_dir(&self) -> Result<PathBuf> {
        self.simc_dir("casc fetch").map(|p| p.join("casc_extract"))
    }

    /// Working directory of the db2 extraction tool.
    pub fn dbc_dir(&self) -> Result<PathBuf> {
        self.simc_dir("db2 extraction")
            .map(|p| p.join("dbc_extract3"))
    }

    /// Hotfix cache file inside the game installation, if one is configured.
    pub fn hotfix_cache(&self) -> Option<PathBuf> {
        self.wow
            .as_ref()
            .map(|wow| wow.join("Cache/ADB/enUS/DBCache.bin"))
    }

    fn simc_dir(&self, stage: &'static str) -> Result<&Path> {
        self.simc
            .as_deref()
            .ok_or(Error::SimcPathMissing(stage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_flags() {
        assert_eq!(Branch::Live.flag(), None);
        assert_eq!(Branch::Ptr.flag(), Some("--ptr"));
        assert_eq!(Branch::Beta.flag(), Some("--beta"));
    }

    #[test]
    fn test_derived_paths() {
        let config = RefreshConfig::new("/tmp/out").with_simc("/opt/simc");
        assert_eq!(
            config.locale_dir(Locale::KoKr),
            PathBuf::from("/tmp/out/ko_KR")
        );
        assert_eq!(
            config.compiled_dir(Locale::EnUs),
            PathBuf::from("/tmp/out/compiled/en_US")
        );
        assert_eq!(
            config.casc_dir().unwrap(),
            PathBuf::from("/opt/simc/casc_extract")
        );
        assert_eq!(
            config.dbc_dir().unwrap(),
            PathBuf::from("/opt/simc/dbc_extract3")
        );
    }

    #[test]
    fn test_missing_simc_path_is_an_error() {
        let config = RefreshConfig::new("/tmp/out");
        assert!(config.casc_dir().is_err());
        assert!(config.dbc_dir().is_err());
    }

    #[test]
    fn test_hotfix_cache_path() {
        let mut config = RefreshConfig::new("/tmp/out");
        assert_eq!(config.hotfix_cache(), None);
        config.wow = Some(PathBuf::from("/games/wow"));
        assert_eq!(
            config.hotfix_cache(),
            Some(PathBuf::from("/games/wow/Cache/ADB/enUS/DBCache.bin"))
        );
    }
}

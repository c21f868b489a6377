use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Python 3 is required, but neither 'python' nor 'python3' provides it")]
    PythonNotFound,

    #[error("No SimulationCraft path configured (required for {0})")]
    SimcPathMissing(&'static str),

    #[error("Failed to spawn {tool}: {source}")]
    SpawnFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exceeded its time limit of {timeout:?} and was killed")]
    ToolTimedOut { tool: String, timeout: Duration },

    #[error("Could not detect game version under {path}: {reason}")]
    VersionNotFound { path: PathBuf, reason: String },

    #[error("Compiled table not found at {path}")]
    CompiledTableMissing { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

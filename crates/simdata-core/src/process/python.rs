//! Python interpreter detection.
//!
//! Both extraction tools are Python scripts. The commandline name differs
//! between systems (`python` vs `python3`), and some systems still point
//! `python` at a 2.x interpreter.

use std::process::Command;

use crate::error::{Error, Result};

/// Find the commandline name of a Python 3 interpreter.
///
/// Probes `python` first, then `python3`. A missing interpreter is fatal;
/// no stage can run without one.
pub fn find_python() -> Result<String> {
    for candidate in ["python", "python3"] {
        if reports_python3(candidate) {
            return Ok(candidate.to_string());
        }
    }
    Err(Error::PythonNotFound)
}

fn reports_python3(program: &str) -> bool {
    let Ok(output) = Command::new(program).arg("--version").output() else {
        return false;
    };
    // Python 2 prints its version to stderr, so a 2.x `python` fails this
    // check on the stdout parse alone.
    output.status.success() && is_python3_version(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `--version` output like `Python 3.11.4` and check the major version.
fn is_python3_version(text: &str) -> bool {
    text.split_whitespace()
        .nth(1)
        .is_some_and(|version| version.starts_with('3'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        assert!(is_python3_version("Python 3.11.4"));
        assert!(is_python3_version("Python 3.8.0\n"));
        assert!(!is_python3_version("Python 2.7.18"));
        assert!(!is_python3_version("Python"));
        assert!(!is_python3_version(""));
    }
}

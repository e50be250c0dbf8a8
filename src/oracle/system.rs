//! Oracle backed by the host's executable search rules

use std::path::{Path, PathBuf};

use tracing::trace;

use super::ResolutionOracle;
use crate::core::join_dirs;

/// Resolves commands the way the operating system would.
///
/// Delegates to `which::which_in`, which honours the execute bit on Unix and
/// `PATHEXT` suffixes on Windows. Command names containing a path separator
/// are looked up relative to `cwd` whatever the directory list holds, and an
/// empty entry in the list stands for `cwd` itself.
#[derive(Clone, Debug)]
pub struct SystemOracle {
    cwd: PathBuf,
}

impl SystemOracle {
    pub fn new() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { cwd }
    }

    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl Default for SystemOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionOracle for SystemOracle {
    fn resolve(&self, command: &str, dirs: &[String]) -> Option<PathBuf> {
        let search: Vec<String> = dirs
            .iter()
            .map(|dir| {
                if dir.is_empty() {
                    self.cwd.to_string_lossy().into_owned()
                } else {
                    dir.clone()
                }
            })
            .collect();
        let paths = (!search.is_empty()).then(|| join_dirs(&search));

        match which::which_in(command, paths, &self.cwd) {
            Ok(path) => Some(path),
            Err(e) => {
                trace!(command, error = %e, "not resolvable");
                None
            }
        }
    }
}

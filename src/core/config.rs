//! Configuration constants and settings

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{PathMinError, Result};

// Safety bound on removal passes, shared by every command of a run
pub const DEFAULT_ITERATION_LIMIT: usize = 10000;

// Variable minimized when neither --var nor the config file names one
pub const DEFAULT_VARIABLE: &str = "PATH";

// Environment overrides
pub const LIMIT_ENV_VAR: &str = "PATHMIN_LIMIT";
pub const LOG_ENV_VAR: &str = "PATHMIN_LOG";

// Config file location under the user's config directory
pub const CONFIG_DIR_NAME: &str = "pathmin";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from the optional TOML config file
///
/// ```toml
/// variable = "PATH"
/// iteration_limit = 5000
/// commands = ["cc", "python3"]
/// hide = ["gcc-wrapper"]
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub variable: Option<String>,
    pub iteration_limit: Option<usize>,
    /// Commands kept resolvable in addition to those given on the command line
    pub commands: Vec<String>,
    /// Commands hidden in addition to those given with --hide
    pub hide: Vec<String>,
}

impl FileConfig {
    /// Parses config text; `path` is only used for error messages
    pub fn parse(src: &str, path: &Path) -> Result<Self> {
        toml::from_str(src).map_err(|e| PathMinError::Config {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| PathMinError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&src, path)
    }

    /// `<config_dir>/pathmin/config.toml`, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads an explicitly requested file (which must exist), or the default
    /// file when it exists, or falls back to empty settings.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Determines the iteration budget from CLI args, environment and config file
///
/// Priority order:
/// 1. --limit N flag → N
/// 2. PATHMIN_LIMIT env var → N
/// 3. iteration_limit in the config file → N
/// 4. DEFAULT_ITERATION_LIMIT
pub fn get_iteration_limit(flag: Option<usize>, file: &FileConfig) -> usize {
    let env_value = std::env::var(LIMIT_ENV_VAR).ok();
    resolve_iteration_limit(flag, env_value.as_deref(), file)
}

pub(crate) fn resolve_iteration_limit(
    flag: Option<usize>,
    env_value: Option<&str>,
    file: &FileConfig,
) -> usize {
    if let Some(n) = flag {
        return n.max(1); // Ensure at least 1
    }

    if let Some(raw) = env_value {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => return n,
            _ => warn!("ignoring invalid {}={:?}", LIMIT_ENV_VAR, raw),
        }
    }

    file.iteration_limit
        .map(|n| n.max(1))
        .unwrap_or(DEFAULT_ITERATION_LIMIT)
}

/// Name of the variable to minimize: --var flag, then config file, then PATH
pub fn get_variable_name(flag: Option<&str>, file: &FileConfig) -> String {
    flag.map(str::to_string)
        .or_else(|| file.variable.clone())
        .unwrap_or_else(|| DEFAULT_VARIABLE.to_string())
}

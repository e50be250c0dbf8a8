//! Splitting, joining and de-duplicating PATH-like values

use std::collections::HashSet;

use crate::error::{PathMinError, Result};

/// Separator between entries of a PATH-like variable on this platform
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';

/// Splits a PATH-like value into its entries, keeping order and empty entries
pub fn split_dirs(value: &str) -> Vec<String> {
    value.split(PATH_SEPARATOR).map(str::to_string).collect()
}

/// Joins entries back into a PATH-like value, without a trailing separator
pub fn join_dirs(dirs: &[String]) -> String {
    dirs.join(&PATH_SEPARATOR.to_string())
}

/// Removes repeated entries, keeping the first occurrence of each
pub fn dedup_dirs(dirs: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(dirs.len());
    dirs.into_iter()
        .filter(|dir| seen.insert(dir.clone()))
        .collect()
}

/// Reads the named variable from the process environment and returns its
/// de-duplicated entries
pub fn read_dirs_from_env(name: &str) -> Result<Vec<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(dedup_dirs(split_dirs(&value))),
        Err(std::env::VarError::NotPresent) => Err(PathMinError::VariableNotSet {
            name: name.to_string(),
        }),
        Err(std::env::VarError::NotUnicode(_)) => Err(PathMinError::VariableNotUnicode {
            name: name.to_string(),
        }),
    }
}

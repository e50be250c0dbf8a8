//! Post-condition checks on a reduced directory list

use std::fmt;
use std::path::PathBuf;

use crate::error::{PathMinError, Result};
use crate::oracle::ResolutionOracle;

/// A command whose resolution differs between two directory lists
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub command: String,
    pub expected: Option<PathBuf>,
    pub actual: Option<PathBuf>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {}",
            self.command,
            show_path(&self.expected),
            show_path(&self.actual)
        )
    }
}

/// Renders a resolution for diagnostics, `<none>` when unresolvable
pub(crate) fn show_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "<none>".to_string(),
    }
}

/// Lists every command that resolves differently against `after` than against `before`
pub fn verify_resolutions(
    oracle: &dyn ResolutionOracle,
    commands: &[String],
    before: &[String],
    after: &[String],
) -> Vec<Mismatch> {
    commands
        .iter()
        .filter_map(|command| {
            let expected = oracle.resolve(command, before);
            let actual = oracle.resolve(command, after);
            (expected != actual).then(|| Mismatch {
                command: command.clone(),
                expected,
                actual,
            })
        })
        .collect()
}

/// Like [`verify_resolutions`], but fails on the first sign of drift
pub fn ensure_preserved(
    oracle: &dyn ResolutionOracle,
    commands: &[String],
    before: &[String],
    after: &[String],
) -> Result<()> {
    let mismatches = verify_resolutions(oracle, commands, before, after);
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(PathMinError::ResolutionChanged { mismatches })
    }
}

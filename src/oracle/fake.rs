//! In-memory oracle with a fixed directory layout

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use super::ResolutionOracle;

/// Resolves commands against a declared set of (directory, command) pairs.
///
/// No filesystem access; used by tests and benchmarks.
#[derive(Clone, Debug, Default)]
pub struct StaticOracle {
    layout: HashMap<String, HashSet<String>>,
}

impl StaticOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `dir` contains an executable named `command`
    pub fn with_command(mut self, dir: &str, command: &str) -> Self {
        self.add(dir, command);
        self
    }

    pub fn add(&mut self, dir: &str, command: &str) {
        self.layout
            .entry(dir.to_string())
            .or_default()
            .insert(command.to_string());
    }

    /// Returns true if `dir` was declared to contain `command`
    pub fn provides(&self, dir: &str, command: &str) -> bool {
        self.layout
            .get(dir)
            .is_some_and(|commands| commands.contains(command))
    }
}

impl ResolutionOracle for StaticOracle {
    fn resolve(&self, command: &str, dirs: &[String]) -> Option<PathBuf> {
        dirs.iter()
            .find(|dir| self.provides(dir, command))
            .map(|dir| PathBuf::from(dir).join(command))
    }
}

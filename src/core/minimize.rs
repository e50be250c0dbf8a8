//! Greedy reduction of a directory list
//!
//! Directories are dropped one at a time, leftmost first, for as long as every
//! tracked command keeps resolving to the same executable. Each removal pass is
//! an explicit step of a fixed-point loop: the loop ends when a full pass over
//! the list finds nothing to remove.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::config::DEFAULT_ITERATION_LIMIT;
use super::path_list::{dedup_dirs, join_dirs};
use super::verify::show_path;
use crate::error::{PathMinError, Result};
use crate::oracle::ResolutionOracle;

/// Result of a reduction run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MinimizeOutcome {
    /// Directories that remain, in their original relative order
    pub dirs: Vec<String>,
    /// Directories that were dropped, in removal order
    pub removed: Vec<String>,
    /// Passes consumed from the iteration budget
    pub iterations: usize,
}

impl MinimizeOutcome {
    /// The remaining directories joined by the platform separator
    pub fn joined(&self) -> String {
        join_dirs(&self.dirs)
    }
}

/// Shrinks a directory list while keeping command resolution intact.
pub struct PathMinimizer<'a> {
    oracle: &'a dyn ResolutionOracle,
    limit: usize,
}

/// Working state shared by the hide and keep phases
struct Reduction {
    dirs: Vec<String>,
    removed: Vec<String>,
    used: usize,
    limit: usize,
}

impl Reduction {
    fn new(dirs: Vec<String>, limit: usize) -> Self {
        Self {
            dirs: dedup_dirs(dirs),
            removed: Vec::new(),
            used: 0,
            limit,
        }
    }

    /// Consumes one unit of the iteration budget
    fn spend(&mut self) -> Result<()> {
        if self.used >= self.limit {
            return Err(PathMinError::SafetyBoundExceeded { limit: self.limit });
        }
        self.used += 1;
        Ok(())
    }

    fn remove(&mut self, index: usize) {
        let dir = self.dirs.remove(index);
        debug!(dir = %dir, "removed");
        self.removed.push(dir);
    }

    fn finish(self) -> MinimizeOutcome {
        MinimizeOutcome {
            dirs: self.dirs,
            removed: self.removed,
            iterations: self.used,
        }
    }
}

/// Copy of `dirs` with the entry at `index` left out
fn without(dirs: &[String], index: usize) -> Vec<String> {
    let mut candidate = Vec::with_capacity(dirs.len().saturating_sub(1));
    candidate.extend_from_slice(&dirs[..index]);
    candidate.extend_from_slice(&dirs[index + 1..]);
    candidate
}

impl<'a> PathMinimizer<'a> {
    pub fn new(oracle: &'a dyn ResolutionOracle) -> Self {
        Self {
            oracle,
            limit: DEFAULT_ITERATION_LIMIT,
        }
    }

    /// Sets the iteration budget shared by every command of a run
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Removes every directory that is not needed to keep `commands` resolving
    /// to the executables they resolve to in `dirs`.
    pub fn minimize(&self, dirs: Vec<String>, commands: &[String]) -> Result<MinimizeOutcome> {
        self.run(dirs, &[], commands)
    }

    /// Removes directories until none of `commands` resolves any more.
    pub fn hide(&self, dirs: Vec<String>, commands: &[String]) -> Result<MinimizeOutcome> {
        self.run(dirs, commands, &[])
    }

    /// Hides `hide`, then minimizes the remaining list for `keep`.
    ///
    /// Baselines for `keep` are taken after hiding, so a kept command that was
    /// shadowed by a hidden one may end up resolving elsewhere (a warning is
    /// logged when that happens).
    pub fn run(&self, dirs: Vec<String>, hide: &[String], keep: &[String]) -> Result<MinimizeOutcome> {
        let mut state = Reduction::new(dirs, self.limit);

        if !hide.is_empty() {
            let before = self.resolve_all(keep, &state.dirs);
            for command in hide {
                self.hide_command(&mut state, command)?;
            }
            for (command, old) in keep.iter().zip(before) {
                let new = self.oracle.resolve(command, &state.dirs);
                if new != old {
                    warn!(
                        command = %command,
                        before = %show_path(&old),
                        after = %show_path(&new),
                        "resolution changed by hiding"
                    );
                }
            }
        }

        let baselines: Vec<(&str, Option<PathBuf>)> = keep
            .iter()
            .map(String::as_str)
            .zip(self.resolve_all(keep, &state.dirs))
            .collect();

        for (command, baseline) in &baselines {
            info!("Considering {}", command);
            let Some(path) = baseline else {
                debug!(command, "not resolvable, nothing to preserve");
                continue;
            };
            info!("Has command path: {}", path.display());

            loop {
                state.spend()?;
                match self.find_removable(&state.dirs, &baselines) {
                    Some(index) => state.remove(index),
                    None => break,
                }
            }
        }

        Ok(state.finish())
    }

    fn resolve_all(&self, commands: &[String], dirs: &[String]) -> Vec<Option<PathBuf>> {
        commands
            .iter()
            .map(|command| self.oracle.resolve(command, dirs))
            .collect()
    }

    /// Leftmost directory whose removal leaves every baseline unchanged
    fn find_removable(&self, dirs: &[String], baselines: &[(&str, Option<PathBuf>)]) -> Option<usize> {
        (0..dirs.len()).find(|&index| {
            let candidate = without(dirs, index);
            baselines
                .iter()
                .all(|(command, baseline)| self.oracle.resolve(command, &candidate) == *baseline)
        })
    }

    fn hide_command(&self, state: &mut Reduction, command: &str) -> Result<()> {
        info!("Hiding {}", command);
        while let Some(current) = self.oracle.resolve(command, &state.dirs) {
            state.spend()?;
            info!("Has command path: {}", current.display());

            let provider = (0..state.dirs.len()).find(|&index| {
                self.oracle.resolve(command, &without(&state.dirs, index)).as_ref() != Some(&current)
            });
            match provider {
                Some(index) => state.remove(index),
                None => {
                    warn!(command, "resolution does not depend on any directory, cannot hide");
                    break;
                }
            }
        }
        Ok(())
    }
}

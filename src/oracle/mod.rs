//! Command resolution against an ordered directory list

pub mod fake;
pub mod system;

pub use fake::StaticOracle;
pub use system::SystemOracle;

use std::path::PathBuf;

/// Trait for anything that can answer "where would this command run from?"
pub trait ResolutionOracle {
    /// Returns the first directory in `dirs` (joined with the executable name)
    /// holding an executable matching `command`, or `None`.
    fn resolve(&self, command: &str, dirs: &[String]) -> Option<PathBuf>;
}

impl<F> ResolutionOracle for F
where
    F: Fn(&str, &[String]) -> Option<PathBuf>,
{
    fn resolve(&self, command: &str, dirs: &[String]) -> Option<PathBuf> {
        self(command, dirs)
    }
}

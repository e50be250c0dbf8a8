//! Error types for PATH minimization.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::Mismatch;

/// Errors that can occur while reading, minimizing, or verifying a directory list.
#[derive(Debug, Error)]
pub enum PathMinError {
    /// The removal loop ran out of its iteration budget.
    ///
    /// Unreachable for a well-behaved oracle; signals an oscillating reduction.
    #[error("loop limit of {limit} iterations exceeded")]
    SafetyBoundExceeded { limit: usize },

    /// Verification found commands that no longer resolve to the same place.
    #[error("{} command(s) changed resolution: {}", .mismatches.len(), describe(.mismatches))]
    ResolutionChanged { mismatches: Vec<Mismatch> },

    /// The PATH-like variable is missing from the environment.
    #[error("environment variable {name} is not set")]
    VariableNotSet { name: String },

    /// The PATH-like variable holds non-unicode data.
    #[error("environment variable {name} is not valid unicode")]
    VariableNotUnicode { name: String },

    /// The config file could not be read or parsed.
    #[error("invalid config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

fn describe(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, PathMinError>;

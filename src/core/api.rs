//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Directory list splitting, joining and de-duplication
//! - The minimizer and its outcome
//! - Resolution verification
//! - Configuration utilities
//!
//! Internal implementation details are not exposed through this API.

// Minimization
pub use super::minimize::{MinimizeOutcome, PathMinimizer};

// Verification
pub use super::verify::{ensure_preserved, verify_resolutions, Mismatch};

// Directory lists
pub use super::path_list::{dedup_dirs, join_dirs, read_dirs_from_env, split_dirs, PATH_SEPARATOR};

// Configuration
pub use super::config::{get_iteration_limit, get_variable_name, FileConfig};
pub use super::config::{DEFAULT_ITERATION_LIMIT, DEFAULT_VARIABLE, LIMIT_ENV_VAR, LOG_ENV_VAR};

//! # pathmin
//!
//! `pathmin` shrinks a PATH-like variable down to the directories that are
//! actually needed for a chosen set of commands. It powers the `pathmin` CLI
//! used in build scripts that want a small, predictable PATH.
//!
//! ## Core Features
//!
//! - **Resolution preserving**: every kept command still resolves to the very
//!   same executable after minimization.
//! - **Pluggable lookup**: resolution goes through [`oracle::ResolutionOracle`];
//!   [`oracle::SystemOracle`] uses the host's rules, [`oracle::StaticOracle`]
//!   is a deterministic fake.
//! - **Hiding**: commands can be made unresolvable by dropping every directory
//!   that provides them.
//!
//! ## Example
//!
//! ```rust
//! use pathmin::core::PathMinimizer;
//! use pathmin::oracle::StaticOracle;
//!
//! let oracle = StaticOracle::new().with_command("/usr/bin", "cc");
//! let dirs = vec!["/opt/bin".to_string(), "/usr/bin".to_string()];
//! let outcome = PathMinimizer::new(&oracle)
//!     .minimize(dirs, &["cc".to_string()])
//!     .unwrap();
//! assert_eq!(outcome.dirs, vec!["/usr/bin".to_string()]);
//! ```

pub mod commands;
pub mod core;
pub mod error;
pub mod oracle;
pub mod utils;

pub use error::PathMinError;

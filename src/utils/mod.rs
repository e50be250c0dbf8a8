pub(crate) mod logging;

// Public API - utilities used by the binary
pub use logging::{init_logging, Verbosity};

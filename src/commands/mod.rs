//! Command implementations invoked by the binary

pub mod minimize;

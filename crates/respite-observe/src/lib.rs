//! Logging setup for respite binaries.
//!
//! The library crates only emit `tracing` events; this crate installs the
//! subscriber that renders them.
mod logger;
pub use logger::*;

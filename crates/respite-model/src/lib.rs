//! Declarative backoff strategies.
//!
//! [`StrategyConfig`] is the immutable policy value consumed by the iterator in
//! `respite-core`; [`parse_strategy`] builds one from compact `key=value` text.
mod domain;
pub use domain::constants;
pub use domain::{DurationError, Flag, KeyValue, format_duration, parse_duration};

mod error;
pub use error::{ModelError, ModelResult};

mod strategy;
pub use strategy::{StrategyConfig, parse_strategy};

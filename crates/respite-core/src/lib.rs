//! Live backoff runs driven by the caller's retry loop.
//!
//! Pair a [`respite_model::StrategyConfig`] with a [`BackoffIterator`] and call
//! [`BackoffIterator::next`] between attempts until it returns `false`.
pub mod backoff;
pub mod map;

pub use backoff::{BackoffIterator, ExhaustReason, StopReason, StrategyExt};

pub mod prelude {
    pub use crate::backoff::{BackoffIterator, ExhaustReason, StopReason, StrategyExt};
    pub use respite_model::{ModelError, StrategyConfig, parse_strategy};
    pub use tokio_util::sync::CancellationToken;
}

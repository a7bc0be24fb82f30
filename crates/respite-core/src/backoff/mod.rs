//! # Backoff iterator.
//!
//! [`BackoffIterator`] turns a [`StrategyConfig`] into a live sequence of waits.
//! The caller makes its first attempt immediately, then calls
//! [`BackoffIterator::next`] before every retry:
//!
//! ```text
//! Fresh ──start──► Running ──next()==false──► Exhausted (policy bound hit)
//!                     │
//!                     └──cancel during wait──► Cancelled (was_stopped() == true)
//! ```
//!
//! Bounds are checked *before* sleeping, so a run never ends with a wasted wait:
//! - `max_attempts` is compared against the attempt counter;
//! - `max_total_duration` refuses any wait that would end past the budget.
//!
//! # Example
//! ```rust
//! use respite_core::BackoffIterator;
//! use respite_model::StrategyConfig;
//! use time::Duration;
//!
//! # async fn example() {
//! let cfg = StrategyConfig::new(Duration::milliseconds(10)).with_max_attempts(3);
//! let mut it = BackoffIterator::start(&cfg);
//! let mut tries = 1;
//! while it.next(None).await {
//!     tries += 1;
//! }
//! assert_eq!(tries, 3);
//! assert!(!it.was_stopped());
//! # }
//! ```
mod state;
mod wait;

pub use state::{ExhaustReason, StopReason};

use std::time::Duration as StdDuration;

use respite_model::StrategyConfig;
use time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::map::{to_signed_duration, to_sleep_duration};
use wait::{WaitOutcome, wait};

/// Stateful cursor over a [`StrategyConfig`].
///
/// Borrows its config, so many iterators can share one policy value.
/// A single iterator is driven by one caller at a time (`next` takes `&mut self`).
#[derive(Debug)]
pub struct BackoffIterator<'a> {
    config: &'a StrategyConfig,
    attempt: u32,
    current_delay: Duration,
    started_at: Instant,
    stop: Option<StopReason>,
}

impl<'a> BackoffIterator<'a> {
    /// Binds a fresh iterator to `config`; the clock starts now.
    ///
    /// Does not wait: the caller's first attempt happens immediately.
    pub fn start(config: &'a StrategyConfig) -> Self {
        Self {
            config,
            attempt: 0,
            current_delay: config.initial_delay,
            started_at: Instant::now(),
            stop: None,
        }
    }

    /// Rewinds this iterator in place to the fresh state, bound to `config`.
    ///
    /// A reset iterator behaves exactly like one returned by [`BackoffIterator::start`].
    pub fn reset(&mut self, config: &'a StrategyConfig) {
        *self = Self::start(config);
    }

    /// Advances the policy by one step and reports whether to attempt again.
    ///
    /// Returns `false` without waiting when the attempt cap is reached or when
    /// the next wait would overrun the total-duration budget. Otherwise waits
    /// for the step's delay and returns `true`, unless `cancel` fires during
    /// the wait, in which case it returns `false` immediately and
    /// [`BackoffIterator::was_stopped`] becomes `true`.
    ///
    /// Zero or negative delays do not wait and do not observe `cancel`.
    /// Once a terminal state is reached, further calls return `false` and change nothing.
    pub async fn next(&mut self, cancel: Option<&CancellationToken>) -> bool {
        if self.stop.is_some() {
            return false;
        }

        self.attempt = self.attempt.saturating_add(1);
        if let Some(max) = self.config.max_attempts
            && self.attempt >= max
        {
            return self.exhaust(ExhaustReason::MaxAttempts);
        }

        let delay = self.advance_delay();
        if self.config.max_total_duration.is_positive() {
            let projected = to_signed_duration(self.elapsed()).saturating_add(delay.max(Duration::ZERO));
            if projected > self.config.max_total_duration {
                return self.exhaust(ExhaustReason::MaxDuration);
            }
        }

        let sleep = to_sleep_duration(delay);
        if sleep.is_zero() {
            return true;
        }

        trace!(attempt = self.attempt, delay = ?sleep, "backoff wait");
        match wait(sleep, cancel).await {
            WaitOutcome::Elapsed => true,
            WaitOutcome::Cancelled => {
                self.stop = Some(StopReason::Cancelled);
                debug!(
                    attempt = self.attempt,
                    elapsed = ?self.elapsed(),
                    "backoff cancelled"
                );
                false
            }
        }
    }

    /// `true` only if the run ended because a cancellation signal interrupted a wait.
    pub fn was_stopped(&self) -> bool {
        self.stop.is_some_and(|s| s.is_external())
    }

    /// Terminal state, or `None` while the iterator can still continue.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Whether a terminal state has been reached.
    pub fn is_done(&self) -> bool {
        self.stop.is_some()
    }

    /// Number of `next` calls that advanced the policy.
    pub fn attempts(&self) -> u32 {
        self.attempt
    }

    /// Time since the run started (or was last reset).
    pub fn elapsed(&self) -> StdDuration {
        self.started_at.elapsed()
    }

    /// Delay the next wait would use, ignoring the attempt and duration bounds.
    pub fn peek_delay(&self) -> Duration {
        if self.config.regular {
            self.config.initial_delay
        } else {
            self.config.clamp_delay(self.current_delay)
        }
    }

    /// The policy driving this run.
    pub fn config(&self) -> &'a StrategyConfig {
        self.config
    }

    /// Picks this step's delay and moves `current_delay` forward.
    fn advance_delay(&mut self) -> Duration {
        if self.config.regular {
            return self.config.initial_delay;
        }
        let used = self.config.clamp_delay(self.current_delay);
        self.current_delay = self.config.grow_delay(self.current_delay);
        used
    }

    fn exhaust(&mut self, reason: ExhaustReason) -> bool {
        self.stop = Some(StopReason::Exhausted(reason));
        debug!(
            attempt = self.attempt,
            elapsed = ?self.elapsed(),
            %reason,
            "backoff exhausted"
        );
        false
    }
}

/// Starts iterators straight from a strategy value.
pub trait StrategyExt {
    /// Same as [`BackoffIterator::start`].
    fn start(&self) -> BackoffIterator<'_>;
}

impl StrategyExt for StrategyConfig {
    fn start(&self) -> BackoffIterator<'_> {
        BackoffIterator::start(self)
    }
}

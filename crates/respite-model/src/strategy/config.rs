use time::Duration;

/// Immutable description of a backoff policy.
///
/// A `StrategyConfig` is plain data: it is built once (directly, through the `with_*`
/// helpers, or by parsing text) and then shared read-only by any number of iterators.
///
/// Zero values mean "no bound":
/// - `max_delay == 0` — the per-attempt delay is not clamped;
/// - `growth_factor <= 1.0` — the delay does not grow;
/// - `max_total_duration == 0` — no cap on cumulative elapsed time.
///
/// `max_attempts` distinguishes "absent" (`None`, unbounded) from an explicit cap.
/// With `Some(n)` the caller gets at most `max(n, 1)` attempts, the first one being
/// the caller's own immediate try.
///
/// # Example
/// ```
/// use respite_model::StrategyConfig;
/// use time::Duration;
///
/// let cfg = StrategyConfig::new(Duration::milliseconds(100))
///     .with_max_delay(Duration::seconds(1))
///     .with_growth_factor(2.0)
///     .with_max_attempts(5);
///
/// assert_eq!(cfg.to_string(), "delay=100ms maxdelay=1s factor=2 maxcount=5");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrategyConfig {
    /// Delay used for the first wait; may be zero or negative (no wait).
    pub initial_delay: Duration,
    /// Upper clamp on the per-attempt delay, zero for unbounded.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each wait in exponential mode.
    pub growth_factor: f64,
    /// Hard cap on attempts, `None` for unbounded.
    pub max_attempts: Option<u32>,
    /// Hard cap on cumulative elapsed time, zero for unbounded.
    pub max_total_duration: Duration,
    /// Fixed-interval mode: every wait uses `initial_delay`.
    pub regular: bool,
}

impl StrategyConfig {
    /// Minimal strategy: constant `initial_delay`, no bounds.
    pub fn new(initial_delay: Duration) -> Self {
        Self {
            initial_delay,
            ..Self::default()
        }
    }

    pub fn with_max_delay(self, max_delay: Duration) -> Self {
        Self { max_delay, ..self }
    }

    /// Sets the growth factor; NaN and negative values mean "no growth" and are stored as `0.0`.
    pub fn with_growth_factor(self, growth_factor: f64) -> Self {
        let growth_factor = if growth_factor >= 0.0 {
            growth_factor
        } else {
            0.0
        };
        Self {
            growth_factor,
            ..self
        }
    }

    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            ..self
        }
    }

    pub fn with_max_total_duration(self, max_total_duration: Duration) -> Self {
        Self {
            max_total_duration,
            ..self
        }
    }

    pub fn with_regular(self, regular: bool) -> Self {
        Self { regular, ..self }
    }

    /// Whether delays grow between attempts.
    #[inline]
    pub fn grows(&self) -> bool {
        !self.regular && self.growth_factor > 1.0
    }

    /// Clamps a delay to [`StrategyConfig::max_delay`] when that cap is set.
    #[inline]
    pub fn clamp_delay(&self, delay: Duration) -> Duration {
        if self.max_delay.is_positive() && delay > self.max_delay {
            self.max_delay
        } else {
            delay
        }
    }

    /// Delay that follows `current` in exponential mode.
    ///
    /// Growth saturates instead of overflowing, and is capped at `max_delay`
    /// so the stored delay never runs away.
    pub fn grow_delay(&self, current: Duration) -> Duration {
        if !self.grows() {
            return current;
        }
        let next = Duration::saturating_seconds_f64(current.as_seconds_f64() * self.growth_factor);
        self.clamp_delay(next)
    }
}

use std::fmt;

/// Policy bound that ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustReason {
    /// The attempt cap was reached.
    MaxAttempts,
    /// The next wait would have overrun the total-duration budget.
    MaxDuration,
}

/// Why a [`super::BackoffIterator`] stopped.
///
/// Both variants are terminal; only [`StopReason::Cancelled`] counts as an external stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The policy ran out of attempts or time.
    Exhausted(ExhaustReason),
    /// A cancellation signal interrupted a wait.
    Cancelled,
}

impl StopReason {
    /// `true` only for [`StopReason::Cancelled`].
    pub fn is_external(&self) -> bool {
        matches!(self, StopReason::Cancelled)
    }
}

impl fmt::Display for ExhaustReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExhaustReason::MaxAttempts => "max-attempts",
            ExhaustReason::MaxDuration => "max-duration",
        };
        f.write_str(s)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Exhausted(reason) => write!(f, "exhausted ({reason})"),
            StopReason::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_cancellation_is_external() {
        assert!(StopReason::Cancelled.is_external());
        assert!(!StopReason::Exhausted(ExhaustReason::MaxAttempts).is_external());
        assert!(!StopReason::Exhausted(ExhaustReason::MaxDuration).is_external());
    }

    #[test]
    fn display_names() {
        assert_eq!(StopReason::Cancelled.to_string(), "cancelled");
        assert_eq!(
            StopReason::Exhausted(ExhaustReason::MaxDuration).to_string(),
            "exhausted (max-duration)"
        );
    }
}

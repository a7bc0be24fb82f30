use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;

use respite_core::{BackoffIterator, StopReason};
use respite_model::StrategyConfig;

/// Outcome of a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Elapsed time at each attempt, the immediate first one included.
    pub attempts: Vec<Duration>,
    /// Elapsed time when the iterator stopped.
    pub elapsed: Duration,
    pub reason: StopReason,
}

/// Drives `strategy` without doing any work between attempts.
///
/// Never returns for a strategy without bounds unless `cancel` fires.
/// The token is also checked between attempts, so strategies that never
/// wait still stop on cancellation.
pub async fn probe(strategy: &StrategyConfig, cancel: &CancellationToken) -> ProbeReport {
    let mut it = BackoffIterator::start(strategy);
    let mut attempts = Vec::new();

    loop {
        let at = it.elapsed();
        attempts.push(at);
        info!(
            attempt = attempts.len(),
            at = ?at,
            next_delay = ?it.peek_delay(),
            "attempt"
        );
        if !it.next(Some(cancel)).await {
            break;
        }
        // zero and negative delays return without waiting or polling the token
        if cancel.is_cancelled() {
            break;
        }
        tokio::task::yield_now().await;
    }

    let reason = match it.stop_reason() {
        Some(reason) => reason,
        None => {
            debug_assert!(cancel.is_cancelled(), "iterator still running without cancellation");
            StopReason::Cancelled
        }
    };
    ProbeReport {
        attempts,
        elapsed: it.elapsed(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use respite_core::ExhaustReason;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn reports_every_attempt_of_a_bounded_strategy() {
        let strategy: StrategyConfig = "delay=100ms factor=2 maxcount=4".parse().unwrap();
        let report = probe(&strategy, &CancellationToken::new()).await;

        assert_eq!(report.attempts, vec![ms(0), ms(100), ms(300), ms(700)]);
        assert_eq!(report.elapsed, ms(700));
        assert_eq!(
            report.reason,
            StopReason::Exhausted(ExhaustReason::MaxAttempts)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_ends_an_unbounded_probe() {
        let strategy = StrategyConfig::new(time::Duration::seconds(1));
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ms(2500)).await;
            trigger.cancel();
        });

        let report = probe(&strategy, &cancel).await;

        assert_eq!(report.attempts, vec![ms(0), ms(1000), ms(2000)]);
        assert_eq!(report.elapsed, ms(2500));
        assert_eq!(report.reason, StopReason::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_stops_on_cancelled_token() {
        let strategy: StrategyConfig = "delay=0".parse().unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let report = probe(&strategy, &cancel).await;

        assert_eq!(report.attempts, vec![ms(0)]);
        assert_eq!(report.reason, StopReason::Cancelled);
    }

    #[tokio::test]
    async fn zero_delay_yields_to_the_cancelling_task() {
        let strategy: StrategyConfig = "delay=-1ms".parse().unwrap();
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            trigger.cancel();
        });

        let report = probe(&strategy, &cancel).await;

        assert!(report.attempts.len() >= 2);
        assert_eq!(report.reason, StopReason::Cancelled);
    }
}

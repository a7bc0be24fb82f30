use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// How a cancellable wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WaitOutcome {
    Elapsed,
    Cancelled,
}

/// Sleeps for `delay`, returning early if `cancel` fires first.
///
/// The cancellation branch is polled first, so a token that is already
/// cancelled wins over a timer that is already due.
pub(crate) async fn wait(delay: Duration, cancel: Option<&CancellationToken>) -> WaitOutcome {
    let Some(token) = cancel else {
        tokio::time::sleep(delay).await;
        return WaitOutcome::Elapsed;
    };

    tokio::select! {
        biased;
        _ = token.cancelled() => WaitOutcome::Cancelled,
        _ = tokio::time::sleep(delay) => WaitOutcome::Elapsed,
    }
}

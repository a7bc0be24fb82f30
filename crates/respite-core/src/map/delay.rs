use std::time::Duration as StdDuration;

use time::Duration;

/// Converts a signed policy delay into something a timer can sleep for.
///
/// Zero and negative delays map to [`StdDuration::ZERO`].
pub fn to_sleep_duration(d: Duration) -> StdDuration {
    StdDuration::try_from(d).unwrap_or(StdDuration::ZERO)
}

/// Converts a measured elapsed time into the policy's signed domain, saturating at [`Duration::MAX`].
pub fn to_signed_duration(d: StdDuration) -> Duration {
    Duration::try_from(d).unwrap_or(Duration::MAX)
}

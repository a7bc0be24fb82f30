//! Field names of the textual strategy format.
//!
//! Errors carry these names so callers can match on the offending field
//! without parsing full messages.

/// Initial delay (required).
pub const FIELD_DELAY: &str = "delay";

/// Upper clamp on the per-attempt delay.
pub const FIELD_MAX_DELAY: &str = "maxdelay";

/// Growth multiplier applied after each wait.
pub const FIELD_FACTOR: &str = "factor";

/// Cap on the number of attempts.
pub const FIELD_MAX_COUNT: &str = "maxcount";

/// Cap on the cumulative elapsed time.
pub const FIELD_MAX_DURATION: &str = "maxduration";

/// Fixed-interval mode switch.
pub const FIELD_REGULAR: &str = "regular";

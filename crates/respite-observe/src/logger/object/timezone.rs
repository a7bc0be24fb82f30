use std::{fmt, str::FromStr, sync::OnceLock};

use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::logger::error::LoggerError;

/// Local offset captured once per process.
static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Timezone used for log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    /// UTC (default, always available).
    #[default]
    Utc,
    /// System local offset, detected by [`init_local_offset`].
    Local,
}

impl LoggerTimeZone {
    /// Offset to apply to UTC timestamps.
    pub fn offset(&self) -> UtcOffset {
        match self {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => init_local_offset(),
        }
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        })
    }
}

/// Detects and caches the local UTC offset.
///
/// Detection is unreliable once other threads exist on most Unix platforms, so
/// call this from `main()` before building a multi-threaded runtime. Falls back
/// to UTC when detection fails. Later calls are no-ops.
pub fn init_local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_utc() {
        assert_eq!(LoggerTimeZone::default(), LoggerTimeZone::Utc);
        assert_eq!(LoggerTimeZone::Utc.offset(), UtcOffset::UTC);
    }

    #[test]
    fn parses_case_insensitive() {
        for (input, want) in [
            ("utc", LoggerTimeZone::Utc),
            ("UTC", LoggerTimeZone::Utc),
            (" local ", LoggerTimeZone::Local),
            ("LOCAL", LoggerTimeZone::Local),
        ] {
            assert_eq!(input.parse::<LoggerTimeZone>().unwrap(), want, "input {input:?}");
        }
    }

    #[test]
    fn rejects_invalid_timezone() {
        assert!("".parse::<LoggerTimeZone>().is_err());
        assert!("pst".parse::<LoggerTimeZone>().is_err());
    }

    #[test]
    fn display_and_serde_use_lowercase_names() {
        assert_eq!(LoggerTimeZone::Local.to_string(), "local");
        assert_eq!(
            serde_json::to_string(&LoggerTimeZone::Local).unwrap(),
            r#""local""#
        );
        let tz: LoggerTimeZone = serde_json::from_str(r#""utc""#).unwrap();
        assert_eq!(tz, LoggerTimeZone::Utc);
    }

    #[test]
    fn local_offset_is_cached_and_sane() {
        let first = init_local_offset();
        assert_eq!(init_local_offset(), first);
        assert!(first.whole_hours().abs() <= 14);
    }
}

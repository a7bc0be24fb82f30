use std::fmt;

use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use super::LoggerTimeZone;

/// RFC3339 event timestamps in a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct LoggerTimer {
    offset: UtcOffset,
}

impl LoggerTimer {
    /// Timer for the given timezone; the offset is resolved once here.
    pub fn new(tz: LoggerTimeZone) -> Self {
        Self {
            offset: tz.offset(),
        }
    }

    fn render(&self, at: OffsetDateTime) -> String {
        at.to_offset(self.offset)
            .format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl FormatTime for LoggerTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", self.render(OffsetDateTime::now_utc()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn renders_utc_rfc3339() {
        let timer = LoggerTimer::new(LoggerTimeZone::Utc);
        let at = datetime!(2024-03-01 12:30:45 UTC);
        assert_eq!(timer.render(at), "2024-03-01T12:30:45Z");
    }

    #[test]
    fn renders_with_fixed_offset() {
        let timer = LoggerTimer {
            offset: UtcOffset::from_hms(3, 0, 0).unwrap(),
        };
        let at = datetime!(2024-03-01 23:00:00 UTC);
        assert_eq!(timer.render(at), "2024-03-02T02:00:00+03:00");
    }
}

//! Signed duration literals.
//!
//! Literals are a sequence of `<decimal><unit>` groups with an optional leading sign,
//! e.g. `100ms`, `1h30m`, `1.5s`, `-250us`. Supported units are `ns`, `us` (`µs`, `μs`),
//! `ms`, `s`, `m` and `h`. The bare literal `0` is accepted without a unit.
//!
//! Values are kept as [`time::Duration`] because negative delays are valid input.
use std::fmt::Write as _;

use thiserror::Error;
use time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// Reason a duration literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty literal")]
    Empty,

    #[error("expected a number at {0:?}")]
    MissingNumber(String),

    #[error("missing unit after {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("value out of range")]
    Overflow,
}

/// Parses a signed duration literal.
///
/// # Examples
/// ```
/// use respite_model::parse_duration;
/// use time::Duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
/// assert_eq!(parse_duration("-100ms").unwrap(), Duration::milliseconds(-100));
/// ```
pub fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    let (negative, mut rest) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationError::Empty);
    }

    // i64::MIN has one more unit of magnitude than i64::MAX.
    let limit = if negative {
        i64::MAX as u128 + 1
    } else {
        i64::MAX as u128
    };

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_end = digits_end(rest);
        let (int_digits, after_int) = rest.split_at(int_end);

        let (frac_digits, after_num) = match after_int.strip_prefix('.') {
            Some(frac) => frac.split_at(digits_end(frac)),
            None => ("", after_int),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationError::MissingNumber(rest.to_string()));
        }

        let unit_end = after_num
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_num.len());
        let (unit, tail) = after_num.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(rest.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        let whole = int_digits.bytes().try_fold(0u128, |acc, b| {
            acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
        });
        let whole = whole
            .and_then(|w| w.checked_mul(scale))
            .ok_or(DurationError::Overflow)?;

        let mut frac_scale = scale;
        let mut frac = 0u128;
        for b in frac_digits.bytes() {
            frac_scale /= 10;
            if frac_scale == 0 {
                break;
            }
            frac += u128::from(b - b'0') * frac_scale;
        }

        total = total
            .checked_add(whole)
            .and_then(|t| t.checked_add(frac))
            .filter(|t| *t <= limit)
            .ok_or(DurationError::Overflow)?;
        rest = tail;
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    Ok(Duration::nanoseconds(signed as i64))
}

/// Formats a duration as a literal that [`parse_duration`] reads back to the same value.
///
/// Whole hours and minutes are split out, sub-second values use the largest exact unit.
///
/// # Examples
/// ```
/// use respite_model::format_duration;
/// use time::Duration;
///
/// assert_eq!(format_duration(Duration::seconds(5400)), "1h30m");
/// assert_eq!(format_duration(Duration::milliseconds(-100)), "-100ms");
/// ```
pub fn format_duration(d: Duration) -> String {
    let nanos = d.whole_nanoseconds();
    if nanos == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if nanos < 0 {
        out.push('-');
    }
    let mut n = nanos.unsigned_abs();

    if n < NANOS_PER_SEC {
        let (value, unit) = if n % NANOS_PER_MILLI == 0 {
            (n / NANOS_PER_MILLI, "ms")
        } else if n % NANOS_PER_MICRO == 0 {
            (n / NANOS_PER_MICRO, "us")
        } else {
            (n, "ns")
        };
        let _ = write!(out, "{value}{unit}");
        return out;
    }

    let hours = n / NANOS_PER_HOUR;
    n %= NANOS_PER_HOUR;
    let minutes = n / NANOS_PER_MIN;
    n %= NANOS_PER_MIN;

    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    if n > 0 {
        let secs = n / NANOS_PER_SEC;
        let sub = n % NANOS_PER_SEC;
        if sub == 0 {
            let _ = write!(out, "{secs}s");
        } else {
            let frac = format!("{sub:09}");
            let _ = write!(out, "{secs}.{}s", frac.trim_end_matches('0'));
        }
    }
    out
}

fn digits_end(s: &str) -> usize {
    s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len())
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_units() {
        let cases = [
            ("1ns", Duration::nanoseconds(1)),
            ("100us", Duration::microseconds(100)),
            ("100µs", Duration::microseconds(100)),
            ("100ms", Duration::milliseconds(100)),
            ("2s", Duration::seconds(2)),
            ("1m", Duration::minutes(1)),
            ("24h", Duration::hours(24)),
        ];

        for (input, want) in cases {
            assert_eq!(parse_duration(input), Ok(want), "input {input:?}");
        }
    }

    #[test]
    fn parses_compound_and_fractional() {
        assert_eq!(parse_duration("1h30m"), Ok(Duration::minutes(90)));
        assert_eq!(parse_duration("1.5s"), Ok(Duration::milliseconds(1500)));
        assert_eq!(parse_duration(".5h"), Ok(Duration::minutes(30)));
        assert_eq!(parse_duration("1m0.25s"), Ok(Duration::milliseconds(60_250)));
    }

    #[test]
    fn parses_signs_and_zero() {
        assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
        assert_eq!(parse_duration("-0"), Ok(Duration::ZERO));
        assert_eq!(parse_duration("+5s"), Ok(Duration::seconds(5)));
        assert_eq!(parse_duration("-100ms"), Ok(Duration::milliseconds(-100)));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("-"), Err(DurationError::Empty));
        assert!(matches!(
            parse_duration("invalid"),
            Err(DurationError::MissingNumber(_))
        ));
        assert!(matches!(parse_duration("100"), Err(DurationError::MissingUnit(_))));
        assert!(matches!(parse_duration("10d"), Err(DurationError::UnknownUnit(u)) if u == "d"));
        assert!(matches!(parse_duration("1s 2s"), Err(DurationError::UnknownUnit(_))));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_duration("9999999999h"), Err(DurationError::Overflow));
        assert_eq!(
            parse_duration("99999999999999999999999999999999999999999ns"),
            Err(DurationError::Overflow)
        );
        assert_eq!(
            parse_duration("-9223372036854775808ns"),
            Ok(Duration::nanoseconds(i64::MIN))
        );
        assert_eq!(
            parse_duration("9223372036854775808ns"),
            Err(DurationError::Overflow)
        );
    }

    #[test]
    fn formats_canonical_literals() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::nanoseconds(1)), "1ns");
        assert_eq!(format_duration(Duration::microseconds(1500)), "1500us");
        assert_eq!(format_duration(Duration::milliseconds(100)), "100ms");
        assert_eq!(format_duration(Duration::seconds(90)), "1m30s");
        assert_eq!(format_duration(Duration::hours(24)), "24h");
        assert_eq!(format_duration(Duration::milliseconds(61_500)), "1m1.5s");
        assert_eq!(format_duration(Duration::milliseconds(-100)), "-100ms");
    }

    #[test]
    fn formatted_literals_parse_back() {
        for d in [
            Duration::nanoseconds(7),
            Duration::milliseconds(-2500),
            Duration::seconds(3725),
            Duration::nanoseconds(3_600_000_000_001),
        ] {
            assert_eq!(parse_duration(&format_duration(d)), Ok(d), "{d:?}");
        }
    }
}

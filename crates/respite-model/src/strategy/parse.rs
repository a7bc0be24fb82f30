//! Textual strategy format.
//!
//! A strategy is written as space-separated `key=value` tokens:
//!
//! ```text
//! delay=100ms maxdelay=1s factor=2 maxcount=5 maxduration=30s regular=false
//! ```
//!
//! - `delay` is required, the other keys are optional;
//! - durations use unit-suffixed literals (see [`crate::parse_duration`]);
//! - `factor` must be a non-negative number (`inf` included);
//! - unknown keys and tokens without `=` are rejected;
//! - a repeated key overrides the earlier occurrence.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Duration;

use crate::{
    StrategyConfig,
    domain::{
        Flag, KeyValue,
        constants::{
            FIELD_DELAY, FIELD_FACTOR, FIELD_MAX_COUNT, FIELD_MAX_DELAY, FIELD_MAX_DURATION,
            FIELD_REGULAR,
        },
        format_duration, parse_duration,
    },
    error::{ModelError, ModelResult},
};

/// Parses strategy text into a [`StrategyConfig`].
///
/// On failure no partial config is returned; the error names the offending field.
///
/// # Examples
/// ```
/// use respite_model::parse_strategy;
/// use time::Duration;
///
/// let cfg = parse_strategy("delay=100ms maxdelay=1s factor=2.0").unwrap();
/// assert_eq!(cfg.initial_delay, Duration::milliseconds(100));
/// assert_eq!(cfg.max_delay, Duration::seconds(1));
/// assert_eq!(cfg.growth_factor, 2.0);
///
/// let err = parse_strategy("maxdelay=1s").unwrap_err();
/// assert_eq!(err.field(), Some("delay"));
/// ```
pub fn parse_strategy(text: &str) -> ModelResult<StrategyConfig> {
    let mut delay = None;
    let mut cfg = StrategyConfig::default();

    for token in text.split_whitespace() {
        let kv = KeyValue::parse(token)?;
        let value = kv.value();
        match kv.key() {
            FIELD_DELAY => delay = Some(duration_field(FIELD_DELAY, value)?),
            FIELD_MAX_DELAY => cfg.max_delay = duration_field(FIELD_MAX_DELAY, value)?,
            FIELD_MAX_DURATION => {
                cfg.max_total_duration = duration_field(FIELD_MAX_DURATION, value)?
            }
            FIELD_FACTOR => cfg.growth_factor = factor_field(value)?,
            FIELD_MAX_COUNT => {
                let count = value
                    .parse::<u32>()
                    .map_err(|_| ModelError::MalformedInteger {
                        field: FIELD_MAX_COUNT,
                        value: value.to_string(),
                    })?;
                cfg.max_attempts = Some(count);
            }
            FIELD_REGULAR => {
                let flag = Flag::from_literal(value).ok_or_else(|| ModelError::MalformedBoolean {
                    field: FIELD_REGULAR,
                    value: value.to_string(),
                })?;
                cfg.regular = flag.is_enabled();
            }
            other => return Err(ModelError::UnknownField(other.to_string())),
        }
    }

    cfg.initial_delay = delay.ok_or(ModelError::MissingField(FIELD_DELAY))?;
    Ok(cfg)
}

fn duration_field(field: &'static str, value: &str) -> ModelResult<Duration> {
    parse_duration(value).map_err(|reason| ModelError::MalformedDuration {
        field,
        value: value.to_string(),
        reason,
    })
}

fn factor_field(value: &str) -> ModelResult<f64> {
    match value.parse::<f64>() {
        Ok(f) if f >= 0.0 => Ok(f),
        _ => Err(ModelError::MalformedNumber {
            field: FIELD_FACTOR,
            value: value.to_string(),
        }),
    }
}

impl FromStr for StrategyConfig {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        parse_strategy(s)
    }
}

/// Canonical textual form: `delay` first, then only the fields that differ from their defaults.
impl fmt::Display for StrategyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FIELD_DELAY}={}", format_duration(self.initial_delay))?;
        if !self.max_delay.is_zero() {
            write!(f, " {FIELD_MAX_DELAY}={}", format_duration(self.max_delay))?;
        }
        // NaN and negative factors never grow, which is what an absent key means.
        if self.growth_factor > 0.0 {
            write!(f, " {FIELD_FACTOR}={}", self.growth_factor)?;
        }
        if let Some(count) = self.max_attempts {
            write!(f, " {FIELD_MAX_COUNT}={count}")?;
        }
        if !self.max_total_duration.is_zero() {
            write!(
                f,
                " {FIELD_MAX_DURATION}={}",
                format_duration(self.max_total_duration)
            )?;
        }
        if self.regular {
            write!(f, " {FIELD_REGULAR}=true")?;
        }
        Ok(())
    }
}

impl Serialize for StrategyConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StrategyConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_strategy(&s).map_err(serde::de::Error::custom)
    }
}

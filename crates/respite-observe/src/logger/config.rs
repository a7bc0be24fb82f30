use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::{
    error::LoggerResult,
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

/// Environment variable holding the level filter (e.g. `info,respite_core=trace`).
pub const ENV_LOG_LEVEL: &str = "RESPITE_LOG";

/// Environment variable holding the output format (`text`, `json`, `journald`).
pub const ENV_LOG_FORMAT: &str = "RESPITE_LOG_FORMAT";

/// Environment variable holding the timestamp timezone (`utc`, `local`).
pub const ENV_LOG_TZ: &str = "RESPITE_LOG_TZ";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// `EnvFilter` expression.
    pub level: LoggerLevel,
    /// Timezone for timestamps.
    pub tz: LoggerTimeZone,
    /// Include event targets (module paths).
    pub with_targets: bool,
    /// Colored text output; only honored when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by [`ENV_LOG_LEVEL`], [`ENV_LOG_FORMAT`] and [`ENV_LOG_TZ`].
    ///
    /// Unset or empty variables keep their default; set but invalid ones are an error.
    pub fn from_env() -> LoggerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut cfg = Self::default();
        if let Some(level) = get(ENV_LOG_LEVEL) {
            cfg.level = level.parse()?;
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        if let Some(tz) = get(ENV_LOG_TZ) {
            cfg.tz = tz.parse()?;
        }
        Ok(cfg)
    }

    /// Whether ANSI colors should be emitted right now.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

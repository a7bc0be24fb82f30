mod config;
mod error;
mod log;
mod object;

pub use config::{ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_TZ, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, LoggerTimer, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a global subscriber is already set.
///
/// For [`LoggerTimeZone::Local`], call [`init_local_offset`] from `main()` before
/// the async runtime starts threads; otherwise timestamps fall back to UTC.
///
/// # Examples
/// ```rust
/// use respite_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger must initialize once");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => log::init_text(cfg),
        LoggerFormat::Json => log::init_json(cfg),
        LoggerFormat::Journald => log::init_journald(cfg),
    }
}

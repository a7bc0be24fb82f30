mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod timer;
pub use timer::LoggerTimer;

mod timezone;
pub use timezone::{LoggerTimeZone, init_local_offset};

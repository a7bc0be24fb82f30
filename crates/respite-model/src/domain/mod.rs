mod kv;
pub use kv::KeyValue;

mod flag;
pub use flag::Flag;

mod duration;
pub use duration::{DurationError, format_duration, parse_duration};

pub mod constants;

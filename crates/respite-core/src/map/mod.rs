mod delay;

pub use delay::{to_signed_duration, to_sleep_duration};

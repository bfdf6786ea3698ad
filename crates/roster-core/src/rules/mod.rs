pub mod timeout;

pub use timeout::{validate_timeout_secs, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};

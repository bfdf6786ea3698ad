use crate::error::CoreError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;

pub fn validate_timeout_secs(value: u64) -> Result<u64, CoreError> {
    if value == 0 || value > MAX_TIMEOUT_SECS {
        return Err(CoreError::InvalidTimeoutSecs(value));
    }
    Ok(value)
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid timeout seconds: {0}")]
    InvalidTimeoutSecs(u64),
}

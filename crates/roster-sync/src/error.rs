use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("http request failed")]
    Http(#[from] reqwest::Error),
    #[error("invalid url")]
    Url(#[from] url::ParseError),
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("invalid user payload: {0}")]
    Decode(String),
    #[error("user record {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("user record {index} has a non-string `{field}`")]
    InvalidField { index: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, SyncError>;

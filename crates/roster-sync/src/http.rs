use crate::payload::{decode_records, RawRecord};
use crate::source::UserSource;
use crate::{Result, SyncError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpUserSource {
    url: String,
    timeout: Duration,
    user_agent: String,
}

impl HttpUserSource {
    pub fn new(url: String, timeout: Duration, user_agent: String) -> Self {
        Self {
            url,
            timeout,
            user_agent,
        }
    }
}

impl UserSource for HttpUserSource {
    fn source_name(&self) -> &'static str {
        "http"
    }

    fn fetch_users(&self) -> Result<Vec<RawRecord>> {
        fetch_users(&self.url, self.timeout, &self.user_agent)
    }
}

/// Issues one GET to `url` and decodes the body as a JSON array of objects.
/// `timeout` bounds the whole request, from connect to the last body byte.
pub fn fetch_users(url: &str, timeout: Duration, user_agent: &str) -> Result<Vec<RawRecord>> {
    let url = Url::parse(url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SyncError::UnsupportedScheme(url.scheme().to_string()));
    }

    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;

    debug!(url = %url, timeout_secs = timeout.as_secs(), "fetching users");
    let response = client.get(url).send()?.error_for_status()?;
    debug!(status = %response.status(), "users response received");

    let body = response.text()?;
    let records = decode_records(&body)?;
    debug!(count = records.len(), "user payload decoded");
    Ok(records)
}

use crate::payload::RawRecord;
use crate::Result;

/// Anything that can produce the raw user payload in one call.
pub trait UserSource {
    fn source_name(&self) -> &'static str;
    fn fetch_users(&self) -> Result<Vec<RawRecord>>;
}

pub mod error;
pub mod http;
pub mod payload;
pub mod source;

pub use error::{Result, SyncError};
pub use http::HttpUserSource;
pub use payload::{decode_records, extract_user, RawRecord, RawUser};
pub use source::UserSource;

pub mod csv;
pub mod domain;
pub mod error;
pub mod rules;

pub use csv::{encode_user, write_user};
pub use domain::*;
pub use error::CoreError;
pub use rules::*;

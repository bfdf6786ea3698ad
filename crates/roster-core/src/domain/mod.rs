pub mod email;
pub mod phone;
pub mod user;

pub use email::normalize_email;
pub use phone::normalize_phone;
pub use user::NormalizedUser;

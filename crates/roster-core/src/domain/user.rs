use crate::domain::email::normalize_email;
use crate::domain::phone::normalize_phone;

/// A user record after email and phone normalization.
///
/// `email` is `None` when the raw address failed validation. `phone` holds
/// ASCII digits only. `name` and `city` are kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUser {
    name: String,
    email: Option<String>,
    phone: String,
    city: String,
}

impl NormalizedUser {
    pub fn normalize(name: &str, email: &str, phone: &str, city: &str) -> Self {
        Self {
            name: name.to_string(),
            email: normalize_email(email),
            phone: normalize_phone(phone),
            city: city.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

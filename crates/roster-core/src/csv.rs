use crate::domain::NormalizedUser;
use std::io::{self, Write};

/// Renders one record as `"name","email","phone","city"` plus a newline.
///
/// Fields are quoted but not escaped; values containing `"` produce a line
/// that strict CSV readers will reject. An absent email renders as `""`.
pub fn encode_user(user: &NormalizedUser) -> String {
    format!(
        "\"{}\",\"{}\",\"{}\",\"{}\"\n",
        user.name(),
        user.email().unwrap_or_default(),
        user.phone(),
        user.city()
    )
}

pub fn write_user<W: Write + ?Sized>(out: &mut W, user: &NormalizedUser) -> io::Result<()> {
    out.write_all(encode_user(user).as_bytes())
}

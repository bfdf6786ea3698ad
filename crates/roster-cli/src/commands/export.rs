use anyhow::{Context as _, Result};
use roster_core::NormalizedUser;
use roster_store::UserCollection;
use roster_sync::{extract_user, UserSource};
use std::io::Write;
use tracing::debug;

pub const FETCH_FAILED: &str = "Failed to fetch user data from the JSON server";
pub const INVALID_RECORD: &str = "Invalid user data from the JSON server";

/// Fetches every user, normalizes them, and writes one CSV line per user.
///
/// Nothing reaches `out` unless the fetch and every record succeed.
pub fn export_users<W: Write + ?Sized>(source: &dyn UserSource, out: &mut W) -> Result<usize> {
    let records = source
        .fetch_users()
        .inspect_err(|err| debug!(source = source.source_name(), error = %err, "fetch failed"))
        .context(FETCH_FAILED)?;

    let mut users = UserCollection::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let raw = extract_user(index, record).context(INVALID_RECORD)?;
        let user = NormalizedUser::normalize(&raw.name, &raw.email, &raw.phone, &raw.city);
        if user.email().is_none() {
            debug!(index, "email failed validation, exporting it empty");
        }
        users.add(user);
    }

    users.emit_all(out).context("write CSV output")
}

pub mod error;

use crate::error::Result;
use roster_core::{write_user, NormalizedUser};
use std::io::Write;
use tracing::debug;

/// Append-only, insertion-ordered collection of normalized users.
#[derive(Debug, Default)]
pub struct UserCollection {
    users: Vec<NormalizedUser>,
}

impl UserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, user: NormalizedUser) {
        self.users.push(user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedUser> {
        self.users.iter()
    }

    /// Writes every user as one CSV line, in insertion order, then flushes.
    /// Returns the number of lines written.
    pub fn emit_all<W: Write + ?Sized>(&self, out: &mut W) -> Result<usize> {
        for user in &self.users {
            write_user(out, user)?;
        }
        out.flush()?;
        debug!(count = self.users.len(), "users emitted");
        Ok(self.users.len())
    }
}

impl<'a> IntoIterator for &'a UserCollection {
    type Item = &'a NormalizedUser;
    type IntoIter = std::slice::Iter<'a, NormalizedUser>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<NormalizedUser> for UserCollection {
    fn extend<T: IntoIterator<Item = NormalizedUser>>(&mut self, iter: T) {
        self.users.extend(iter);
    }
}

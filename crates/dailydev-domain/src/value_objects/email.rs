//! Email address value object

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Email address in its canonical form: trimmed and lower-cased.
///
/// Uniqueness of users is decided on this form, which makes the check
/// case-insensitive for every storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalise a raw email, rejecting blank input
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Error::missing_field("email"));
        }
        Ok(Self(normalized))
    }

    /// Canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Email address value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A contact email with a simple `local@domain.tld` shape.
///
/// This mirrors the platform's client-side check: exactly one `@` with a
/// non-empty local part, and a dot somewhere after the `@`. Full RFC 5322
/// parsing is deliberately out of scope; the server owns the final word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if !Self::is_well_formed(&raw) {
            return Err(DomainError::validation("Invalid email format!"));
        }
        Ok(Self(raw))
    }

    /// Shape check: one `@`, no whitespace, a dot strictly inside the domain.
    fn is_well_formed(raw: &str) -> bool {
        let mut parts = raw.splitn(2, '@');
        let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
            return false;
        };
        if local.is_empty() || domain.is_empty() {
            return false;
        }
        if raw.chars().any(char::is_whitespace) || domain.contains('@') {
            return false;
        }
        // Needs a dot with something on both sides.
        match domain.rfind('.') {
            Some(i) => i > 0 && i + 1 < domain.len(),
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

//! Store name value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Minimum length accepted for a store name.
pub const MIN_NAME_LEN: usize = 3;

/// A store display name, at least [`MIN_NAME_LEN`] characters long.
///
/// Compared by value; construction is the only validation point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreName(String);

impl StoreName {
    /// Parse a raw name, rejecting anything shorter than [`MIN_NAME_LEN`].
    ///
    /// Length is counted in characters, not bytes, so multi-byte names are
    /// not penalized.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.chars().count() < MIN_NAME_LEN {
            return Err(DomainError::validation(
                "Store name must be at least 3 characters long",
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for StoreName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

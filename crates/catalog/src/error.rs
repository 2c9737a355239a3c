//! Catalog error taxonomy.

use thiserror::Error;

/// Failure modes of a catalog fetch.
///
/// `NotFound` and `Transport` are deliberately separate variants: the
/// original storefront collapsed every failure into "not found", which
/// hides outages from the caller. Views may still render them alike.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no product with the requested identifier.
    #[error("product not found")]
    NotFound,

    /// The catalog service could not be reached or answered malformed.
    #[error("catalog request failed: {0}")]
    Transport(String),
}

impl CatalogError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// True for failures the user cannot correct by changing input.
    pub fn is_transient(&self) -> bool {
        matches!(self, CatalogError::Transport(_))
    }
}

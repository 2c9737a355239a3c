//! Observable fetch lifecycle.

use crate::error::CatalogError;

/// The three observable states of a single-shot catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Fetch issued, no response yet.
    Loading,
    /// Fetch completed; an empty list is still `Loaded`.
    Loaded(T),
    /// Fetch failed; see [`CatalogError`] for whether it was transient.
    Failed(CatalogError),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(err) => FetchState::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result_maps_both_arms() {
        assert_eq!(
            FetchState::from_result(Ok(1)),
            FetchState::Loaded(1)
        );
        assert_eq!(
            FetchState::<i32>::from_result(Err(CatalogError::NotFound)),
            FetchState::Failed(CatalogError::NotFound)
        );
    }

    #[test]
    fn empty_list_is_still_loaded() {
        let state = FetchState::Loaded(Vec::<i32>::new());
        assert!(state.loaded().is_some_and(Vec::is_empty));
    }
}

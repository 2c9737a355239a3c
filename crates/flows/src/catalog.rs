//! Catalog read flow.
//!
//! Each page view owns a [`CatalogSession`]; fetches are stamped with a
//! generation so a response from a superseded fetch is discarded instead of
//! clobbering newer state.

use storekit_catalog::{CatalogError, FetchState, Product, ProductId};
use storekit_client::CatalogApi;

use crate::cancel::{run_until_cancelled, CancelToken};

/// Generation-guarded fetch state for one view.
#[derive(Debug)]
pub struct CatalogSession<T> {
    generation: u64,
    state: FetchState<T>,
}

impl<T> Default for CatalogSession<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: FetchState::Loading,
        }
    }
}

impl<T> CatalogSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a fetch: bump the generation and enter `Loading`.
    ///
    /// The returned stamp must accompany the eventual result; any result
    /// stamped with an older generation is stale.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    /// Apply a completed fetch. Returns false (and changes nothing) when
    /// the stamp no longer matches the current generation.
    pub fn complete(&mut self, stamp: u64, result: Result<T, CatalogError>) -> bool {
        if stamp != self.generation {
            tracing::debug!(stamp, current = self.generation, "discarding stale response");
            return false;
        }
        self.state = FetchState::from_result(result);
        true
    }
}

/// Fetch the full product list into `session`.
///
/// Cancellation leaves the session in `Loading` with nothing applied.
pub async fn load_products<A: CatalogApi>(
    session: &mut CatalogSession<Vec<Product>>,
    api: &A,
    cancel: &mut CancelToken,
) {
    let stamp = session.begin();
    if let Some(result) = run_until_cancelled(cancel, api.list_products()).await {
        session.complete(stamp, result);
    }
}

/// Fetch one product by id into `session`.
pub async fn load_product<A: CatalogApi>(
    session: &mut CatalogSession<Product>,
    api: &A,
    id: &ProductId,
    cancel: &mut CancelToken,
) {
    let stamp = session.begin();
    if let Some(result) = run_until_cancelled(cancel, api.get_product(id)).await {
        session.complete(stamp, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelGuard;

    /// Scripted catalog double.
    struct FakeCatalog {
        products: Vec<Product>,
        fail_with: Option<CatalogError>,
    }

    impl FakeCatalog {
        fn with_products(products: Vec<Product>) -> Self {
            Self {
                products,
                fail_with: None,
            }
        }

        fn failing(err: CatalogError) -> Self {
            Self {
                products: Vec::new(),
                fail_with: Some(err),
            }
        }
    }

    impl CatalogApi for FakeCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(self.products.clone()),
            }
        }

        async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.products
                .iter()
                .find(|p| &p.id == id)
                .cloned()
                .ok_or(CatalogError::NotFound)
        }
    }

    fn product(id: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": format!("product {id}"),
            "price": 99.0,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn loads_product_list() {
        let api = FakeCatalog::with_products(vec![product("1"), product("2")]);
        let mut session = CatalogSession::new();
        let mut cancel = CancelToken::never();

        load_products(&mut session, &api, &mut cancel).await;
        let loaded = session.state().loaded().unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[tokio::test]
    async fn empty_catalog_is_loaded_not_failed() {
        let api = FakeCatalog::with_products(Vec::new());
        let mut session = CatalogSession::new();
        let mut cancel = CancelToken::never();

        load_products(&mut session, &api, &mut cancel).await;
        assert_eq!(session.state(), &FetchState::Loaded(Vec::new()));
    }

    #[tokio::test]
    async fn missing_product_is_not_found_not_transport() {
        let api = FakeCatalog::with_products(vec![product("1")]);
        let mut session = CatalogSession::new();
        let mut cancel = CancelToken::never();

        load_product(&mut session, &api, &ProductId::from("nope"), &mut cancel).await;
        assert_eq!(
            session.state(),
            &FetchState::Failed(CatalogError::NotFound)
        );
    }

    #[tokio::test]
    async fn transport_failure_is_kept_distinct() {
        let api = FakeCatalog::failing(CatalogError::transport("connection refused"));
        let mut session = CatalogSession::new();
        let mut cancel = CancelToken::never();

        load_products(&mut session, &api, &mut cancel).await;
        match session.state() {
            FetchState::Failed(err) => assert!(err.is_transient()),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let mut session = CatalogSession::new();
        let first = session.begin();
        let second = session.begin();

        // The slower first fetch resolves after a newer one started.
        assert!(!session.complete(first, Ok(vec![product("old")])));
        assert!(session.state().is_loading());

        assert!(session.complete(second, Ok(vec![product("new")])));
        let loaded = session.state().loaded().unwrap();
        assert_eq!(loaded[0].id.as_str(), "new");
    }

    #[tokio::test]
    async fn cancelled_fetch_applies_nothing() {
        let api = FakeCatalog::with_products(vec![product("1")]);
        let mut session = CatalogSession::new();
        let (guard, mut cancel) = CancelGuard::new();
        guard.cancel();

        load_products(&mut session, &api, &mut cancel).await;
        assert!(session.state().is_loading());
    }
}

//! Trait seams for the two external services.
//!
//! Flows depend on these traits rather than on the concrete HTTP client,
//! which keeps them testable with in-memory fakes.

use storekit_catalog::{CatalogError, Product, ProductId};
use storekit_core::Fqdn;
use storekit_store::{NewStore, StoreRecord};

use crate::availability::Availability;
use crate::error::ApiError;

/// Subdomain availability checks against the domain service.
pub trait DomainApi {
    /// Ask whether `fqdn` is still free.
    ///
    /// Transport failure is distinct from [`Availability::Taken`]; callers
    /// must not conflate the two.
    fn check_domain(
        &self,
        fqdn: &Fqdn,
    ) -> impl Future<Output = Result<Availability, ApiError>> + Send;
}

/// Store creation against the domain/store service.
pub trait StoreApi {
    fn create_store(
        &self,
        store: &NewStore,
    ) -> impl Future<Output = Result<StoreRecord, ApiError>> + Send;
}

/// Read-only access to the product service.
pub trait CatalogApi {
    fn list_products(
        &self,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    fn get_product(
        &self,
        id: &ProductId,
    ) -> impl Future<Output = Result<Product, CatalogError>> + Send;
}

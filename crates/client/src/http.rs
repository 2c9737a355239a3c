//! `reqwest`-backed implementation of the service traits.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use storekit_catalog::{CatalogError, Product, ProductId};
use storekit_core::Fqdn;
use storekit_store::{NewStore, StoreRecord};

use crate::api::{CatalogApi, DomainApi, StoreApi};
use crate::availability::Availability;
use crate::config::ClientConfig;
use crate::error::ApiError;

/// HTTP client for both external services.
///
/// One connection pool, explicit timeouts from [`ClientConfig`], no retry.
pub struct PlatformClient {
    client: Client,
    config: ClientConfig,
}

impl PlatformClient {
    /// Build a client with the configured timeout policy.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(ApiError::Http)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn read_success_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(ApiError::Http)?;
        if !status.is_success() {
            return Err(ApiError::status(status.as_u16(), body));
        }
        Ok(body)
    }
}

/// Either a bare JSON payload or the `{ "data": ... }` envelope some
/// deployments wrap responses in.
#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeEnveloped<T> {
    Enveloped { data: T },
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    fn into_inner(self) -> T {
        match self {
            MaybeEnveloped::Enveloped { data } => data,
            MaybeEnveloped::Bare(value) => value,
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<MaybeEnveloped<T>>(body)
        .map(MaybeEnveloped::into_inner)
        .map_err(|e| ApiError::decode(e.to_string()))
}

impl DomainApi for PlatformClient {
    async fn check_domain(&self, fqdn: &Fqdn) -> Result<Availability, ApiError> {
        let url = format!("{}/domains/check/{}", self.config.store_base_url, fqdn);
        tracing::debug!(%fqdn, "checking domain availability");

        let response = self.client.get(&url).send().await.map_err(ApiError::Http)?;
        let body = Self::read_success_body(response).await?;
        let availability = Availability::from_body(&body);
        tracing::debug!(%fqdn, ?availability, "availability check complete");
        Ok(availability)
    }
}

impl StoreApi for PlatformClient {
    async fn create_store(&self, store: &NewStore) -> Result<StoreRecord, ApiError> {
        let url = format!("{}/stores/create", self.config.store_base_url);
        tracing::debug!(domain = %store.domain, "creating store");

        let response = self
            .client
            .post(&url)
            .json(store)
            .send()
            .await
            .map_err(ApiError::Http)?;
        let body = Self::read_success_body(response).await?;
        decode(&body)
    }
}

impl CatalogApi for PlatformClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/product", self.config.products_base_url);
        tracing::debug!("fetching product list");

        let result: Result<Vec<Product>, ApiError> = async {
            let response = self.client.get(&url).send().await.map_err(ApiError::Http)?;
            let body = Self::read_success_body(response).await?;
            decode(&body)
        }
        .await;
        result.map_err(into_catalog_error)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let url = format!("{}/product/{}", self.config.products_base_url, id);
        tracing::debug!(%id, "fetching product");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| into_catalog_error(ApiError::Http(e)))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        let body = Self::read_success_body(response)
            .await
            .map_err(into_catalog_error)?;
        decode(&body).map_err(into_catalog_error)
    }
}

/// Collapse adapter failures into the catalog taxonomy, keeping the
/// not-found/transport distinction made above.
fn into_catalog_error(err: ApiError) -> CatalogError {
    CatalogError::transport(err.to_string())
}

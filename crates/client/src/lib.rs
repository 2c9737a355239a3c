//! HTTP client adapter for the platform's two external services.
//!
//! Wraps the domain/store service (availability check + store creation)
//! and the public product service behind small trait seams, translating
//! transport failures into a uniform error signal.

pub mod api;
pub mod availability;
pub mod config;
pub mod error;
pub mod http;

pub use api::{CatalogApi, DomainApi, StoreApi};
pub use availability::Availability;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::PlatformClient;

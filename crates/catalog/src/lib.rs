//! Read-only product catalog domain module.
//!
//! Types for the external catalog service: the product model, the fetch
//! lifecycle states, and an error taxonomy that keeps "no such product"
//! distinct from transport failure.

pub mod error;
pub mod product;
pub mod state;

pub use error::CatalogError;
pub use product::{Product, ProductId};
pub use state::FetchState;

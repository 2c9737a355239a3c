//! `storekit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! validated value objects for store onboarding and the fixed option sets the
//! platform supports.

pub mod domain;
pub mod email;
pub mod error;
pub mod name;
pub mod options;

pub use domain::{DomainLabel, Fqdn, BASE_DOMAIN};
pub use email::EmailAddress;
pub use error::{DomainError, DomainResult};
pub use name::StoreName;
pub use options::{Country, Currency, StoreCategory};

//! Flow orchestration: the store submission pipeline and the catalog read
//! session, both bound to scope-owned cancellation.

pub mod cancel;
pub mod catalog;
pub mod submit;

pub use cancel::{run_until_cancelled, CancelGuard, CancelToken};
pub use catalog::{load_product, load_products, CatalogSession};
pub use submit::{SubmissionFlow, SubmitError};

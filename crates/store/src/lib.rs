//! Store onboarding domain module.
//!
//! This crate contains the store-creation draft, its wholesale validation
//! pass, and the wire payload/record types — implemented purely as
//! deterministic domain logic (no IO, no HTTP).

pub mod draft;
pub mod errors;
pub mod payload;
pub mod record;

pub use draft::StoreDraft;
pub use errors::{FieldErrors, DOMAIN_TAKEN_MESSAGE};
pub use payload::NewStore;
pub use record::StoreRecord;

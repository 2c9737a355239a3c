//! Store submission pipeline.
//!
//! Validate → availability check → create, with an early return at each
//! step. At most two network calls per attempt, always in that order; the
//! create call is skipped entirely unless the check answered `Available`.

use thiserror::Error;

use storekit_client::{ApiError, DomainApi, StoreApi};
use storekit_core::DomainError;
use storekit_store::{FieldErrors, StoreDraft, StoreRecord};

use crate::cancel::{run_until_cancelled, CancelToken};

/// Why a submission attempt did not create a store.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Field-level validation failed; no network call was made.
    #[error("draft has invalid fields")]
    Invalid(FieldErrors),

    /// The draft is missing something validation does not cover
    /// (currently: no category selected). No network call was made.
    #[error("draft is incomplete: {0}")]
    IncompleteDraft(#[source] DomainError),

    /// The requested subdomain is already claimed.
    #[error("domain is not available")]
    Unavailable,

    /// A transport/server failure on either call; not user-correctable.
    #[error("network failure: {0}")]
    Network(#[source] ApiError),

    /// The owning scope was torn down mid-flight.
    #[error("submission cancelled")]
    Cancelled,
}

/// Owned state of one store-creation session: the draft plus the latest
/// field-error map. No shared mutable state; one instance per form.
#[derive(Debug, Default)]
pub struct SubmissionFlow {
    draft: StoreDraft,
    errors: FieldErrors,
}

impl SubmissionFlow {
    pub fn new(draft: StoreDraft) -> Self {
        Self {
            draft,
            errors: FieldErrors::default(),
        }
    }

    pub fn draft(&self) -> &StoreDraft {
        &self.draft
    }

    /// Mutable access for the presentation layer's field bindings.
    pub fn draft_mut(&mut self) -> &mut StoreDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Run one submission attempt.
    ///
    /// The field-error map is replaced wholesale at each step that produces
    /// one; transport failures leave it untouched so the form stays
    /// resubmittable. On success the draft resets to its defaults.
    pub async fn submit<A>(
        &mut self,
        api: &A,
        cancel: &mut CancelToken,
    ) -> Result<StoreRecord, SubmitError>
    where
        A: DomainApi + StoreApi,
    {
        let errors = self.draft.validate();
        self.errors = errors.clone();
        if !errors.is_clean() {
            tracing::debug!(?errors, "draft rejected by validation");
            return Err(SubmitError::Invalid(errors));
        }

        let new_store = self
            .draft
            .to_new_store()
            .map_err(SubmitError::IncompleteDraft)?;

        let fqdn = new_store.domain.fully_qualified();
        let availability = run_until_cancelled(cancel, api.check_domain(&fqdn))
            .await
            .ok_or(SubmitError::Cancelled)?
            .map_err(SubmitError::Network)?;

        if !availability.is_available() {
            tracing::info!(%fqdn, "domain is taken");
            self.errors = FieldErrors::domain_taken();
            return Err(SubmitError::Unavailable);
        }

        let record = run_until_cancelled(cancel, api.create_store(&new_store))
            .await
            .ok_or(SubmitError::Cancelled)?
            .map_err(SubmitError::Network)?;

        tracing::info!(store_id = %record.id, domain = %record.domain, "store created");
        self.draft.reset();
        self.errors = FieldErrors::default();
        Ok(record)
    }
}

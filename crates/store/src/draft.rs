//! In-progress store creation form data.

use storekit_core::{
    Country, Currency, DomainError, DomainLabel, DomainResult, EmailAddress, StoreCategory,
    StoreName,
};

use crate::errors::FieldErrors;
use crate::payload::NewStore;

/// Owned state of one store-creation form session.
///
/// Free-text fields hold raw user input; nothing is validated until a
/// wholesale [`validate`](StoreDraft::validate) pass. The draft lives for
/// one session and is reset to defaults on successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDraft {
    pub name: String,
    pub domain: String,
    pub email: String,
    pub country: Country,
    pub currency: Currency,
    pub category: Option<StoreCategory>,
}

impl Default for StoreDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            domain: String::new(),
            email: String::new(),
            country: Country::default(),
            currency: Currency::default(),
            category: None,
        }
    }
}

impl StoreDraft {
    /// Restore the draft to its default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Wholesale validation pass over the user-correctable fields.
    ///
    /// Every field is checked even when an earlier one fails; the returned
    /// map is complete and replaces any previous one.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: StoreName::parse(self.name.clone()).err().map(message_of),
            domain: DomainLabel::parse(self.domain.clone()).err().map(message_of),
            email: EmailAddress::parse(self.email.clone()).err().map(message_of),
        }
    }

    /// Build the creation payload from a draft that passed validation.
    ///
    /// Fails only on problems [`validate`](StoreDraft::validate) does not
    /// cover (currently: no category selected).
    pub fn to_new_store(&self) -> DomainResult<NewStore> {
        let category = self
            .category
            .ok_or_else(|| DomainError::validation("a store category must be selected"))?;
        Ok(NewStore {
            name: StoreName::parse(self.name.clone())?,
            currency: self.currency,
            country: self.country,
            domain: DomainLabel::parse(self.domain.clone())?,
            category,
            email: EmailAddress::parse(self.email.clone())?,
        })
    }
}

fn message_of(err: DomainError) -> String {
    match err {
        DomainError::Validation(msg) | DomainError::UnsupportedOption(msg) => msg,
    }
}

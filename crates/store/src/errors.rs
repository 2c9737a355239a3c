//! Per-field validation errors for the store-creation draft.

/// Message set on the domain field when the availability check says taken.
pub const DOMAIN_TAKEN_MESSAGE: &str =
    "Domain is not available. Please try a different domain name.";

/// Human-readable errors for the three user-correctable fields.
///
/// A validation pass always produces a complete map; it is replaced
/// wholesale, never merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    /// True when no field carries an error.
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.domain.is_none() && self.email.is_none()
    }

    /// A map with only the fixed domain-taken message set.
    pub fn domain_taken() -> Self {
        Self {
            domain: Some(DOMAIN_TAKEN_MESSAGE.to_string()),
            ..Self::default()
        }
    }

    /// Iterate populated entries as `(field, message)` pairs, in field order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("domain", self.domain.as_deref()),
            ("email", self.email.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.map(|m| (field, m)))
    }
}

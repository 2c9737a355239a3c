//! Subdomain label and fully-qualified domain composition.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Base domain under which every store subdomain is provisioned.
pub const BASE_DOMAIN: &str = "expressitbd.com";

/// An unqualified subdomain label, always stored lowercase.
///
/// Lowercasing happens at construction so both the availability check and
/// the create call see the same canonical form regardless of input casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainLabel(String);

impl DomainLabel {
    /// Parse a raw label: non-empty, no dots (unqualified), no whitespace.
    /// Uppercase input is accepted and canonicalized to lowercase.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::validation("domain label cannot be empty"));
        }
        if raw.contains('.') {
            return Err(DomainError::validation(
                "domain must be an unqualified label (no dots)",
            ));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(
                "domain label cannot contain whitespace",
            ));
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Compose the fully-qualified domain used for the availability check.
    pub fn fully_qualified(&self) -> Fqdn {
        Fqdn(format!("{}.{}", self.0, BASE_DOMAIN))
    }
}

impl core::fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully-qualified store domain (`<label>.<BASE_DOMAIN>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fqdn(String);

impl Fqdn {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Fqdn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_on_construction() {
        let label = DomainLabel::parse("MyShop").unwrap();
        assert_eq!(label.as_str(), "myshop");
    }

    #[test]
    fn fqdn_appends_base_domain() {
        let label = DomainLabel::parse("MYSHOP").unwrap();
        assert_eq!(label.fully_qualified().as_str(), "myshop.expressitbd.com");
    }

    #[test]
    fn rejects_empty_dotted_and_spaced_labels() {
        assert!(DomainLabel::parse("").is_err());
        assert!(DomainLabel::parse("a.b").is_err());
        assert!(DomainLabel::parse("a b").is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the FQDN is always `lowercase(label) + "." + base`,
            /// independent of input casing.
            #[test]
            fn fqdn_is_lowercased_label_plus_base(raw in "[A-Za-z0-9-]{1,24}") {
                let label = DomainLabel::parse(raw.clone()).unwrap();
                let expected = format!("{}.{}", raw.to_lowercase(), BASE_DOMAIN);
                let fqdn = label.fully_qualified();
                prop_assert_eq!(fqdn.as_str(), expected.as_str());
            }
        }
    }
}

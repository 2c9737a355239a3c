//! Fixed option sets the platform supports.
//!
//! The hosted platform currently launches stores in one market, so country
//! and currency are single-variant enums rather than free strings. Keeping
//! them as enums means adding a market is a type-level change, not a data
//! audit.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Store location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Bangladesh,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Bangladesh => "Bangladesh",
        }
    }
}

/// Store trading currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Bangladeshi Taka.
    #[default]
    #[serde(rename = "BDT")]
    Bdt,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Bdt => "BDT",
        }
    }
}

/// Store category, one of the fixed set offered at onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreCategory {
    Fashion,
    Electronics,
    Home,
    Beauty,
}

impl StoreCategory {
    pub const ALL: [StoreCategory; 4] = [
        StoreCategory::Fashion,
        StoreCategory::Electronics,
        StoreCategory::Home,
        StoreCategory::Beauty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreCategory::Fashion => "Fashion",
            StoreCategory::Electronics => "Electronics",
            StoreCategory::Home => "Home",
            StoreCategory::Beauty => "Beauty",
        }
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw {
            "Fashion" => Ok(StoreCategory::Fashion),
            "Electronics" => Ok(StoreCategory::Electronics),
            "Home" => Ok(StoreCategory::Home),
            "Beauty" => Ok(StoreCategory::Beauty),
            other => Err(DomainError::unsupported(format!(
                "category must be one of Fashion, Electronics, Home, Beauty (got {other:?})"
            ))),
        }
    }
}

impl core::fmt::Display for StoreCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_platform_market() {
        assert_eq!(Country::default().as_str(), "Bangladesh");
        assert_eq!(Currency::default().as_str(), "BDT");
    }

    #[test]
    fn category_parse_round_trips_all_variants() {
        for cat in StoreCategory::ALL {
            assert_eq!(StoreCategory::parse(cat.as_str()).unwrap(), cat);
        }
    }

    #[test]
    fn category_parse_rejects_unknown() {
        assert!(StoreCategory::parse("Toys").is_err());
        assert!(StoreCategory::parse("").is_err());
    }
}

//! Wire payload for store creation.

use serde::Serialize;
use storekit_core::{Country, Currency, DomainLabel, EmailAddress, StoreCategory, StoreName};

/// Validated creation payload, serialized as the platform expects it.
///
/// Field names match the creation endpoint's JSON body; the domain is the
/// unqualified label (already lowercased by [`DomainLabel`]), not the FQDN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStore {
    pub name: StoreName,
    pub currency: Currency,
    pub country: Country,
    pub domain: DomainLabel,
    pub category: StoreCategory,
    pub email: EmailAddress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_platform_wire_format() {
        let store = NewStore {
            name: StoreName::parse("MyShop").unwrap(),
            currency: Currency::Bdt,
            country: Country::Bangladesh,
            domain: DomainLabel::parse("MyShop").unwrap(),
            category: StoreCategory::Fashion,
            email: EmailAddress::parse("a@b.com").unwrap(),
        };

        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "MyShop",
                "currency": "BDT",
                "country": "Bangladesh",
                "domain": "myshop",
                "category": "Fashion",
                "email": "a@b.com",
            })
        );
    }
}

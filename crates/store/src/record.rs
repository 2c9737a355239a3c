//! Created-store representation returned by the platform.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Store record as echoed back by the creation endpoint.
///
/// The platform assigns the identifier; everything else mirrors the
/// submitted payload. Fields the backend may omit are optional rather than
/// hard deserialization failures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mongo_style_document() {
        let record: StoreRecord = serde_json::from_value(serde_json::json!({
            "_id": "65f0c0ffee",
            "name": "MyShop",
            "domain": "myshop",
            "currency": "BDT",
            "country": "Bangladesh",
            "category": "Fashion",
            "email": "a@b.com",
            "createdAt": "2026-01-15T10:30:00Z",
        }))
        .unwrap();
        assert_eq!(record.id, "65f0c0ffee");
        assert!(record.created_at.is_some());
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let record: StoreRecord = serde_json::from_value(serde_json::json!({
            "id": "abc123",
            "name": "MyShop",
            "domain": "myshop",
        }))
        .unwrap();
        assert_eq!(record.id, "abc123");
        assert_eq!(record.created_at, None);
    }
}

//! Product model sourced from the external catalog service.

use serde::{Deserialize, Serialize};

/// Fallback image shown when a product carries no image URL.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1560343090-f0409e92791a";

/// Catalog-assigned product identifier (opaque document id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A catalog product. Read-only: sourced entirely from the external
/// service, never mutated locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    /// Non-negative unit price in the catalog's display currency.
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// The product image, or the shared placeholder when none is set.
    pub fn image_or_placeholder(&self) -> &str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_document() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "_id": "67abc",
            "name": "Saree",
            "price": 1200.0,
            "description": "Handwoven",
            "image": "https://cdn.example.com/saree.jpg",
            "category": "Fashion",
        }))
        .unwrap();
        assert_eq!(product.id.as_str(), "67abc");
        assert_eq!(product.image_or_placeholder(), "https://cdn.example.com/saree.jpg");
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "_id": "67abc",
            "name": "Saree",
            "price": 1200.0,
        }))
        .unwrap();
        assert_eq!(product.image_or_placeholder(), PLACEHOLDER_IMAGE);
    }
}

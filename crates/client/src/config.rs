//! Client configuration.

use std::time::Duration;

/// Production endpoints.
pub const DEFAULT_STORE_BASE_URL: &str = "https://interview-task-green.vercel.app/task";
pub const DEFAULT_PRODUCTS_BASE_URL: &str =
    "https://glore-bd-backend-node-mongo.vercel.app/api";

/// Endpoints and timeout policy for [`PlatformClient`](crate::PlatformClient).
///
/// The original storefront issued requests with no timeout at all; here the
/// policy is explicit and configurable. There is still no retry.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the domain/store service.
    pub store_base_url: String,
    /// Base URL of the product service.
    pub products_base_url: String,
    /// Total per-request deadline.
    pub timeout: Duration,
    /// Connection-establishment deadline.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
            products_base_url: DEFAULT_PRODUCTS_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl ClientConfig {
    /// Point both services at the same base URL (handy for local stubs).
    pub fn with_base_url(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            store_base_url: base.clone(),
            products_base_url: base,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts_are_explicit() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }
}

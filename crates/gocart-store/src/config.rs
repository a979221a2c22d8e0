//! # Store Configuration
//!
//! Namespace configuration for the persisted snapshot key.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variable (`GOCART_NAMESPACE`)
//! 2. Explicit constructor (`StoreConfig::with_namespace`)
//! 3. Default (`gocart`)
//!
//! The full storage key is `<namespace>:Products`: one key, one whole-cart
//! snapshot.

/// Key suffix for the cart snapshot. The cart is the only value this
/// store persists; the namespace prefix keeps it clear of other tenants
/// of the same kv database.
const SNAPSHOT_KEY: &str = "Products";

/// Environment variable overriding the snapshot namespace.
const NAMESPACE_ENV: &str = "GOCART_NAMESPACE";

/// Cart store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Namespace qualifying the snapshot key.
    /// Default: "gocart"
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            namespace: "gocart".to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration with an explicit namespace.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        StoreConfig {
            namespace: namespace.into(),
        }
    }

    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GOCART_NAMESPACE`: Override the snapshot namespace
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(namespace) = std::env::var(NAMESPACE_ENV) {
            config.namespace = namespace;
        }

        config
    }

    /// The fully-qualified storage key for the cart snapshot.
    pub fn storage_key(&self) -> String {
        format!("{}:{}", self.namespace, SNAPSHOT_KEY)
    }
}

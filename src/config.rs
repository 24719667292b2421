//! Cart configuration

use serde::{Deserialize, Serialize};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Cart store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Backend key holding the serialized cart
    pub storage_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CartConfig {
    /// Config with a custom storage key
    pub fn with_storage_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
        }
    }

    /// Parse config from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

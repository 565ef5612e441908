//! Plugin configuration document
//!
//! Parsed once at site-build time from the site's plugin configuration.
//! Every field except the base URL has a default, so a minimal config is
//! just `{"url": "https://example.com"}`.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Top-level plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginConfig {
    /// The site's base URL; the deployment domain is derived from it.
    pub url: String,
    #[serde(default)]
    pub service_worker: ServiceWorkerSettings,
    #[serde(default)]
    pub json: JsonSettings,
}

impl PluginConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Worker generation settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceWorkerSettings {
    /// Set to false to stop the plugin from emitting a worker at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Name of the browser cache the generated worker writes into.
    #[serde(default = "default_cache_name")]
    pub cache_name: String,
}

impl Default for ServiceWorkerSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            cache_name: default_cache_name(),
        }
    }
}

/// Which generated JSON indexes are merged into the version manifest.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct JsonSettings {
    #[serde(default = "default_merge")]
    pub merge: Vec<String>,
}

impl Default for JsonSettings {
    fn default() -> Self {
        Self {
            merge: default_merge(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_cache_name() -> String {
    "NaoKuoBlogCache".to_string()
}

fn default_merge() -> Vec<String> {
    ["page", "archives", "categories", "tags"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

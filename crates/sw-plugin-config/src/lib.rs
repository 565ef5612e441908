//! Build-time configuration surface for the caching-worker generator plugin
//!
//! Everything here is evaluated once at site-build time: the plugin config
//! document, the constants ejected into the generated worker script, the
//! version-probe payload, and the assembled rule set handed to the code
//! generator.

mod config;
mod eject;
mod error;
mod ruleset;
mod version;

pub use config::{JsonSettings, PluginConfig, ServiceWorkerSettings};
pub use eject::{EjectValue, EjectValues};
pub use error::{ConfigError, Result};
pub use ruleset::RuleSet;
pub use version::{VersionPayload, VERSION_PROBE_URL};

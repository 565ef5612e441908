//! Version probe payload
//!
//! The generated worker stores a version record under a sentinel URL; the
//! page fetches it from the cache after activation to tell the visitor what
//! deployment it is now reading.

use serde::{Deserialize, Serialize};

/// Sentinel cache key the worker stores its version record under. Never a
/// real network resource.
pub const VERSION_PROBE_URL: &str = "https://id.v3/";

/// Deployment version record: a global counter bumped on full rebuilds and
/// a local counter bumped on incremental updates.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct VersionPayload {
    pub global: u64,
    pub local: u64,
}

impl VersionPayload {
    /// Human-readable version tag, e.g. `3.14`.
    pub fn tag(&self) -> String {
        format!("{}.{}", self.global, self.local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_format() {
        let version = VersionPayload { global: 3, local: 14 };
        assert_eq!(version.tag(), "3.14");
    }

    #[test]
    fn test_payload_round_trips_through_json() {
        let version: VersionPayload = serde_json::from_str(r#"{"global": 2, "local": 7}"#).unwrap();
        assert_eq!(version, VersionPayload { global: 2, local: 7 });
    }

    #[test]
    fn test_probe_url_is_absolute() {
        assert!(VERSION_PROBE_URL.starts_with("https://"));
    }
}

//! Skip predicate evaluated before any other rule

use crate::constants::SKIP_URL_PREFIXES;

/// Requests matching any of these URL prefixes are never intercepted or
/// cached. The caller consults this before the partition matcher; a hit
/// short-circuits everything else.
#[derive(Debug, Clone, Default)]
pub struct SkipPredicate {
    prefixes: Vec<String>,
}

impl SkipPredicate {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// The fixed set of excluded origins.
    pub fn standard() -> Self {
        Self::new(SKIP_URL_PREFIXES.iter().map(|p| p.to_string()).collect())
    }

    /// Plain prefix test; no URL parsing, never fails.
    pub fn should_skip(&self, url: &str) -> bool {
        self.prefixes.iter().any(|p| url.starts_with(p.as_str()))
    }
}

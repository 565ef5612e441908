//! Mirror fallback resolution for third-party asset URLs
//!
//! Maps a source URL onto an ordered list of equivalent mirror URLs plus a
//! declarative timeout budget. The caller (the generated caching worker)
//! tries the list in order when the primary fetch fails; this crate performs
//! no I/O and enforces no timeouts itself.

mod error;

pub use error::{MirrorError, Result};

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// Timeout budget (ms) applied to the stable mirror rule set.
pub const DEFAULT_MIRROR_TIMEOUT_MS: u64 = 3000;

/// Mirror bases tried, in order, for assets originally served from
/// `npm.elemecdn.com`. Paths are carried over verbatim.
pub const ELEMECDN_MIRRORS: [&str; 3] = [
    "https://npm.onmicrosoft.cn",
    "https://cdn.cbd.int",
    "https://cdn.jsdelivr.net/npm",
];

// Versioned package asset paths ({scope}@{version}/{dir}/{file}) under the
// known package-mirror hosts. Only these shapes are mirror candidates.
static ELEMECDN_SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://npm\.elemecdn\.com/[^/@]+@[^/@]+/[^/]+/[^/]+$").unwrap()
});
static ONMICROSOFT_SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://npm\.onmicrosoft\.cn/[^/@]+@[^/@]+/[^/]+/[^/]+$").unwrap()
});
static CBD_SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://cdn\.cbd\.int/[^/@]+@[^/@]+/[^/]+/[^/]+$").unwrap()
});
static JSDELIVR_SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://cdn\.jsdelivr\.net/npm/[^/@]+@[^/@]+/[^/]+/[^/]+$").unwrap()
});

/// Ordered list of fallback URLs for one source URL, plus the timeout (ms)
/// the caller should apply to each attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpareUrls {
    pub list: Vec<String>,
    pub timeout_ms: u64,
}

/// How a matched source URL is rewritten into its candidate list.
#[derive(Debug, Clone)]
pub enum Rewrite {
    /// Known mirror-source host: the original URL followed by the same path
    /// on each mirror base, in order.
    MirrorChain { hosts: Vec<String> },
    /// No alternates; the candidate list is the original URL alone.
    Passthrough,
}

impl Rewrite {
    /// Produce the ordered candidate list for `src`. The first element is
    /// always the original URL.
    fn apply(&self, src: &str) -> Result<Vec<String>> {
        match self {
            Rewrite::MirrorChain { hosts } => {
                let url = Url::parse(src)?;
                let path = url.path();
                let mut list = Vec::with_capacity(hosts.len() + 1);
                list.push(src.to_string());
                for base in hosts {
                    list.push(format!("{}{}", base, path));
                }
                Ok(list)
            }
            Rewrite::Passthrough => Ok(vec![src.to_string()]),
        }
    }
}

/// One mirror rule: a source pattern, a rewrite, and a timeout budget.
#[derive(Debug, Clone)]
pub struct MirrorRule {
    source: Regex,
    rewrite: Rewrite,
    timeout_ms: u64,
}

impl MirrorRule {
    pub fn new(source: Regex, rewrite: Rewrite, timeout_ms: u64) -> Self {
        Self {
            source,
            rewrite,
            timeout_ms,
        }
    }
}

/// Ordered mirror rule table. Rules are tested in declaration order and the
/// first matching source pattern wins.
#[derive(Debug, Clone, Default)]
pub struct MirrorResolver {
    rules: Vec<MirrorRule>,
}

impl MirrorResolver {
    pub fn new(rules: Vec<MirrorRule>) -> Self {
        Self { rules }
    }

    /// The stable rule set: versioned package assets on the known mirror
    /// hosts. Assets on `npm.elemecdn.com` get the full mirror chain; the
    /// other hosts are recognized but not rewritten.
    pub fn stable() -> Self {
        let chain = Rewrite::MirrorChain {
            hosts: ELEMECDN_MIRRORS.iter().map(|h| h.to_string()).collect(),
        };
        Self::new(vec![
            MirrorRule::new(ELEMECDN_SOURCE_RE.clone(), chain, DEFAULT_MIRROR_TIMEOUT_MS),
            MirrorRule::new(
                ONMICROSOFT_SOURCE_RE.clone(),
                Rewrite::Passthrough,
                DEFAULT_MIRROR_TIMEOUT_MS,
            ),
            MirrorRule::new(
                CBD_SOURCE_RE.clone(),
                Rewrite::Passthrough,
                DEFAULT_MIRROR_TIMEOUT_MS,
            ),
            MirrorRule::new(
                JSDELIVR_SOURCE_RE.clone(),
                Rewrite::Passthrough,
                DEFAULT_MIRROR_TIMEOUT_MS,
            ),
        ])
    }

    /// Resolve `src` to its fallback URL list.
    ///
    /// `Ok(None)` means no rule applies: the caller should fetch `src` only,
    /// with no mirroring.
    pub fn resolve(&self, src: &str) -> Result<Option<SpareUrls>> {
        for rule in &self.rules {
            if rule.source.is_match(src) {
                let list = rule.rewrite.apply(src)?;
                debug!(url = src, candidates = list.len(), "mirror rule matched");
                return Ok(Some(SpareUrls {
                    list,
                    timeout_ms: rule.timeout_ms,
                }));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_elemecdn_full_chain() {
        let resolver = MirrorResolver::stable();
        let spare = resolver
            .resolve("https://npm.elemecdn.com/pkg@1.0.0/dist/file.js")
            .unwrap()
            .unwrap();
        assert_eq!(spare.timeout_ms, 3000);
        assert_eq!(
            spare.list,
            vec![
                "https://npm.elemecdn.com/pkg@1.0.0/dist/file.js",
                "https://npm.onmicrosoft.cn/pkg@1.0.0/dist/file.js",
                "https://cdn.cbd.int/pkg@1.0.0/dist/file.js",
                "https://cdn.jsdelivr.net/npm/pkg@1.0.0/dist/file.js",
            ]
        );
    }

    #[test]
    fn test_resolve_unknown_host_is_absent() {
        let resolver = MirrorResolver::stable();
        assert!(resolver
            .resolve("https://example.com/pkg@1.0.0/dist/file.js")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_resolve_unversioned_path_is_absent() {
        // No {scope}@{version} segment, so the asset is not a candidate.
        let resolver = MirrorResolver::stable();
        assert!(resolver
            .resolve("https://npm.elemecdn.com/pkg/dist/file.js")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_resolve_passthrough_is_single_element() {
        let resolver = MirrorResolver::stable();
        let spare = resolver
            .resolve("https://cdn.jsdelivr.net/npm/pkg@2.1.0/dist/app.js")
            .unwrap()
            .unwrap();
        assert_eq!(
            spare.list,
            vec!["https://cdn.jsdelivr.net/npm/pkg@2.1.0/dist/app.js"]
        );
        assert_eq!(spare.timeout_ms, 3000);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rule_a = MirrorRule::new(
            Regex::new(r"^https://a\.example/").unwrap(),
            Rewrite::MirrorChain {
                hosts: vec!["https://b.example".to_string()],
            },
            1000,
        );
        let rule_b = MirrorRule::new(
            Regex::new(r"^https://a\.example/x").unwrap(),
            Rewrite::Passthrough,
            2000,
        );
        let resolver = MirrorResolver::new(vec![rule_a, rule_b]);
        let spare = resolver.resolve("https://a.example/x.js").unwrap().unwrap();
        assert_eq!(spare.timeout_ms, 1000);
        assert_eq!(
            spare.list,
            vec!["https://a.example/x.js", "https://b.example/x.js"]
        );
    }

    #[test]
    fn test_empty_resolver_matches_nothing() {
        let resolver = MirrorResolver::default();
        assert!(resolver
            .resolve("https://npm.elemecdn.com/pkg@1.0.0/dist/file.js")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_deep_path_is_not_a_candidate() {
        // The stable patterns are anchored on the path; extra segments fail.
        let resolver = MirrorResolver::stable();
        assert!(resolver
            .resolve("https://npm.elemecdn.com/pkg@1.0.0/dist/sub/file.js")
            .unwrap()
            .is_none());
    }
}

//! Ordered cache partition rules
//!
//! Partitions are evaluated in declaration order and the first match wins,
//! so the rule list is an explicit ordered sequence, never a map.

use crate::constants::{
    CDN_ALLOWED_HOSTS, CDN_ASSET_PATH_RE, IMAGE_PATH_RE, PARTITION_CDN, PARTITION_IMG,
    PARTITION_SIMPLE, SITE_ASSET_PATH_RE,
};
use crate::context::{url_host, DeploymentContext};
use crate::error::{Result, RuleError};
use regex::Regex;
use tracing::debug;
use url::Url;

/// Predicate deciding whether a request URL belongs to a partition.
///
/// Host and path conditions combine with AND semantics.
#[derive(Debug, Clone)]
pub enum PartitionMatch {
    /// Request host equals the deployment's own domain.
    SiteHost { path: Regex },
    /// Request host is one of a fixed allow-list of third-party hosts.
    AllowedHosts { hosts: Vec<String>, path: Regex },
    /// Request host equals one explicit third-party host. Extension point
    /// for additional single-origin partitions.
    ExactHost { host: String, path: Regex },
}

impl PartitionMatch {
    fn matches(&self, url: &Url, ctx: &DeploymentContext) -> bool {
        let Some(host) = url_host(url) else {
            return false;
        };
        match self {
            PartitionMatch::SiteHost { path } => {
                host == ctx.domain && path.is_match(url.path())
            }
            PartitionMatch::AllowedHosts { hosts, path } => {
                hosts.iter().any(|h| *h == host) && path.is_match(url.path())
            }
            PartitionMatch::ExactHost { host: expected, path } => {
                host == *expected && path.is_match(url.path())
            }
        }
    }
}

/// A named cache bucket with its purge policy and match predicate.
#[derive(Debug, Clone)]
pub struct CachePartition {
    pub name: String,
    /// Whether a full-site clean deletes this partition's entries.
    pub purge_on_clean: bool,
    pub matcher: PartitionMatch,
}

impl CachePartition {
    pub fn new(name: impl Into<String>, purge_on_clean: bool, matcher: PartitionMatch) -> Self {
        Self {
            name: name.into(),
            purge_on_clean,
            matcher,
        }
    }
}

/// Ordered partition table with first-match-wins classification.
#[derive(Debug, Clone, Default)]
pub struct CacheRuleMatcher {
    partitions: Vec<CachePartition>,
}

impl CacheRuleMatcher {
    /// An empty table. Partitions are appended with [`push`](Self::push).
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard partition set: `simple` (self-hosted scripts, styles,
    /// data and pages), `cdn` (allow-listed third-party assets), `img`
    /// (self-hosted images). All purge on clean.
    pub fn standard() -> Self {
        // Declaration order is part of the contract.
        let partitions = vec![
            CachePartition::new(
                PARTITION_SIMPLE,
                true,
                PartitionMatch::SiteHost {
                    path: SITE_ASSET_PATH_RE.clone(),
                },
            ),
            CachePartition::new(
                PARTITION_CDN,
                true,
                PartitionMatch::AllowedHosts {
                    hosts: CDN_ALLOWED_HOSTS.iter().map(|h| h.to_string()).collect(),
                    path: CDN_ASSET_PATH_RE.clone(),
                },
            ),
            CachePartition::new(
                PARTITION_IMG,
                true,
                PartitionMatch::SiteHost {
                    path: IMAGE_PATH_RE.clone(),
                },
            ),
        ];
        Self { partitions }
    }

    /// Append a partition at the end of the evaluation order.
    pub fn push(&mut self, partition: CachePartition) -> Result<()> {
        if self.partitions.iter().any(|p| p.name == partition.name) {
            return Err(RuleError::DuplicatePartition(partition.name));
        }
        self.partitions.push(partition);
        Ok(())
    }

    /// Name of the first partition matching `url`, or `None` when the
    /// request is not subject to this cache layer at all.
    pub fn classify(&self, url: &str, ctx: &DeploymentContext) -> Result<Option<&str>> {
        let parsed = Url::parse(url)?;
        for partition in &self.partitions {
            if partition.matcher.matches(&parsed, ctx) {
                debug!(url, partition = %partition.name, "request classified");
                return Ok(Some(partition.name.as_str()));
            }
        }
        Ok(None)
    }

    /// Names of partitions deleted during a full-site clean, in declaration
    /// order.
    pub fn purge_list(&self) -> Vec<&str> {
        self.partitions
            .iter()
            .filter(|p| p.purge_on_clean)
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn partitions(&self) -> &[CachePartition] {
        &self.partitions
    }
}

//! Assembly of the rule engines from a parsed plugin config

use crate::config::PluginConfig;
use crate::eject::EjectValues;
use crate::error::Result;
use sw_cache_rules::{CacheRuleMatcher, DeploymentContext, SkipPredicate};
use tracing::debug;
use url_mirror_resolver::{MirrorResolver, SpareUrls};

/// Everything the code generator injects into the worker script: the
/// deployment context, the ordered partition table, the mirror rules and
/// the skip predicate. Built once per site build, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub context: DeploymentContext,
    pub cache_rules: CacheRuleMatcher,
    pub mirrors: MirrorResolver,
    pub skip: SkipPredicate,
}

impl RuleSet {
    /// Build the standard rule set for the configured site.
    pub fn from_config(config: &PluginConfig) -> Result<Self> {
        let context = DeploymentContext::from_base_url(&config.url)?;
        debug!(domain = %context.domain, "rule set assembled");
        Ok(Self {
            context,
            cache_rules: CacheRuleMatcher::standard(),
            mirrors: MirrorResolver::stable(),
            skip: SkipPredicate::standard(),
        })
    }

    /// Partition for a request URL, with the skip predicate applied first:
    /// a skipped request is never classified at all.
    pub fn partition_for(&self, url: &str) -> Result<Option<&str>> {
        if self.skip.should_skip(url) {
            return Ok(None);
        }
        Ok(self.cache_rules.classify(url, &self.context)?)
    }

    /// Fallback URL list for a resource fetch, or `None` to fetch the
    /// original URL only.
    pub fn spare_urls(&self, url: &str) -> Result<Option<SpareUrls>> {
        Ok(self.mirrors.resolve(url)?)
    }

    /// Constants ejected into the generated worker.
    pub fn eject_values(&self) -> EjectValues {
        EjectValues::standard(&self.context)
    }
}

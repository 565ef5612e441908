//! Per-deployment constants injected into rule evaluation

use crate::error::{Result, RuleError};
use url::Url;

/// Constants derived once from the site's configured base URL and passed by
/// reference into every partition match. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentContext {
    /// Canonical host of the site, including a non-default port if the base
    /// URL carries one.
    pub domain: String,
}

impl DeploymentContext {
    /// Build the context from the site's base URL, e.g. `https://example.com`.
    pub fn from_base_url(base: &str) -> Result<Self> {
        let url = Url::parse(base)?;
        Ok(Self {
            domain: url_host(&url).ok_or_else(|| RuleError::MissingHost(base.to_string()))?,
        })
    }
}

/// Host component of a URL in the worker's notion of "host": hostname plus
/// the port when it is not the scheme default.
pub(crate) fn url_host(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

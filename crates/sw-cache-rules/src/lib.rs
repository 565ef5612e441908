//! Cache partition classification for a generated caching worker
//!
//! Provides the ordered partition rules that decide which cache bucket (if
//! any) a request URL belongs to, which partitions are purged on a full-site
//! clean, and the skip predicate consulted before any other rule. All
//! evaluation is pure and stateless; the rule tables are built once at site
//! generation time and read-only afterwards.

pub mod constants;
mod context;
mod error;
mod matcher;
mod skip;

pub use context::DeploymentContext;
pub use error::{Result, RuleError};
pub use matcher::{CachePartition, CacheRuleMatcher, PartitionMatch};
pub use skip::SkipPredicate;

//! Constants ejected into the generated worker script

use crate::error::{ConfigError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use sw_cache_rules::DeploymentContext;

/// One value injected into the generated worker as a top-level binding.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EjectValue {
    /// Binding keyword emitted in front of the identifier, e.g. `const`.
    pub prefix: String,
    pub value: String,
}

/// Named constants handed to the code generator. Identifiers must be valid
/// script identifiers since they are spliced into the worker verbatim.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct EjectValues {
    values: BTreeMap<String, EjectValue>,
}

impl EjectValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard set: the deployment domain as a `const`.
    pub fn standard(ctx: &DeploymentContext) -> Self {
        let mut values = Self::new();
        // "domain" is a valid identifier; insert cannot fail here.
        let _ = values.insert("domain", "const", &ctx.domain);
        values
    }

    pub fn insert(&mut self, name: &str, prefix: &str, value: &str) -> Result<()> {
        if !is_valid_identifier(name) {
            return Err(ConfigError::InvalidEjectName(name.to_string()));
        }
        self.values.insert(
            name.to_string(),
            EjectValue {
                prefix: prefix.to_string(),
                value: value.to_string(),
            },
        );
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&EjectValue> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EjectValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DeploymentContext {
        DeploymentContext::from_base_url("https://example.com").unwrap()
    }

    #[test]
    fn test_standard_ejects_domain_const() {
        let values = EjectValues::standard(&ctx());
        let domain = values.get("domain").unwrap();
        assert_eq!(domain.prefix, "const");
        assert_eq!(domain.value, "example.com");
    }

    #[test]
    fn test_insert_rejects_invalid_identifier() {
        let mut values = EjectValues::new();
        assert!(values.insert("", "const", "x").is_err());
        assert!(values.insert("1abc", "const", "x").is_err());
        assert!(values.insert("has space", "const", "x").is_err());
        assert!(values.insert("has-dash", "const", "x").is_err());
    }

    #[test]
    fn test_insert_accepts_underscore_names() {
        let mut values = EjectValues::new();
        assert!(values.insert("_cache_tag", "let", "v3").is_ok());
        assert_eq!(values.get("_cache_tag").unwrap().prefix, "let");
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let mut values = EjectValues::new();
        values.insert("b", "const", "2").unwrap();
        values.insert("a", "const", "1").unwrap();
        let names: Vec<&str> = values.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}

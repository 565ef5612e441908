//! Error types for the plugin configuration layer

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    Rule(sw_cache_rules::RuleError),
    Mirror(url_mirror_resolver::MirrorError),
    InvalidEjectName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(err) => write!(f, "Config parse error: {}", err),
            ConfigError::Rule(err) => write!(f, "Rule error: {}", err),
            ConfigError::Mirror(err) => write!(f, "Mirror error: {}", err),
            ConfigError::InvalidEjectName(name) => {
                write!(f, "Invalid eject identifier: {:?}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
            ConfigError::Rule(err) => Some(err),
            ConfigError::Mirror(err) => Some(err),
            ConfigError::InvalidEjectName(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<sw_cache_rules::RuleError> for ConfigError {
    fn from(err: sw_cache_rules::RuleError) -> Self {
        ConfigError::Rule(err)
    }
}

impl From<url_mirror_resolver::MirrorError> for ConfigError {
    fn from(err: url_mirror_resolver::MirrorError) -> Self {
        ConfigError::Mirror(err)
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_eject_name_display() {
        let err = ConfigError::InvalidEjectName("bad name".to_string());
        assert_eq!(format!("{}", err), "Invalid eject identifier: \"bad name\"");
    }

    #[test]
    fn test_rule_error_display() {
        let err = ConfigError::from(sw_cache_rules::RuleError::DuplicatePartition(
            "img".to_string(),
        ));
        assert_eq!(format!("{}", err), "Rule error: Duplicate partition name: img");
    }

    #[test]
    fn test_json_error_has_source() {
        use std::error::Error;
        let parse_err = serde_json::from_str::<u32>("x").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(err.source().is_some());
    }
}

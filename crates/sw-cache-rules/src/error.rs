//! Error types for cache rule evaluation

use std::fmt;

#[derive(Debug)]
pub enum RuleError {
    UrlParse(url::ParseError),
    MissingHost(String),
    DuplicatePartition(String),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::UrlParse(err) => write!(f, "URL parse error: {}", err),
            RuleError::MissingHost(url) => write!(f, "URL has no host: {}", url),
            RuleError::DuplicatePartition(name) => {
                write!(f, "Duplicate partition name: {}", name)
            }
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuleError::UrlParse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<url::ParseError> for RuleError {
    fn from(err: url::ParseError) -> Self {
        RuleError::UrlParse(err)
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_host_display() {
        let err = RuleError::MissingHost("data:text/plain,x".to_string());
        assert_eq!(format!("{}", err), "URL has no host: data:text/plain,x");
    }

    #[test]
    fn test_duplicate_partition_display() {
        let err = RuleError::DuplicatePartition("cdn".to_string());
        assert_eq!(format!("{}", err), "Duplicate partition name: cdn");
    }

    #[test]
    fn test_url_parse_error_has_source() {
        use std::error::Error;
        let err = RuleError::from(url::ParseError::EmptyHost);
        assert!(err.source().is_some());
    }
}

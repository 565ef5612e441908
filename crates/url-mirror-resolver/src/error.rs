//! Error types for mirror resolution

use std::fmt;

#[derive(Debug)]
pub enum MirrorError {
    UrlParse(url::ParseError),
}

impl fmt::Display for MirrorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorError::UrlParse(err) => write!(f, "URL parse error: {}", err),
        }
    }
}

impl std::error::Error for MirrorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MirrorError::UrlParse(err) => Some(err),
        }
    }
}

impl From<url::ParseError> for MirrorError {
    fn from(err: url::ParseError) -> Self {
        MirrorError::UrlParse(err)
    }
}

pub type Result<T> = std::result::Result<T, MirrorError>;

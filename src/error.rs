use thiserror::Error;

/// Why a candidate URL could not be turned into a link.
///
/// These never abort an extraction. They are reported next to the raw
/// candidate in [`Links`](crate::Links).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("invalid control character in URL")]
    ControlCharacter,
}

/// Errors raised while building an extractor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid exclusion pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

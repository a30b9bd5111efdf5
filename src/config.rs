use std::{fs::read_to_string, path::Path};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings a [`LinkExtractor`](crate::LinkExtractor) is built from.
///
/// Can be deserialized, e.g. from a TOML file:
///
/// ```toml
/// excluded_patterns = ["^https?://ads\\.", "\\.pdf$"]
/// strip_whitespace = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Candidate URLs matching any of these are dropped before parsing
    #[serde(with = "serde_regex", default)]
    pub excluded_patterns: Vec<Regex>,

    /// Remove tabs, newlines and carriage returns from resolved URLs
    #[serde(default)]
    pub strip_whitespace: bool,
}

impl ExtractorConfig {
    /// Compile `patterns` into a configuration. Fails on the first pattern that
    /// is not a valid regular expression.
    pub fn new<I, S>(patterns: I, strip_whitespace: bool) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded_patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            excluded_patterns,
            strip_whitespace,
        })
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::ExtractorConfig;
    use crate::error::ConfigError;

    fn pattern_strings(config: &ExtractorConfig) -> Vec<&str> {
        config.excluded_patterns.iter().map(|r| r.as_str()).collect()
    }

    #[test]
    fn test_new() -> anyhow::Result<()> {
        let config = ExtractorConfig::new(vec!["^mailto:", r"\.pdf$"], true)?;

        assert_eq!(pattern_strings(&config), vec!["^mailto:", r"\.pdf$"]);
        assert!(config.strip_whitespace);

        Ok(())
    }

    #[test]
    fn test_new_invalid_pattern() {
        let result = ExtractorConfig::new(&["ok", "(unclosed"], false);

        match result {
            Err(ConfigError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_toml() -> anyhow::Result<()> {
        let config = ExtractorConfig::from_toml(
            r#"
excluded_patterns = ["^https?://ads\\.", "logout"]
strip_whitespace = true
"#,
        )?;

        assert_eq!(pattern_strings(&config), vec![r"^https?://ads\.", "logout"]);
        assert!(config.strip_whitespace);

        Ok(())
    }

    #[test]
    fn test_from_toml_defaults() -> anyhow::Result<()> {
        let config = ExtractorConfig::from_toml("")?;

        assert!(config.excluded_patterns.is_empty());
        assert!(!config.strip_whitespace);

        Ok(())
    }

    #[test]
    fn test_from_toml_invalid_pattern() {
        let result = ExtractorConfig::from_toml(r#"excluded_patterns = ["(unclosed"]"#);

        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_json() -> anyhow::Result<()> {
        let config: ExtractorConfig =
            serde_json::from_str(r#"{"excluded_patterns": ["^javascript:"]}"#)?;

        assert_eq!(pattern_strings(&config), vec!["^javascript:"]);
        assert!(!config.strip_whitespace);

        Ok(())
    }

    #[test]
    fn test_from_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("link-scraper-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "strip_whitespace = true")?;
        drop(file);

        let config = ExtractorConfig::from_file(&path);
        std::fs::remove_file(&path)?;

        assert!(config?.strip_whitespace);

        Ok(())
    }

    #[test]
    fn test_from_missing_file() {
        let result = ExtractorConfig::from_file("/nonexistent/link-scraper.toml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

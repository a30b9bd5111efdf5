use std::cell::Cell;

use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::{debug, trace, warn};
use url::{ParseError, SyntaxViolation, Url};

use crate::{
    config::ExtractorConfig,
    error::LinkError,
    links::Links,
    parser::{candidates, Parser},
};

/// Schemes that are kept. The empty scheme stands for relative references.
const VALID_SCHEMES: &[&str] = &["", "http", "https"];

/// Characters removed from resolved URLs when whitespace stripping is enabled.
const WHITESPACE_PATTERN: &str = "[\t\n\r]";

/// Extracts the absolute URLs a page links to.
///
/// Immutable once built, so a single extractor can serve any number of pages,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct LinkExtractor {
    excluded_patterns: Vec<Regex>,
    whitespace: Option<Regex>,
}

impl LinkExtractor {
    /// Create an extractor that drops candidates matching any of `excluded_patterns`
    /// and, if `strip_whitespace` is set, removes tabs and line breaks from resolved URLs.
    pub fn new(excluded_patterns: Vec<Regex>, strip_whitespace: bool) -> Self {
        let whitespace = if strip_whitespace {
            Some(Regex::new(WHITESPACE_PATTERN).expect("whitespace pattern is valid"))
        } else {
            None
        };

        Self {
            excluded_patterns,
            whitespace,
        }
    }

    pub fn from_config(config: ExtractorConfig) -> Self {
        Self::new(config.excluded_patterns, config.strip_whitespace)
    }

    pub fn excluded_patterns(&self) -> &[Regex] {
        &self.excluded_patterns
    }

    pub fn strips_whitespace(&self) -> bool {
        self.whitespace.is_some()
    }

    /// Collect the links found in `root` and all of its descendants, resolved against `base`.
    ///
    /// Empty, excluded and non-web candidates are skipped. Candidates that are not valid
    /// URL references are reported verbatim along with their error.
    pub fn extract(&self, root: ElementRef<'_>, base: &Url) -> Links {
        let mut links = Links::default();

        for candidate in candidates(root) {
            if candidate.is_empty() {
                continue;
            }

            if self.is_url_excluded(candidate) {
                trace!("Excluded url: {}", candidate);
                continue;
            }

            match self.resolve(candidate, base) {
                Ok(Some(url)) => links.insert_resolved(self.strip_whitespace(url.into())),
                Ok(None) => {}
                Err(e) => {
                    warn!("Unknown url: {} ({})", candidate, e);
                    links.insert_failed(candidate.to_string(), e);
                }
            }
        }

        debug!("Extracted {} links relative to {}", links.len(), base);
        links
    }

    /// Collect the links of a whole parsed document.
    pub fn extract_document(&self, html: &Html, base: &Url) -> Links {
        self.extract(html.root_element(), base)
    }

    /// Parse `html` as a document and collect its links.
    pub fn extract_html(&self, html: &str, base: &Url) -> Links {
        let parser = Parser::new(html);
        self.extract(parser.root(), base)
    }

    fn is_url_excluded(&self, url: &str) -> bool {
        self.excluded_patterns.iter().any(|r| r.is_match(url))
    }

    /// Parse `candidate` and resolve it against `base`.
    /// Returns `Ok(None)` if its scheme is not one we follow.
    fn resolve(&self, candidate: &str, base: &Url) -> Result<Option<Url>, LinkError> {
        // The URL parser silently drops tabs and line breaks. Only accept that
        // when we were asked to strip them anyway.
        let tab_or_newline = Cell::new(false);
        let on_violation = |violation: SyntaxViolation| {
            if let SyntaxViolation::TabOrNewlineIgnored = violation {
                tab_or_newline.set(true);
            }
        };

        let reference = match Url::options()
            .syntax_violation_callback(Some(&on_violation))
            .parse(candidate)
        {
            Ok(url) => Some(url),
            Err(ParseError::RelativeUrlWithoutBase) => None,
            Err(e) => return Err(e.into()),
        };

        if tab_or_newline.get() && self.whitespace.is_none() {
            return Err(LinkError::ControlCharacter);
        }

        let scheme = reference.as_ref().map_or("", Url::scheme);
        if !VALID_SCHEMES.contains(&scheme) {
            trace!("Unsupported scheme: {}", candidate);
            return Ok(None);
        }

        match reference {
            Some(url) => Ok(Some(url)),
            None => Ok(Some(
                Url::options().base_url(Some(base)).parse(candidate)?,
            )),
        }
    }

    fn strip_whitespace(&self, url: String) -> String {
        match &self.whitespace {
            Some(r) => r.replace_all(&url, "").into_owned(),
            None => url,
        }
    }
}

impl From<ExtractorConfig> for LinkExtractor {
    fn from(config: ExtractorConfig) -> Self {
        Self::from_config(config)
    }
}

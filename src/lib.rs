//! Extract the links of an HTML page as absolute URLs.
//!
//! A [`LinkExtractor`] walks a parsed document, reads the URL attributes of
//! link-bearing tags (`a`, `img`, `script`, `link`, ...), resolves them against
//! the page URL and reports the result as a set of [`Links`]:
//!
//! ```
//! use link_scraper::LinkExtractor;
//! use url::Url;
//!
//! let base = Url::parse("https://example.com/docs/").unwrap();
//! let links = LinkExtractor::default().extract_html(r#"<a href="intro.html">Intro</a>"#, &base);
//!
//! assert!(links.contains("https://example.com/docs/intro.html"));
//! ```
//!
//! Links are not fetched or followed.

mod config;
mod error;
mod extractor;
mod links;
mod parser;
mod tags;

pub use config::ExtractorConfig;
pub use error::{ConfigError, LinkError};
pub use extractor::LinkExtractor;
pub use links::Links;

#[cfg(test)]
pub(crate) mod tests {
    pub(crate) fn compare_sorted<T>(mut first: Vec<T>, mut second: Vec<T>)
    where
        T: Ord + std::fmt::Debug,
    {
        first.sort();
        second.sort();

        assert_eq!(first, second)
    }
}

use std::collections::{hash_map, HashMap};

use crate::error::LinkError;

/// Links found on a single page.
///
/// Maps every resolved absolute URL to `None`, and every candidate that could
/// not be parsed (kept verbatim) to the error explaining why. Keys are unique, so
/// a link repeated on the page is reported once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Links(HashMap<String, Option<LinkError>>);

impl Links {
    /// Record a resolved link. Overwrites any previous entry for `link`.
    pub(crate) fn insert_resolved(&mut self, link: String) {
        self.0.insert(link, None);
    }

    /// Record a candidate that failed to parse. Overwrites any previous entry for `candidate`.
    pub(crate) fn insert_failed(&mut self, candidate: String, error: LinkError) {
        self.0.insert(candidate, Some(error));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `link` was found, whether it resolved or not.
    pub fn contains(&self, link: &str) -> bool {
        self.0.contains_key(link)
    }

    /// The error recorded for `link`, if any.
    pub fn error(&self, link: &str) -> Option<&LinkError> {
        self.0.get(link).and_then(Option::as_ref)
    }

    /// Successfully resolved absolute URLs.
    pub fn resolved(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, error)| error.is_none())
            .map(|(link, _)| link.as_str())
    }

    /// Raw candidates that failed to parse, with their errors.
    pub fn failed(&self) -> impl Iterator<Item = (&str, &LinkError)> {
        self.0
            .iter()
            .filter_map(|(link, error)| error.as_ref().map(|e| (link.as_str(), e)))
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Option<LinkError>> {
        self.0.iter()
    }

    pub fn into_inner(self) -> HashMap<String, Option<LinkError>> {
        self.0
    }
}

impl IntoIterator for Links {
    type Item = (String, Option<LinkError>);
    type IntoIter = hash_map::IntoIter<String, Option<LinkError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = (&'a String, &'a Option<LinkError>);
    type IntoIter = hash_map::Iter<'a, String, Option<LinkError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

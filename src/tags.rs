/// Link-bearing tags and the attributes that may carry a URL, in the order
/// they are read.
const LINK_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href"]),
    ("frame", &["src"]),
    ("iframe", &["src"]),
    ("img", &["src"]),
    ("link", &["href"]),
    ("script", &["src"]),
    ("source", &["src", "srcset"]),
    ("track", &["src"]),
];

/// Returns the URL attributes of `tag`, or `None` if the tag does not carry links.
/// `tag` is expected to be a lowercase local name, as produced by the HTML parser.
pub(crate) fn link_attributes(tag: &str) -> Option<&'static [&'static str]> {
    LINK_ATTRIBUTES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, attributes)| *attributes)
}

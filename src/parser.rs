use scraper::{ElementRef, Html};

use crate::tags::link_attributes;

/// HTML parser
#[derive(Debug)]
pub(crate) struct Parser {
    html: Html,
}

impl Parser {
    /// Create a new parser for `html`.
    pub(crate) fn new(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// The root element of the parsed document.
    pub(crate) fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

/// Returns an iterator over the candidate URLs found below `root`, `root` included.
///
/// Every attribute a link-bearing tag may use is yielded, in table order. A missing
/// attribute is yielded as an empty string.
pub(crate) fn candidates<'a>(root: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter_map(|el| {
            let element = el.value();
            link_attributes(element.name())
                .map(|attributes| attributes.iter().map(move |a| element.attr(a).unwrap_or("")))
        })
        .flatten()
}

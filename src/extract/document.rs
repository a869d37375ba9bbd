//! DOM-based fact extraction

use crate::ParseError;
use scraper::{Html, Selector};
use std::collections::BTreeMap;

/// Heading tags in the order they are reported
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Compiles a CSS selector, reporting failures as parse errors
fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

/// Selectors used by the extractor, compiled once per document
struct Selectors {
    title: Selector,
    headings: Vec<(&'static str, Selector)>,
    password_input: Selector,
    anchor: Selector,
}

impl Selectors {
    fn compile() -> Result<Self, ParseError> {
        let headings = HEADING_TAGS
            .iter()
            .map(|tag| Ok((*tag, selector(tag)?)))
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(Self {
            title: selector("title")?,
            headings,
            password_input: selector(r#"input[type="password"]"#)?,
            anchor: selector("a[href]")?,
        })
    }
}

/// A parsed HTML document that answers structural queries
///
/// The underlying DOM is not `Send`, so an extractor should be consumed
/// before any `.await`; [`crate::extract::extract`] does exactly that.
pub struct HtmlExtractor {
    document: Html,
    selectors: Selectors,
}

impl HtmlExtractor {
    /// Parses raw page bytes into a document
    ///
    /// # Errors
    ///
    /// * `ParseError::Selector` - an internal selector failed to compile
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so pages in
    /// legacy encodings still parse.
    pub fn new(content: &[u8]) -> Result<Self, ParseError> {
        let text = String::from_utf8_lossy(content);
        Ok(Self {
            document: Html::parse_document(&text),
            selectors: Selectors::compile()?,
        })
    }

    /// Text of the first `<title>` element, trimmed, or an empty string
    pub fn title(&self) -> String {
        self.document
            .select(&self.selectors.title)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// Text of every heading, grouped by tag, in document order
    ///
    /// Levels without any heading are left out of the map.
    pub fn headings(&self) -> BTreeMap<String, Vec<String>> {
        let mut headings = BTreeMap::new();

        for (tag, selector) in &self.selectors.headings {
            let texts: Vec<String> = self
                .document
                .select(selector)
                .map(|element| element.text().collect())
                .collect();

            if !texts.is_empty() {
                headings.insert(tag.to_string(), texts);
            }
        }

        headings
    }

    /// Whether the document contains at least one password input
    pub fn has_login_form(&self) -> bool {
        self.document
            .select(&self.selectors.password_input)
            .next()
            .is_some()
    }

    /// `href` values of all anchors, verbatim, duplicates included
    pub fn links(&self) -> Vec<String> {
        self.document
            .select(&self.selectors.anchor)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

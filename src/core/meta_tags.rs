//! Meta tag extraction from raw frame HTML
//!
//! This is a scanner, not an HTML parser: it finds `<meta ...>` elements,
//! reads their `property` (or `name`) and `content` attributes and keeps the
//! ones whose property matches a prefix filter. Anything it cannot read is
//! skipped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

// Quoted attribute values may contain '>', so they are matched as a unit
static META_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"(?is)<meta\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#).expect("Invalid meta tag regex")
});
// Comments and raw-text element bodies; unterminated spans run to the end
static SKIPPED_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(
        r"(?is)<!--.*?(?:-->|\z)|<script\b[^>]*>.*?(?:</script\s*>|\z)|<style\b[^>]*>.*?(?:</style\s*>|\z)",
    )
    .expect("Invalid skipped span regex")
});
static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(
        r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#,
    )
    .expect("Invalid attribute regex")
});

/// Property prefixes kept when no selector is configured
pub const DEFAULT_PREFIXES: &[&str] = &["fc:", "og:"];

/// A single `<meta property=... content=...>` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub property: String,
    pub content: String,
}

impl MetaTag {
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }
}

/// Which meta tags to keep, by property prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSelector {
    prefixes: Vec<String>,
}

impl Default for MetaSelector {
    fn default() -> Self {
        Self::with_prefixes(DEFAULT_PREFIXES.iter().copied())
    }
}

impl MetaSelector {
    /// Select tags whose property starts with any of `prefixes`.
    ///
    /// An empty prefix list selects every tag that has a property.
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn matches(&self, property: &str) -> bool {
        self.prefixes.is_empty() || self.prefixes.iter().any(|p| property.starts_with(p.as_str()))
    }
}

/// Extract the meta tags selected by `selector`, in document order
pub fn html_to_meta_tags(html: &str, selector: &MetaSelector) -> Vec<MetaTag> {
    let mut tags = Vec::new();
    let markup = SKIPPED_SPAN_REGEX.replace_all(html, " ");

    for element in META_TAG_REGEX.captures_iter(&markup) {
        let attributes = element.get(1).map(|m| m.as_str()).unwrap_or_default();

        let mut property = None;
        let mut name = None;
        let mut content = None;
        for attr in ATTRIBUTE_REGEX.captures_iter(attributes) {
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .or_else(|| attr.get(4))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match attr[1].to_ascii_lowercase().as_str() {
                "property" if property.is_none() => property = Some(value),
                "name" if name.is_none() => name = Some(value),
                "content" if content.is_none() => content = Some(value),
                _ => {}
            }
        }

        let Some(property) = property.or(name) else {
            continue;
        };
        let property = decode_entities(property.trim());
        if !selector.matches(&property) {
            continue;
        }
        let Some(content) = content else {
            debug!("Skipping meta tag '{}' without content", property);
            continue;
        };

        tags.push(MetaTag {
            property,
            content: decode_entities(content),
        });
    }

    debug!("Extracted {} meta tags", tags.len());
    tags
}

/// Decode the handful of entities that show up in attribute values
fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<MetaTag> {
        html_to_meta_tags(html, &MetaSelector::default())
    }

    #[test]
    fn test_extracts_in_document_order() {
        let html = r#"
            <meta property="fc:frame" content="vNext">
            <meta property="fc:frame:button:1" content="foo">
            <meta property="og:image" content="https://example.com/og">
        "#;
        let tags = extract(html);
        assert_eq!(
            tags,
            vec![
                MetaTag::new("fc:frame", "vNext"),
                MetaTag::new("fc:frame:button:1", "foo"),
                MetaTag::new("og:image", "https://example.com/og"),
            ]
        );
    }

    #[test]
    fn test_filters_by_prefix() {
        let html = r#"
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width">
            <meta property="twitter:card" content="summary">
            <meta property="fc:frame" content="vNext">
        "#;
        assert_eq!(extract(html), vec![MetaTag::new("fc:frame", "vNext")]);

        let all = html_to_meta_tags(html, &MetaSelector::with_prefixes(Vec::<String>::new()));
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_attribute_order_and_quoting() {
        let html = r#"
            <META content='bar' property='fc:frame:button:2' />
            <meta content=baz property=fc:frame:button:3>
            <meta name="fc:frame:image" content="http://example.com/image"/>
        "#;
        assert_eq!(
            extract(html),
            vec![
                MetaTag::new("fc:frame:button:2", "bar"),
                MetaTag::new("fc:frame:button:3", "baz"),
                MetaTag::new("fc:frame:image", "http://example.com/image"),
            ]
        );
    }

    #[test]
    fn test_decodes_entities_and_keeps_angle_brackets() {
        let html = r#"<meta property="fc:frame:button:1" content="Tom &amp; Jerry > &quot;cats&quot;">"#;
        assert_eq!(
            extract(html),
            vec![MetaTag::new("fc:frame:button:1", "Tom & Jerry > \"cats\"")]
        );
    }

    #[test]
    fn test_ignores_comments_and_raw_text_elements() {
        let html = r#"
            <meta property="fc:frame:button:1" content="foo">
            <!-- <meta property="fc:frame:button:2" content="hidden"> -->
            <script>var s = '<meta property="fc:frame:button:4" content="js">';</script>
            <STYLE type="text/css">/* <meta property="og:title" content="css"> */</STYLE>
            <meta property="fc:frame:button:3" content="baz">
            <!-- unterminated <meta property="fc:frame:state" content="x">
        "#;
        assert_eq!(
            extract(html),
            vec![
                MetaTag::new("fc:frame:button:1", "foo"),
                MetaTag::new("fc:frame:button:3", "baz"),
            ]
        );
    }

    #[test]
    fn test_skips_tags_without_content() {
        let html = r#"<meta property="fc:frame:button:1"><meta property="fc:frame" content="">"#;
        assert_eq!(extract(html), vec![MetaTag::new("fc:frame", "")]);
    }
}

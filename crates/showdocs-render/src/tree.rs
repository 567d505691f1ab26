//! Minimal HTML document tree.
//!
//! Elements are built with a small builder API and serialized in one pass.
//! Text content and attribute values are escaped; [`Content::Raw`] is written
//! verbatim.

use std::borrow::Cow;
use std::fmt::Write;

/// Elements without content or end tag.
const VOID_ELEMENTS: &[&str] = &["hr", "link", "meta"];

/// Elements followed by a line break when closed.
const BLOCK_ELEMENTS: &[&str] = &[
    "body", "dd", "details", "div", "dl", "dt", "h1", "h2", "head", "hr", "html", "link", "meta",
    "p", "pre", "summary", "title",
];

/// Elements followed by a line break after the start tag.
const CONTAINER_ELEMENTS: &[&str] = &["body", "details", "dl", "head", "html"];

/// Node content of an [`HtmlTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Nested element.
    Element(HtmlTree),
    /// Text, escaped on output.
    Text(String),
    /// Markup, written verbatim.
    Raw(String),
}

impl Content {
    /// Text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Raw markup content.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }
}

impl From<HtmlTree> for Content {
    fn from(tree: HtmlTree) -> Self {
        Self::Element(tree)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// HTML element with attributes and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlTree {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Content>,
}

impl HtmlTree {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element containing a single child.
    #[must_use]
    pub fn wrap(tag: &'static str, content: impl Into<Content>) -> Self {
        Self::new(tag).add(content)
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    /// Append a child.
    #[must_use]
    pub fn add(mut self, content: impl Into<Content>) -> Self {
        self.push(content);
        self
    }

    /// Append a child in place.
    pub fn push(&mut self, content: impl Into<Content>) {
        self.children.push(content.into());
    }

    /// Element tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child nodes.
    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// Serialize this element and its children.
    pub fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, r#" {name}="{}""#, escape_html(value));
        }
        out.push('>');

        if !VOID_ELEMENTS.contains(&self.tag) {
            if CONTAINER_ELEMENTS.contains(&self.tag) {
                out.push('\n');
            }
            for child in &self.children {
                match child {
                    Content::Element(tree) => tree.write(out),
                    Content::Text(text) => out.push_str(&escape_html(text)),
                    Content::Raw(markup) => out.push_str(markup),
                }
            }
            let _ = write!(out, "</{}>", self.tag);
        }

        if BLOCK_ELEMENTS.contains(&self.tag) {
            out.push('\n');
        }
    }

    /// Serialize to a new string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }
}

/// Escape text for use in HTML content and attribute values.
///
/// # Examples
///
/// ```
/// use showdocs_render::escape_html;
///
/// assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

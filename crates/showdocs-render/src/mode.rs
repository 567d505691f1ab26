//! Content encoding of descriptions.

use std::fmt;
use std::str::FromStr;

use crate::tree::{Content, HtmlTree};

/// How description markup is shown on generated pages.
///
/// Chosen once per run and applied to every description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum RenderMode {
    /// Description markup embedded as-is.
    RawMarkup,
    /// Description markup shown as preformatted source text.
    PlainText,
    /// Embedded markup followed by a collapsible "Source" view of the text.
    #[default]
    Both,
}

impl RenderMode {
    /// All modes, in display order.
    pub const ALL: [Self; 3] = [Self::RawMarkup, Self::PlainText, Self::Both];

    /// Encode one description.
    #[must_use]
    pub fn content(self, description: &str) -> HtmlTree {
        match self {
            Self::RawMarkup => raw_markup(description),
            Self::PlainText => plain_text(description),
            Self::Both => HtmlTree::new("div")
                .add(raw_markup(description))
                .add(
                    HtmlTree::new("details")
                        .add(HtmlTree::wrap("summary", "Source"))
                        .add(plain_text(description)),
                ),
        }
    }

    /// Name used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RawMarkup => "raw-markup",
            Self::PlainText => "plain-text",
            Self::Both => "both",
        }
    }
}

fn raw_markup(description: &str) -> HtmlTree {
    HtmlTree::wrap("div", Content::raw(description)).with_class("html")
}

fn plain_text(description: &str) -> HtmlTree {
    HtmlTree::wrap("pre", Content::text(description)).with_class("text")
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, thiserror::Error)]
#[error("unknown display mode: {0} (expected raw-markup, plain-text or both)")]
pub struct ParseRenderModeError(String);

impl FromStr for RenderMode {
    type Err = ParseRenderModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw-markup" | "html" => Ok(Self::RawMarkup),
            "plain-text" | "text" => Ok(Self::PlainText),
            "both" | "mixed" => Ok(Self::Both),
            other => Err(ParseRenderModeError(other.to_owned())),
        }
    }
}

//! Page reader for standard-doclet HTML output.
//!
//! Understands both the current doclet markup (`section.class-description`,
//! `section.detail[id]`, `section.serialized-class-details`) and the older
//! camel-case class names for headers and descriptions.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::model::{
    ApiDescription, CLASS, DeclarationNames, MODULE, PACKAGE, SerializedFormBundle,
    SerializedForms,
};
use crate::reader::PageReader;

static SUB_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".header .sub-title, .header .subTitle").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".header .title").unwrap());
static DESCRIPTION_BLOCK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "section.class-description .block, \
         section.package-description .block, \
         section.module-description .block, \
         div.description .block, \
         .packageDescription .block, \
         .moduleDescription .block",
    )
    .unwrap()
});
static MEMBER_DETAIL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.detail[id]").unwrap());
static LEGACY_MEMBER_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".details a[id]").unwrap());
static BLOCK: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".block").unwrap());
static SERIALIZED_CLASS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.serialized-class-details[id]").unwrap());
static SERIALIZED_DETAIL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.detail").unwrap());
static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h4").unwrap());
static ITEM_NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h5").unwrap());
static MEMBER_SIGNATURE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".member-signature").unwrap());
static DEFINITION_TERM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dl dt").unwrap());

/// Page title: element kind followed by the declared name.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(Module|Package|Class|Interface|Enum Class|Enum|Record Class|Record|Annotation Interface|Annotation Type)\s+(.+)$",
    )
    .unwrap()
});

/// Reader for pages generated by the standard doclet.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlPageReader;

impl HtmlPageReader {
    /// Create a new reader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract API descriptions from page markup.
    ///
    /// `path` is only used for error context.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NoDeclaration`] if the page has no title naming
    /// a module, package or type.
    pub fn parse_api_description(html: &str, path: &Path) -> Result<ApiDescription, ExtractError> {
        let document = Html::parse_document(html);

        let declaration = declaration_names(&document);
        if declaration.is_empty() {
            return Err(ExtractError::NoDeclaration(path.to_path_buf()));
        }

        let description = document.select(&DESCRIPTION_BLOCK).next().map(inner_markup);

        let mut members = std::collections::BTreeMap::new();
        for detail in document.select(&MEMBER_DETAIL) {
            let Some(id) = detail.value().attr("id") else {
                continue;
            };
            if let Some(block) = detail.select(&BLOCK).next() {
                members
                    .entry(id.to_owned())
                    .or_insert_with(|| inner_markup(block));
            }
        }
        if members.is_empty() {
            collect_legacy_members(&document, &mut members);
            if !members.is_empty() {
                tracing::debug!(path = %path.display(), "Using legacy member markup");
            }
        }

        Ok(ApiDescription {
            declaration,
            description,
            members,
        })
    }

    /// Extract serialized-form bundles from `serialized-form.html` markup.
    pub fn parse_serialized_forms(html: &str) -> SerializedForms {
        let document = Html::parse_document(html);
        let mut forms = SerializedForms::new();

        for class in document.select(&SERIALIZED_CLASS) {
            let Some(type_name) = class.value().attr("id") else {
                continue;
            };
            forms.insert(type_name.to_owned(), serialized_form_bundle(class));
        }

        forms
    }
}

impl PageReader for HtmlPageReader {
    fn read_api_description(&self, path: &Path) -> Result<ApiDescription, ExtractError> {
        let html = read_page(path)?;
        Self::parse_api_description(&html, path)
    }

    fn read_serialized_forms(&self, path: &Path) -> Result<SerializedForms, ExtractError> {
        let html = read_page(path)?;
        Ok(Self::parse_serialized_forms(&html))
    }
}

fn read_page(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))
}

/// Collect declaration names from the page header.
///
/// Sub-title lines come first in the header, followed by the title itself.
fn declaration_names(document: &Html) -> DeclarationNames {
    let mut names = DeclarationNames::new();

    for line in document.select(&SUB_TITLE) {
        let text = normalize_whitespace(&element_text(line));
        let label = line
            .children()
            .filter_map(ElementRef::wrap)
            .find(|child| child.value().name() == "span")
            .map(|span| normalize_whitespace(&element_text(span)));

        let (key, value) = match label.as_deref() {
            Some("Module") => (MODULE, text.trim_start_matches("Module")),
            Some("Package") => (PACKAGE, text.trim_start_matches("Package")),
            Some(_) => continue,
            None => (PACKAGE, text.as_str()),
        };
        let value = value.trim();
        if !value.is_empty() {
            names.insert(key, value);
        }
    }

    if let Some(title) = document.select(&TITLE).next() {
        let text = match title.value().attr("title") {
            Some(attr) => normalize_whitespace(attr),
            None => normalize_whitespace(&element_text(title)),
        };
        if let Some((key, name)) = parse_title(&text) {
            names.insert(key, name);
        }
    }

    names
}

/// Split a page title into its component key and declared name.
///
/// Type parameters are dropped from type names.
fn parse_title(title: &str) -> Option<(&'static str, &str)> {
    let caps = TITLE_RE.captures(title)?;
    let kind = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str();
    let key = match kind {
        "Module" => MODULE,
        "Package" => PACKAGE,
        _ => CLASS,
    };
    let name = name.split('<').next().unwrap_or(name).trim();
    (!name.is_empty()).then_some((key, name))
}

/// Member details in pages that mark members with `<a id=...>` anchors
/// followed by a `<ul>` holding the detail.
fn collect_legacy_members(
    document: &Html,
    members: &mut std::collections::BTreeMap<String, String>,
) {
    for anchor in document.select(&LEGACY_MEMBER_ANCHOR) {
        let Some(id) = anchor.value().attr("id") else {
            continue;
        };
        let Some(next) = anchor.next_siblings().find_map(ElementRef::wrap) else {
            continue;
        };
        if next.value().name() != "ul" {
            continue;
        }
        if let Some(block) = next.select(&BLOCK).next() {
            members
                .entry(id.to_owned())
                .or_insert_with(|| inner_markup(block));
        }
    }
}

fn serialized_form_bundle(class: ElementRef<'_>) -> SerializedFormBundle {
    let mut bundle = SerializedFormBundle {
        serial_version_uid: serial_version_uid(class),
        ..SerializedFormBundle::default()
    };

    for detail in class.select(&SERIALIZED_DETAIL) {
        let heading = detail
            .select(&HEADING)
            .next()
            .map(|h| normalize_whitespace(&element_text(h)))
            .unwrap_or_default();

        match heading.as_str() {
            "Serialization Overview" => {
                if bundle.overview.is_none() {
                    bundle.overview = detail.select(&BLOCK).next().map(inner_markup);
                }
            }
            "Serialized Fields" => {
                for item in list_items(detail) {
                    let Some(name) = item.select(&ITEM_NAME).next() else {
                        continue;
                    };
                    if let Some(block) = item.select(&BLOCK).next() {
                        bundle.fields.push((
                            normalize_whitespace(&element_text(name)),
                            inner_markup(block),
                        ));
                    }
                }
            }
            "Serialization Methods" => {
                for item in list_items(detail) {
                    let signature = item
                        .select(&MEMBER_SIGNATURE)
                        .next()
                        .or_else(|| item.select(&ITEM_NAME).next());
                    let Some(signature) = signature else {
                        continue;
                    };
                    if let Some(block) = item.select(&BLOCK).next() {
                        bundle.methods.push((
                            normalize_whitespace(&element_text(signature)),
                            inner_markup(block),
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    bundle
}

fn serial_version_uid(class: ElementRef<'_>) -> Option<String> {
    class
        .select(&DEFINITION_TERM)
        .find(|dt| element_text(*dt).trim().starts_with("serialVersionUID"))
        .and_then(|dt| dt.next_siblings().find_map(ElementRef::wrap))
        .filter(|dd| dd.value().name() == "dd")
        .map(inner_markup)
}

/// `<li>` children of the `<ul>` children of a detail section.
fn list_items(section: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    section
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "ul")
        .flat_map(|list| {
            list.children()
                .filter_map(ElementRef::wrap)
                .filter(|item| item.value().name() == "li")
        })
}

fn inner_markup(element: ElementRef<'_>) -> String {
    element.inner_html().trim().to_owned()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Collapse runs of whitespace (including no-break spaces) to single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Description page rendering.
//!
//! Turns extracted descriptions into standalone HTML pages:
//!
//! - [`PageRenderer::render_api_page`]: main and member descriptions of one
//!   API page, with the type's serialized form appended when one is known
//! - [`PageRenderer::render_serialized_form_index`]: every bundle of a
//!   serialized-form page
//!
//! Every description is encoded according to a single [`RenderMode`]: as raw
//! markup, as preformatted text, or both with the text in a disclosure
//! element. Pages are built as [`HtmlTree`] values and serialized with
//! [`OutputDocument::to_html`].
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use showdocs_extract::{ApiDescription, DeclarationNames};
//! use showdocs_render::{PageRenderer, RenderMode, path_to_root};
//!
//! let api = ApiDescription {
//!     declaration: DeclarationNames::new().with("package", "pkg").with("class", "Foo"),
//!     description: Some("Foo class".to_owned()),
//!     ..ApiDescription::default()
//! };
//! let rel = Path::new("pkg/Foo.html");
//! let page = PageRenderer::new(RenderMode::PlainText).render_api_page(
//!     "pkg/Foo.html",
//!     &path_to_root(rel),
//!     &api,
//!     None,
//! );
//! assert!(page.to_html().contains("Declaration: package: pkg, class: Foo"));
//! ```

mod mode;
mod page;
mod path;
mod tree;

pub use mode::{ParseRenderModeError, RenderMode};
pub use page::{
    DEFAULT_STYLESHEET, GENERATOR, OutputDocument, PageRenderer, SERIALIZED_FORMS_TITLE,
    declaration_summary,
};
pub use path::{path_to_root, stylesheet_href};
pub use tree::{Content, HtmlTree, escape_html};

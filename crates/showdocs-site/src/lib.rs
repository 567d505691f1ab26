//! Documentation tree conversion for showdocs.
//!
//! Walks a generated API documentation tree, extracts descriptions from each
//! selected page through a [`PageReader`](showdocs_extract::PageReader), and
//! writes a simplified description page for it under the output directory.
//!
//! Type pages are enriched with the serialized form of the declared type when
//! the tree has a `serialized-form.html` page at its root.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use showdocs_extract::HtmlPageReader;
//! use showdocs_render::RenderMode;
//! use showdocs_site::{ConvertConfig, Converter};
//!
//! let config = ConvertConfig {
//!     mode: RenderMode::PlainText,
//!     ..ConvertConfig::default()
//! };
//! let report = Converter::new(HtmlPageReader::new(), config)
//!     .run(Path::new("build/docs/javadoc"), Path::new("out"))?;
//! println!("{} pages written", report.written.len());
//! ```

mod converter;
mod correlation;
mod scanner;

pub use converter::{
    BuildError, BuildReport, ConvertConfig, Converter, PageError, PageFailure, StylesheetError,
};
pub use correlation::CorrelationIndex;
pub use scanner::{DocPage, PageKind, SERIALIZED_FORM_PAGE, Scanner, classify, is_skipped_dir};

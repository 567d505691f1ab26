//! Description extraction from javadoc-generated API pages.
//!
//! This crate defines the data extracted from a documentation tree and the
//! [`PageReader`] capability used to obtain it:
//!
//! - [`ApiDescription`]: declaration names, main description and member
//!   descriptions of a single API page
//! - [`SerializedFormBundle`]: the serialized-form descriptions of one type
//! - [`SerializedForms`]: every bundle on a `serialized-form.html` page,
//!   keyed by fully-qualified type name
//!
//! [`HtmlPageReader`] is the default reader and understands the markup
//! produced by the standard doclet. [`MockPageReader`] (behind the `mock`
//! feature) serves canned descriptions for tests.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use showdocs_extract::{HtmlPageReader, PageReader};
//!
//! let reader = HtmlPageReader::new();
//! let api = reader.read_api_description(Path::new("docs/java/lang/Object.html"))?;
//! println!("{:?}", api.declaration.qualified_type_name());
//! ```

mod error;
mod html;
#[cfg(feature = "mock")]
mod mock;
mod model;
mod reader;

pub use error::ExtractError;
pub use html::HtmlPageReader;
#[cfg(feature = "mock")]
pub use mock::MockPageReader;
pub use model::{ApiDescription, DeclarationNames, SerializedFormBundle, SerializedForms};
pub use reader::PageReader;

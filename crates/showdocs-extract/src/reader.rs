//! Page reader capability.

use std::path::Path;

use crate::error::ExtractError;
use crate::model::{ApiDescription, SerializedForms};

/// Source of description data for documentation pages.
///
/// Implementations own the parsing of a page. Callers only see the extracted
/// shapes, so any parser that produces them can be substituted.
pub trait PageReader {
    /// Read the descriptions of an API page (type, package or module summary).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the page cannot be read or declares nothing.
    fn read_api_description(&self, path: &Path) -> Result<ApiDescription, ExtractError>;

    /// Read every serialized-form bundle from a `serialized-form.html` page.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the page cannot be read.
    fn read_serialized_forms(&self, path: &Path) -> Result<SerializedForms, ExtractError>;
}

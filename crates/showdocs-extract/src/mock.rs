//! Mock page reader for testing.
//!
//! Provides [`MockPageReader`] for testing the conversion pipeline without
//! writing real doclet markup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;
use crate::model::{ApiDescription, SerializedForms};
use crate::reader::PageReader;

/// Mock page reader.
///
/// Pages are looked up by file name relative to a root directory, so fixtures
/// can be registered as `"pkg/Foo.html"` regardless of where the test tree
/// lives. Unregistered pages fail with [`ExtractError::NotFound`].
///
/// # Example
///
/// ```ignore
/// use showdocs_extract::{ApiDescription, MockPageReader};
///
/// let reader = MockPageReader::new(dir.path())
///     .with_api_page("pkg/Foo.html", ApiDescription::default());
/// ```
#[derive(Debug, Default)]
pub struct MockPageReader {
    root: PathBuf,
    api_pages: HashMap<PathBuf, ApiDescription>,
    serialized_form_pages: HashMap<PathBuf, SerializedForms>,
}

impl MockPageReader {
    /// Create a mock reader resolving fixture paths against `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Register the descriptions of an API page.
    #[must_use]
    pub fn with_api_page(mut self, rel_path: impl AsRef<Path>, api: ApiDescription) -> Self {
        self.api_pages.insert(self.root.join(rel_path), api);
        self
    }

    /// Register the bundles of a serialized-form page.
    #[must_use]
    pub fn with_serialized_form_page(
        mut self,
        rel_path: impl AsRef<Path>,
        forms: SerializedForms,
    ) -> Self {
        self.serialized_form_pages
            .insert(self.root.join(rel_path), forms);
        self
    }
}

impl PageReader for MockPageReader {
    fn read_api_description(&self, path: &Path) -> Result<ApiDescription, ExtractError> {
        self.api_pages
            .get(path)
            .cloned()
            .ok_or_else(|| ExtractError::NotFound(path.to_path_buf()))
    }

    fn read_serialized_forms(&self, path: &Path) -> Result<SerializedForms, ExtractError> {
        self.serialized_form_pages
            .get(path)
            .cloned()
            .ok_or_else(|| ExtractError::NotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeclarationNames;

    #[test]
    fn test_registered_page_is_returned() {
        let api = ApiDescription {
            declaration: DeclarationNames::new().with("class", "Foo"),
            ..ApiDescription::default()
        };
        let reader = MockPageReader::new("/docs").with_api_page("Foo.html", api.clone());

        assert_eq!(
            reader
                .read_api_description(Path::new("/docs/Foo.html"))
                .unwrap(),
            api
        );
    }

    #[test]
    fn test_unregistered_page_fails() {
        let reader = MockPageReader::new("/docs");

        assert!(matches!(
            reader.read_serialized_forms(Path::new("/docs/serialized-form.html")),
            Err(ExtractError::NotFound(_))
        ));
    }
}

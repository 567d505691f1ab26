//! Serialized-form lookup for API pages.

use std::path::Path;

use showdocs_extract::{
    DeclarationNames, ExtractError, PageReader, SerializedFormBundle, SerializedForms,
};

use crate::scanner::SERIALIZED_FORM_PAGE;

/// Serialized-form bundles of a documentation tree, keyed by type name.
///
/// Built once from the `serialized-form.html` page at the root of the input
/// tree and read-only afterwards.
#[derive(Debug, Default)]
pub struct CorrelationIndex {
    forms: SerializedForms,
}

impl CorrelationIndex {
    /// Create an index from already extracted bundles.
    #[must_use]
    pub fn new(forms: SerializedForms) -> Self {
        Self { forms }
    }

    /// Build the index for an input tree.
    ///
    /// Returns `Ok(None)` when `input` is not a directory or has no
    /// `serialized-form.html` directly under it. Pages elsewhere in the tree
    /// are never consulted.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the root serialized-form page exists but
    /// cannot be read.
    pub fn build(reader: &dyn PageReader, input: &Path) -> Result<Option<Self>, ExtractError> {
        if !input.is_dir() {
            return Ok(None);
        }
        let page = input.join(SERIALIZED_FORM_PAGE);
        if !page.exists() {
            return Ok(None);
        }

        let forms = reader.read_serialized_forms(&page)?;
        tracing::info!(path = %page.display(), types = forms.len(), "Loaded serialized forms");
        Ok(Some(Self::new(forms)))
    }

    /// Bundle for the type declared by `declaration`.
    ///
    /// Only declarations with a `class` component are looked up, under the
    /// name `package.class` (or the bare class name without a package).
    pub fn lookup(&self, declaration: &DeclarationNames) -> Option<&SerializedFormBundle> {
        let type_name = declaration.qualified_type_name()?;
        self.forms.get(&type_name)
    }

    /// All bundles.
    pub fn forms(&self) -> &SerializedForms {
        &self.forms
    }

    /// Number of types in the index.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether the index has no types.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdocs_extract::MockPageReader;

    fn bundle(overview: &str) -> SerializedFormBundle {
        SerializedFormBundle {
            overview: Some(overview.to_owned()),
            ..SerializedFormBundle::default()
        }
    }

    fn index() -> CorrelationIndex {
        let mut forms = SerializedForms::new();
        forms.insert("pkg.Foo".to_owned(), bundle("foo"));
        forms.insert("Bare".to_owned(), bundle("bare"));
        CorrelationIndex::new(forms)
    }

    #[test]
    fn test_lookup_joins_package_and_class() {
        let names = DeclarationNames::new()
            .with("module", "m")
            .with("package", "pkg")
            .with("class", "Foo");
        assert_eq!(
            index().lookup(&names).and_then(|b| b.overview.as_deref()),
            Some("foo")
        );
    }

    #[test]
    fn test_lookup_requires_class_component() {
        let names = DeclarationNames::new().with("package", "pkg.Foo");
        assert!(index().lookup(&names).is_none());
    }

    #[test]
    fn test_lookup_default_package_uses_bare_name() {
        let names = DeclarationNames::new().with("class", "Bare");
        assert_eq!(
            index().lookup(&names).and_then(|b| b.overview.as_deref()),
            Some("bare")
        );
    }

    #[test]
    fn test_lookup_unknown_type() {
        let names = DeclarationNames::new()
            .with("package", "pkg")
            .with("class", "Other");
        assert!(index().lookup(&names).is_none());
    }

    #[test]
    fn test_build_without_root_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join(SERIALIZED_FORM_PAGE), "").unwrap();
        let reader = MockPageReader::new(dir.path());

        let index = CorrelationIndex::build(&reader, dir.path()).unwrap();

        assert!(index.is_none());
    }

    #[test]
    fn test_build_from_root_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SERIALIZED_FORM_PAGE), "").unwrap();
        let mut forms = SerializedForms::new();
        forms.insert("pkg.Foo".to_owned(), bundle("foo"));
        let reader =
            MockPageReader::new(dir.path()).with_serialized_form_page(SERIALIZED_FORM_PAGE, forms);

        let index = CorrelationIndex::build(&reader, dir.path()).unwrap().unwrap();

        assert_eq!(index.len(), 1);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_build_single_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join(SERIALIZED_FORM_PAGE);
        std::fs::write(&page, "").unwrap();
        let reader = MockPageReader::new(dir.path());

        assert!(CorrelationIndex::build(&reader, &page).unwrap().is_none());
    }

    #[test]
    fn test_build_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SERIALIZED_FORM_PAGE), "").unwrap();
        let reader = MockPageReader::new(dir.path());

        assert!(CorrelationIndex::build(&reader, dir.path()).is_err());
    }
}

//! Description data extracted from documentation pages.

use std::collections::BTreeMap;

/// Component key for the declaring module.
pub const MODULE: &str = "module";
/// Component key for the declaring package.
pub const PACKAGE: &str = "package";
/// Component key for the declared type.
pub const CLASS: &str = "class";

/// Declaration-name components of a page, in order of discovery.
///
/// Each key appears at most once. Inserting an existing key replaces the
/// value and keeps the key at its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclarationNames {
    entries: Vec<(String, String)>,
}

impl DeclarationNames {
    /// Create an empty set of declaration names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component, replacing the value of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value of a component.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate components in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no component was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fully-qualified name of the declared type.
    ///
    /// Joins `package` (if present) and `class` with `.`. Returns `None` when
    /// there is no `class` component, as on package and module summaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdocs_extract::DeclarationNames;
    ///
    /// let names = DeclarationNames::new().with("package", "pkg").with("class", "Foo");
    /// assert_eq!(names.qualified_type_name().as_deref(), Some("pkg.Foo"));
    ///
    /// let names = DeclarationNames::new().with("class", "Foo");
    /// assert_eq!(names.qualified_type_name().as_deref(), Some("Foo"));
    /// ```
    pub fn qualified_type_name(&self) -> Option<String> {
        let class = self.get(CLASS)?;
        Some(match self.get(PACKAGE) {
            Some(package) => format!("{package}.{class}"),
            None => class.to_owned(),
        })
    }
}

/// Descriptions found on one API page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiDescription {
    /// Declaration-name components.
    pub declaration: DeclarationNames,
    /// Main description markup, `None` when the page has none.
    pub description: Option<String>,
    /// Member description markup keyed by member signature.
    pub members: BTreeMap<String, String>,
}

/// Serialized-form descriptions of one serializable type.
///
/// Fields and methods keep the order in which they were found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SerializedFormBundle {
    /// Serialization overview.
    pub overview: Option<String>,
    /// Serial version identifier.
    pub serial_version_uid: Option<String>,
    /// Field descriptions keyed by field name.
    pub fields: Vec<(String, String)>,
    /// Method descriptions keyed by method signature.
    pub methods: Vec<(String, String)>,
}

impl SerializedFormBundle {
    /// Names of the items present in this bundle, for diagnostics.
    pub fn item_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        if self.overview.is_some() {
            names.push("overview");
        }
        if self.serial_version_uid.is_some() {
            names.push("svuid");
        }
        names.extend(self.fields.iter().map(|(name, _)| name.as_str()));
        names.extend(self.methods.iter().map(|(name, _)| name.as_str()));
        names
    }
}

/// Serialized-form bundles keyed by fully-qualified type name.
pub type SerializedForms = BTreeMap<String, SerializedFormBundle>;

//! Relative paths between generated pages and the output root.

use std::path::{Component, Path, PathBuf};

/// Path from the directory of `rel_file` back to the output root.
///
/// Every directory segment of `rel_file` becomes `..`. A file at the root
/// gives `.`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use showdocs_render::path_to_root;
///
/// assert_eq!(path_to_root(Path::new("Foo.html")), PathBuf::from("."));
/// assert_eq!(path_to_root(Path::new("java/lang/Object.html")), PathBuf::from("../.."));
/// ```
pub fn path_to_root(rel_file: &Path) -> PathBuf {
    let ups: PathBuf = rel_file
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|_| Component::ParentDir)
        .collect();

    if ups.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        ups
    }
}

/// Link target for the stylesheet, relative to a page.
///
/// `path_to_root` is the result of [`path_to_root`]; segments are joined with
/// `/` whatever the platform separator.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use showdocs_render::stylesheet_href;
///
/// assert_eq!(stylesheet_href(Path::new("."), "showDocs.css"), "./showDocs.css");
/// assert_eq!(stylesheet_href(Path::new("../.."), "showDocs.css"), "../../showDocs.css");
/// ```
pub fn stylesheet_href(path_to_root: &Path, stylesheet: &str) -> String {
    let mut segments: Vec<String> = path_to_root
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    segments.push(stylesheet.to_owned());
    segments.join("/")
}

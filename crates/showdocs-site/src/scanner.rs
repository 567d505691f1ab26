//! Page discovery by filesystem walking.
//!
//! The [`Scanner`] only identifies files that look like documentation pages.
//! Nothing is read at this stage; the converter extracts and renders each
//! [`DocPage`] as it is yielded.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// File name of the serialized-form page.
pub const SERIALIZED_FORM_PAGE: &str = "serialized-form.html";

/// Directories holding library assets rather than documentation.
const SKIPPED_DIRS: &[&str] = &["jquery", "resources"];

/// Summary pages, the serialized-form page, and type pages (named after the
/// type, so starting with an uppercase letter).
static PAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:module-summary|package-summary|serialized-form|[A-Z].*)\.html$").unwrap()
});

/// Kind of a selected page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Type, package or module page.
    Api,
    /// `serialized-form.html`.
    SerializedForm,
}

/// Classify a file by name. `None` means the file is ignored.
///
/// # Examples
///
/// ```
/// use showdocs_site::{PageKind, classify};
///
/// assert_eq!(classify("Object.html"), Some(PageKind::Api));
/// assert_eq!(classify("serialized-form.html"), Some(PageKind::SerializedForm));
/// assert_eq!(classify("index.html"), None);
/// ```
pub fn classify(file_name: &str) -> Option<PageKind> {
    if !PAGE_NAME_RE.is_match(file_name) {
        return None;
    }
    if file_name == SERIALIZED_FORM_PAGE {
        Some(PageKind::SerializedForm)
    } else {
        Some(PageKind::Api)
    }
}

/// Whether the walk must not descend into a directory with this name.
pub fn is_skipped_dir(name: &str) -> bool {
    SKIPPED_DIRS.contains(&name)
}

/// A selected input page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocPage {
    /// Path of the input file.
    pub path: PathBuf,
    /// Path relative to the input root; the file name for single-file runs.
    pub rel_path: PathBuf,
    /// Page kind.
    pub kind: PageKind,
}

impl DocPage {
    /// Page title: the relative path.
    pub fn title(&self) -> String {
        self.rel_path.to_string_lossy().into_owned()
    }
}

/// Lazily walks an input tree, yielding pages depth-first.
///
/// Entries of each directory are visited in file-name order. Directories
/// named `jquery` or `resources` are never entered, the root included. If the
/// root is a file, it is the only candidate.
pub struct Scanner {
    root: PathBuf,
    /// Remaining entries of each open directory, innermost last.
    stack: Vec<std::vec::IntoIter<(PathBuf, bool)>>,
    /// Root path of a single-file run, until yielded.
    single_file: Option<PathBuf>,
}

impl Scanner {
    /// Create a scanner for a directory tree or a single file.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut scanner = Self {
            root: root.clone(),
            stack: Vec::new(),
            single_file: None,
        };
        if root.is_dir() {
            let skipped = root
                .file_name()
                .is_some_and(|name| is_skipped_dir(&name.to_string_lossy()));
            if skipped {
                tracing::debug!(path = %root.display(), "Skipping directory");
            } else {
                scanner.enter(&root);
            }
        } else {
            scanner.single_file = Some(root);
        }
        scanner
    }

    /// Open a directory and push its sorted entries.
    fn enter(&mut self, dir: &Path) {
        tracing::debug!(path = %dir.display(), "dir");
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "Failed to read directory");
                return;
            }
        };

        // Cache file_type to avoid repeated stat calls
        let mut entries: Vec<(PathBuf, bool)> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e.path(), is_dir)
            })
            .collect();
        entries.sort();
        self.stack.push(entries.into_iter());
    }

    fn page(&self, path: PathBuf) -> Option<DocPage> {
        let kind = classify(&path.file_name()?.to_string_lossy())?;
        let rel_path = if path == self.root {
            PathBuf::from(path.file_name()?)
        } else {
            path.strip_prefix(&self.root)
                .map_or_else(|_| path.clone(), Path::to_path_buf)
        };
        tracing::debug!(path = %path.display(), "file");
        Some(DocPage {
            path,
            rel_path,
            kind,
        })
    }
}

impl Iterator for Scanner {
    type Item = DocPage;

    fn next(&mut self) -> Option<DocPage> {
        if let Some(file) = self.single_file.take() {
            return self.page(file);
        }

        loop {
            let entries = self.stack.last_mut()?;
            let Some((path, is_dir)) = entries.next() else {
                self.stack.pop();
                continue;
            };

            if is_dir {
                let skipped = path
                    .file_name()
                    .is_some_and(|name| is_skipped_dir(&name.to_string_lossy()));
                if skipped {
                    tracing::debug!(path = %path.display(), "Skipping directory");
                } else {
                    self.enter(&path);
                }
                continue;
            }

            if let Some(page) = self.page(path) {
                return Some(page);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn rel_paths(scanner: Scanner) -> Vec<String> {
        scanner
            .map(|page| page.rel_path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_classify_selected_names() {
        assert_eq!(classify("package-summary.html"), Some(PageKind::Api));
        assert_eq!(classify("module-summary.html"), Some(PageKind::Api));
        assert_eq!(classify("Foo.html"), Some(PageKind::Api));
        assert_eq!(classify("Map.Entry.html"), Some(PageKind::Api));
        assert_eq!(classify("X.html"), Some(PageKind::Api));
        assert_eq!(
            classify("serialized-form.html"),
            Some(PageKind::SerializedForm)
        );
    }

    #[test]
    fn test_classify_ignored_names() {
        for name in [
            "index.html",
            "package-tree.html",
            "allclasses-index.html",
            "foo.html",
            "Foo.htm",
            "Foo.html.bak",
            "Foo.css",
            "module-summary.htmlx",
            "_Foo.html",
            ".html",
            "serialized-form.html~",
        ] {
            assert_eq!(classify(name), None, "{name}");
        }
    }

    #[test]
    fn test_is_skipped_dir() {
        assert!(is_skipped_dir("jquery"));
        assert!(is_skipped_dir("resources"));
        assert!(!is_skipped_dir("Resources"));
        assert!(!is_skipped_dir("java"));
    }

    #[test]
    fn test_scan_depth_first_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b/Z.html");
        touch(dir.path(), "b/a/package-summary.html");
        touch(dir.path(), "A.html");
        touch(dir.path(), "c/C.html");
        touch(dir.path(), "serialized-form.html");

        assert_eq!(
            rel_paths(Scanner::new(dir.path())),
            vec![
                "A.html",
                "b/Z.html",
                "b/a/package-summary.html",
                "c/C.html",
                "serialized-form.html",
            ]
        );
    }

    #[test]
    fn test_scan_skips_asset_directories_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "jquery/Foo.html");
        touch(dir.path(), "resources/Bar.html");
        touch(dir.path(), "pkg/resources/Baz.html");
        touch(dir.path(), "pkg/sub/jquery/package-summary.html");
        touch(dir.path(), "pkg/Keep.html");

        assert_eq!(rel_paths(Scanner::new(dir.path())), vec!["pkg/Keep.html"]);
    }

    #[test]
    fn test_scan_root_named_like_asset_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "resources/pkg/Foo.html");
        touch(dir.path(), "jquery/Bar.html");

        assert_eq!(Scanner::new(dir.path().join("resources")).count(), 0);
        assert_eq!(Scanner::new(dir.path().join("jquery")).count(), 0);
    }

    #[test]
    fn test_scan_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "pkg/package-tree.html");
        touch(dir.path(), "pkg/Foo.html");
        touch(dir.path(), "stylesheet.css");

        let pages: Vec<DocPage> = Scanner::new(dir.path()).collect();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].path, dir.path().join("pkg/Foo.html"));
        assert_eq!(pages[0].kind, PageKind::Api);
        assert_eq!(pages[0].rel_path, Path::new("pkg").join("Foo.html"));
    }

    #[test]
    fn test_scan_single_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "pkg/Foo.html");

        let pages: Vec<DocPage> = Scanner::new(dir.path().join("pkg/Foo.html")).collect();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].rel_path, PathBuf::from("Foo.html"));
        assert_eq!(pages[0].title(), "Foo.html");
    }

    #[test]
    fn test_scan_single_ignored_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "index.html");

        assert_eq!(Scanner::new(dir.path().join("index.html")).count(), 0);
    }

    #[test]
    fn test_scan_is_lazy() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "A.html");
        touch(dir.path(), "later/B.html");

        let mut scanner = Scanner::new(dir.path());
        let first = scanner.next().unwrap();
        assert_eq!(first.rel_path, PathBuf::from("A.html"));
        // The subdirectory has not been opened yet.
        assert_eq!(scanner.stack.len(), 1);
        assert!(scanner.next().is_some());
        assert!(scanner.next().is_none());
    }
}

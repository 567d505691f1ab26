//! Conversion of a documentation tree into description pages.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use showdocs_extract::{ApiDescription, ExtractError, PageReader, SerializedForms};
use showdocs_render::{
    DEFAULT_STYLESHEET, OutputDocument, PageRenderer, RenderMode, SERIALIZED_FORMS_TITLE,
    path_to_root,
};

use crate::correlation::CorrelationIndex;
use crate::scanner::{DocPage, PageKind, SERIALIZED_FORM_PAGE, Scanner};

/// Configuration for [`Converter`].
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Content encoding applied to every description.
    pub mode: RenderMode,
    /// Stylesheet file name at the output root.
    pub stylesheet_name: String,
    /// Custom stylesheet to copy instead of the built-in one.
    pub stylesheet_source: Option<PathBuf>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            stylesheet_name: DEFAULT_STYLESHEET.to_owned(),
            stylesheet_source: None,
        }
    }
}

/// Error that stops a run before any page is converted.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The input path does not exist.
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),
    /// The root serialized-form page could not be read.
    #[error("cannot build serialized-form index: {0}")]
    Index(#[source] ExtractError),
}

/// Error converting a single page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Descriptions could not be extracted.
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// The output page could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Error copying the stylesheet to the output root.
#[derive(Debug, thiserror::Error)]
pub enum StylesheetError {
    /// The built-in stylesheet is not available.
    #[error("built-in stylesheet not found: {0}")]
    Missing(&'static str),
    /// The custom stylesheet could not be read.
    #[error("cannot read stylesheet {}: {source}", path.display())]
    Read {
        /// Custom stylesheet path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The stylesheet could not be written.
    #[error("cannot write stylesheet {}: {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A page that could not be converted.
#[derive(Debug)]
pub struct PageFailure {
    /// Input page path.
    pub path: PathBuf,
    /// Cause.
    pub error: PageError,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Output pages written, in walk order.
    pub written: Vec<PathBuf>,
    /// Pages skipped because of an error.
    pub failures: Vec<PageFailure>,
    /// Stylesheet copy error, if any.
    pub stylesheet_error: Option<StylesheetError>,
}

/// Converts a documentation tree into description pages.
///
/// Each selected input page produces one output page at the same relative
/// path under the output directory. Failures of individual pages are
/// collected in the [`BuildReport`] and do not stop the run.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use showdocs_extract::HtmlPageReader;
/// use showdocs_site::{ConvertConfig, Converter};
///
/// let converter = Converter::new(HtmlPageReader::new(), ConvertConfig::default());
/// let report = converter.run(Path::new("build/docs/api"), Path::new("out"))?;
/// for failure in &report.failures {
///     eprintln!("{}: {}", failure.path.display(), failure.error);
/// }
/// ```
pub struct Converter {
    reader: Box<dyn PageReader>,
    renderer: PageRenderer,
    stylesheet_name: String,
    stylesheet_source: Option<PathBuf>,
}

impl Converter {
    /// Create a converter reading pages with `reader`.
    pub fn new(reader: impl PageReader + 'static, config: ConvertConfig) -> Self {
        Self {
            reader: Box::new(reader),
            renderer: PageRenderer::new(config.mode).with_stylesheet(&config.stylesheet_name),
            stylesheet_name: config.stylesheet_name,
            stylesheet_source: config.stylesheet_source,
        }
    }

    /// Convert the tree (or single page) at `input` into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if `input` does not exist or its root
    /// serialized-form page cannot be read. Page and stylesheet failures are
    /// reported in the returned [`BuildReport`] instead.
    pub fn run(&self, input: &Path, output_dir: &Path) -> Result<BuildReport, BuildError> {
        if !input.exists() {
            return Err(BuildError::InputNotFound(input.to_path_buf()));
        }

        let index =
            CorrelationIndex::build(self.reader.as_ref(), input).map_err(BuildError::Index)?;

        let mut report = BuildReport::default();
        for page in Scanner::new(input) {
            match self.convert_page(&page, index.as_ref(), output_dir) {
                Ok(out_file) => report.written.push(out_file),
                Err(e) => {
                    tracing::debug!(path = %page.path.display(), error = %e, "Failed to convert page");
                    report.failures.push(PageFailure {
                        path: page.path,
                        error: e,
                    });
                }
            }
        }

        match self.copy_stylesheet(output_dir) {
            Ok(path) => tracing::debug!(path = %path.display(), "Stylesheet written"),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to copy stylesheet");
                report.stylesheet_error = Some(e);
            }
        }

        tracing::info!(
            written = report.written.len(),
            failed = report.failures.len(),
            "Conversion finished"
        );
        Ok(report)
    }

    fn convert_page(
        &self,
        page: &DocPage,
        index: Option<&CorrelationIndex>,
        output_dir: &Path,
    ) -> Result<PathBuf, PageError> {
        let path_to_root = path_to_root(&page.rel_path);

        let document = match page.kind {
            PageKind::SerializedForm => {
                // The root page was already read to build the index.
                let indexed = index
                    .filter(|_| page.rel_path == Path::new(SERIALIZED_FORM_PAGE))
                    .map(CorrelationIndex::forms);
                let forms = match indexed {
                    Some(forms) => Cow::Borrowed(forms),
                    None => Cow::Owned(self.reader.read_serialized_forms(&page.path)?),
                };
                trace_serialized_forms(&forms);
                self.renderer.render_serialized_form_index(
                    SERIALIZED_FORMS_TITLE,
                    &path_to_root,
                    &forms,
                )
            }
            PageKind::Api => {
                let api = self.reader.read_api_description(&page.path)?;
                trace_api_description(&api);
                let serialized_form = index.and_then(|index| index.lookup(&api.declaration));
                self.renderer
                    .render_api_page(&page.title(), &path_to_root, &api, serialized_form)
            }
        };

        let out_file = output_dir.join(&page.rel_path);
        write_document(&out_file, &document)?;
        Ok(out_file)
    }

    fn copy_stylesheet(&self, output_dir: &Path) -> Result<PathBuf, StylesheetError> {
        let content = match &self.stylesheet_source {
            Some(source) => Cow::Owned(fs::read(source).map_err(|e| StylesheetError::Read {
                path: source.clone(),
                source: e,
            })?),
            None => showdocs_assets::get(showdocs_assets::STYLESHEET)
                .ok_or(StylesheetError::Missing(showdocs_assets::STYLESHEET))?,
        };

        let target = output_dir.join(&self.stylesheet_name);
        fs::create_dir_all(output_dir)
            .and_then(|()| fs::write(&target, &content))
            .map_err(|e| StylesheetError::Write {
                path: target.clone(),
                source: e,
            })?;
        Ok(target)
    }
}

fn write_document(out_file: &Path, document: &OutputDocument) -> Result<(), PageError> {
    let write_err = |e| PageError::Write {
        path: out_file.to_path_buf(),
        source: e,
    };
    if let Some(parent) = out_file.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(out_file, document.to_html()).map_err(write_err)
}

fn trace_api_description(api: &ApiDescription) {
    tracing::debug!(
        description = ?api.description.as_deref().map(short_text),
        members = ?api.members.keys().collect::<Vec<_>>(),
        "Extracted descriptions"
    );
    for (signature, description) in &api.members {
        tracing::debug!(
            member = short_text(signature),
            description = short_text(description),
            "Member description"
        );
    }
}

fn trace_serialized_forms(forms: &SerializedForms) {
    for (type_name, bundle) in forms {
        tracing::debug!(
            type_name = %type_name,
            items = short_text(&bundle.item_names().join(",")),
            "Serialized form"
        );
    }
}

/// First ten characters of `s`, for diagnostics.
fn short_text(s: &str) -> &str {
    match s.char_indices().nth(10) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

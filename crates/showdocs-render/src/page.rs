//! Page rendering for API descriptions and serialized forms.

use std::path::Path;

use showdocs_extract::{ApiDescription, DeclarationNames, SerializedFormBundle, SerializedForms};

use crate::mode::RenderMode;
use crate::path::stylesheet_href;
use crate::tree::HtmlTree;

/// Value of the `generator` metadata tag.
pub const GENERATOR: &str = "showDocs";

/// Default stylesheet file name at the output root.
pub const DEFAULT_STYLESHEET: &str = "showDocs.css";

/// Title of pages listing every serialized form.
pub const SERIALIZED_FORMS_TITLE: &str = "Serialized Forms";

/// A generated page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDocument {
    root: HtmlTree,
}

impl OutputDocument {
    /// Root `<html>` element.
    pub fn root(&self) -> &HtmlTree {
        &self.root
    }

    /// Serialize the page, including the doctype.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str("<!DOCTYPE html>\n");
        self.root.write(&mut out);
        out
    }
}

/// Renders extracted descriptions as HTML pages.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use showdocs_extract::SerializedForms;
/// use showdocs_render::{PageRenderer, RenderMode, SERIALIZED_FORMS_TITLE};
///
/// let renderer = PageRenderer::new(RenderMode::RawMarkup).with_stylesheet("site.css");
/// let page = renderer.render_serialized_form_index(
///     SERIALIZED_FORMS_TITLE,
///     Path::new("."),
///     &SerializedForms::new(),
/// );
/// assert!(page.to_html().contains(r#"href="./site.css""#));
/// ```
#[derive(Clone, Debug)]
pub struct PageRenderer {
    mode: RenderMode,
    stylesheet: String,
}

impl PageRenderer {
    /// Create a renderer using the default stylesheet name.
    #[must_use]
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            stylesheet: DEFAULT_STYLESHEET.to_owned(),
        }
    }

    /// Link pages to a stylesheet with a different file name.
    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    /// Render the descriptions of one API page.
    ///
    /// `path_to_root` leads from the page's directory to the output root.
    /// `serialized_form` is the correlated bundle for the declared type, if
    /// any; only then is a "Serialized Form" section appended.
    #[must_use]
    pub fn render_api_page(
        &self,
        title: &str,
        path_to_root: &Path,
        api: &ApiDescription,
        serialized_form: Option<&SerializedFormBundle>,
    ) -> OutputDocument {
        let mut descriptions = HtmlTree::new("dl")
            .with_class("api-descriptions")
            .add(HtmlTree::wrap("dt", "Main Description"));
        descriptions.push(match &api.description {
            Some(description) => HtmlTree::wrap("dd", self.mode.content(description)),
            None => HtmlTree::wrap(
                "dd",
                HtmlTree::wrap("span", "(not found)").with_attr("style", "color:gray"),
            ),
        });
        for (signature, description) in &api.members {
            descriptions.push(HtmlTree::wrap("dt", signature.as_str()));
            descriptions.push(HtmlTree::wrap("dd", self.mode.content(description)));
        }

        let mut body = HtmlTree::new("body")
            .add(HtmlTree::wrap("h1", title))
            .add(HtmlTree::wrap("p", declaration_summary(&api.declaration)))
            .add(descriptions);

        if let Some(bundle) = serialized_form {
            body.push(HtmlTree::new("hr").with_class("serialized-form-rule"));
            body.push(HtmlTree::wrap("h2", "Serialized Form"));
            body.push(self.serialized_form(bundle));
        }

        self.document(title, path_to_root, body)
    }

    /// Render every serialized form found on a serialized-form page.
    #[must_use]
    pub fn render_serialized_form_index(
        &self,
        title: &str,
        path_to_root: &Path,
        forms: &SerializedForms,
    ) -> OutputDocument {
        let mut all_forms = HtmlTree::new("dl").with_class("all-serialized-forms");
        for (type_name, bundle) in forms {
            all_forms.push(HtmlTree::wrap("dt", type_name.as_str()));
            all_forms.push(HtmlTree::wrap("dd", self.serialized_form(bundle)));
        }

        let body = HtmlTree::new("body")
            .add(HtmlTree::wrap("h1", title))
            .add(all_forms);

        self.document(title, path_to_root, body)
    }

    fn document(&self, title: &str, path_to_root: &Path, body: HtmlTree) -> OutputDocument {
        let head = HtmlTree::new("head")
            .add(HtmlTree::new("meta").with_attr("charset", "UTF-8"))
            .add(HtmlTree::wrap("title", title))
            .add(
                HtmlTree::new("link")
                    .with_attr("rel", "stylesheet")
                    .with_attr("href", stylesheet_href(path_to_root, &self.stylesheet)),
            )
            .add(
                HtmlTree::new("meta")
                    .with_attr("name", "generator")
                    .with_attr("content", GENERATOR),
            );

        OutputDocument {
            root: HtmlTree::new("html")
                .with_attr("lang", "en_US")
                .add(head)
                .add(body),
        }
    }

    /// Description list for one bundle; fields and methods keep bundle order.
    fn serialized_form(&self, bundle: &SerializedFormBundle) -> HtmlTree {
        let mut list = HtmlTree::new("dl").with_class("serialized-form-descriptions");
        let mut entry = |term: &str, description: &str| {
            list.push(HtmlTree::wrap("dt", term));
            list.push(HtmlTree::wrap("dd", self.mode.content(description)));
        };

        if let Some(overview) = &bundle.overview {
            entry("Overview", overview);
        }
        if let Some(uid) = &bundle.serial_version_uid {
            entry("SerialVersionUID", uid);
        }
        for (name, description) in &bundle.fields {
            entry(name, description);
        }
        for (signature, description) in &bundle.methods {
            entry(signature, description);
        }

        list
    }
}

/// One-line summary of a declaration, components in discovery order.
///
/// # Examples
///
/// ```
/// use showdocs_extract::DeclarationNames;
/// use showdocs_render::declaration_summary;
///
/// let names = DeclarationNames::new().with("package", "pkg").with("class", "Foo");
/// assert_eq!(declaration_summary(&names), "Declaration: package: pkg, class: Foo");
/// ```
pub fn declaration_summary(names: &DeclarationNames) -> String {
    let parts: Vec<String> = names.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    format!("Declaration: {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn foo_description() -> ApiDescription {
        let mut api = ApiDescription {
            declaration: DeclarationNames::new()
                .with("package", "pkg")
                .with("class", "Foo"),
            description: Some("Foo class".to_owned()),
            ..ApiDescription::default()
        };
        api.members
            .insert("zap()".to_owned(), "Zap method".to_owned());
        api.members
            .insert("bar()".to_owned(), "Bar method".to_owned());
        api
    }

    fn foo_bundle() -> SerializedFormBundle {
        SerializedFormBundle {
            overview: Some("Foo serial overview".to_owned()),
            serial_version_uid: Some("1L".to_owned()),
            fields: vec![
                ("y".to_owned(), "field y".to_owned()),
                ("x".to_owned(), "field x".to_owned()),
            ],
            methods: vec![("readObject()".to_owned(), "reads".to_owned())],
        }
    }

    #[test]
    fn test_render_api_page() {
        let page = PageRenderer::new(RenderMode::RawMarkup).render_api_page(
            "pkg/Foo.html",
            Path::new(".."),
            &foo_description(),
            None,
        );

        assert_eq!(
            page.to_html(),
            r#"<!DOCTYPE html>
<html lang="en_US">
<head>
<meta charset="UTF-8">
<title>pkg/Foo.html</title>
<link rel="stylesheet" href="../showDocs.css">
<meta name="generator" content="showDocs">
</head>
<body>
<h1>pkg/Foo.html</h1>
<p>Declaration: package: pkg, class: Foo</p>
<dl class="api-descriptions">
<dt>Main Description</dt>
<dd><div class="html">Foo class</div>
</dd>
<dt>bar()</dt>
<dd><div class="html">Bar method</div>
</dd>
<dt>zap()</dt>
<dd><div class="html">Zap method</div>
</dd>
</dl>
</body>
</html>
"#
        );
    }

    #[test]
    fn test_render_api_page_with_serialized_form() {
        let html = PageRenderer::new(RenderMode::PlainText)
            .render_api_page(
                "pkg/Foo.html",
                Path::new(".."),
                &foo_description(),
                Some(&foo_bundle()),
            )
            .to_html();

        let expected_tail = r#"</dl>
<hr class="serialized-form-rule">
<h2>Serialized Form</h2>
<dl class="serialized-form-descriptions">
<dt>Overview</dt>
<dd><pre class="text">Foo serial overview</pre>
</dd>
<dt>SerialVersionUID</dt>
<dd><pre class="text">1L</pre>
</dd>
<dt>y</dt>
<dd><pre class="text">field y</pre>
</dd>
<dt>x</dt>
<dd><pre class="text">field x</pre>
</dd>
<dt>readObject()</dt>
<dd><pre class="text">reads</pre>
</dd>
</dl>
</body>
</html>
"#;
        assert!(html.ends_with(expected_tail), "{html}");
    }

    #[test]
    fn test_missing_description_is_marked() {
        let api = ApiDescription {
            declaration: DeclarationNames::new().with("module", "m"),
            ..ApiDescription::default()
        };
        let page = PageRenderer::new(RenderMode::Both).render_api_page(
            "module-summary.html",
            Path::new("."),
            &api,
            None,
        );
        assert_eq!(page.root().attr("lang"), Some("en_US"));

        let html = page.to_html();

        assert!(html.contains(
            "<dt>Main Description</dt>\n<dd><span style=\"color:gray\">(not found)</span></dd>\n"
        ));
        assert!(html.contains(r#"href="./showDocs.css""#));
        assert!(!html.contains("Serialized Form"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut api = foo_description();
        api.members
            .insert("compare(List<T>)".to_owned(), "a < b".to_owned());
        let html = PageRenderer::new(RenderMode::PlainText)
            .render_api_page("A&B.html", Path::new("."), &api, None)
            .to_html();

        assert!(html.contains("<title>A&amp;B.html</title>"));
        assert!(html.contains("<dt>compare(List&lt;T&gt;)</dt>"));
        assert!(html.contains("<pre class=\"text\">a &lt; b</pre>"));
    }

    #[test]
    fn test_render_serialized_form_index() {
        let mut forms = SerializedForms::new();
        forms.insert(
            "pkg.Foo".to_owned(),
            SerializedFormBundle {
                fields: vec![("x".to_owned(), "field x".to_owned())],
                ..SerializedFormBundle::default()
            },
        );
        forms.insert("pkg.Bar".to_owned(), SerializedFormBundle::default());

        let html = PageRenderer::new(RenderMode::RawMarkup)
            .with_stylesheet("site.css")
            .render_serialized_form_index(SERIALIZED_FORMS_TITLE, Path::new("."), &forms)
            .to_html();

        assert!(html.ends_with(
            r#"<body>
<h1>Serialized Forms</h1>
<dl class="all-serialized-forms">
<dt>pkg.Bar</dt>
<dd><dl class="serialized-form-descriptions">
</dl>
</dd>
<dt>pkg.Foo</dt>
<dd><dl class="serialized-form-descriptions">
<dt>x</dt>
<dd><div class="html">field x</div>
</dd>
</dl>
</dd>
</dl>
</body>
</html>
"#
        ));
        assert!(html.contains(r#"<link rel="stylesheet" href="./site.css">"#));
        assert!(!html.contains("Main Description"));
    }

    #[test]
    fn test_declaration_summary_empty() {
        assert_eq!(declaration_summary(&DeclarationNames::new()), "Declaration: ");
    }

    #[test]
    fn test_mode_is_applied_to_every_description() {
        for mode in RenderMode::ALL {
            let html = PageRenderer::new(mode)
                .render_api_page(
                    "pkg/Foo.html",
                    Path::new(".."),
                    &foo_description(),
                    Some(&foo_bundle()),
                )
                .to_html();

            let raw = html.matches("<div class=\"html\">").count();
            let text = html.matches("<pre class=\"text\">").count();
            // 3 API descriptions + 5 bundle entries
            match mode {
                RenderMode::RawMarkup => assert_eq!((raw, text), (8, 0)),
                RenderMode::PlainText => assert_eq!((raw, text), (0, 8)),
                RenderMode::Both => assert_eq!((raw, text), (8, 8)),
            }
        }
    }
}

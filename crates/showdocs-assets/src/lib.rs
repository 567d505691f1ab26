//! Stylesheet resources for showdocs output.
//!
//! Resources under `assets/` are compiled into the binary and looked up by
//! file name.

use std::borrow::Cow;

/// File name of the built-in stylesheet.
pub const STYLESHEET: &str = "showDocs.css";

#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Get a resource by file name.
///
/// Returns the file contents if the resource exists, `None` otherwise.
pub fn get(name: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(name).map(|f| f.data)
}

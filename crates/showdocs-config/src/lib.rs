//! Configuration management for showdocs.
//!
//! Parses `showdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! mode = "plain-text"
//!
//! [stylesheet]
//! name = "api.css"
//! source = "styles/api.css"
//! ```

use serde::Deserialize;
use showdocs_render::{DEFAULT_STYLESHEET, RenderMode};
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override display mode.
    pub mode: Option<RenderMode>,
    /// Override the stylesheet copied to the output root.
    pub stylesheet_source: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "showdocs.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Stylesheet configuration (paths are relative strings from TOML).
    stylesheet: StylesheetConfigRaw,

    /// Resolved stylesheet configuration (set after loading).
    #[serde(skip)]
    pub stylesheet_resolved: StylesheetConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// How descriptions are shown.
    pub mode: RenderMode,
}

/// Raw stylesheet configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StylesheetConfigRaw {
    name: Option<String>,
    source: Option<String>,
}

/// Resolved stylesheet configuration.
#[derive(Debug)]
pub struct StylesheetConfig {
    /// File name written to the output root and linked from every page.
    pub name: String,
    /// Custom stylesheet to copy instead of the built-in one.
    pub source: Option<PathBuf>,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_STYLESHEET.to_owned(),
            source: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `showdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(mode) = settings.mode {
            self.render.mode = mode;
        }
        if let Some(source) = &settings.stylesheet_source {
            self.stylesheet_resolved.source = Some(source.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the stylesheet name is not a plain
    /// file name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = &self.stylesheet_resolved.name;
        if name.is_empty() {
            return Err(ConfigError::Validation(
                "stylesheet.name cannot be empty".to_owned(),
            ));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ConfigError::Validation(format!(
                "stylesheet.name must be a file name, got {name:?}"
            )));
        }
        Ok(())
    }

    /// Resolve relative paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.stylesheet_resolved = StylesheetConfig {
            name: self
                .stylesheet
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_STYLESHEET.to_owned()),
            source: self.stylesheet.source.as_deref().map(|s| config_dir.join(s)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.mode, RenderMode::Both);
        assert_eq!(config.stylesheet_resolved.name, "showDocs.css");
        assert_eq!(config.stylesheet_resolved.source, None);
        assert_eq!(config.config_path, None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.mode, RenderMode::Both);
    }

    #[test]
    fn test_parse_render_mode() {
        let config: Config = toml::from_str(
            r#"
[render]
mode = "plain-text"
"#,
        )
        .unwrap();
        assert_eq!(config.render.mode, RenderMode::PlainText);
    }

    #[test]
    fn test_parse_unknown_mode_fails() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[render]
mode = "fancy"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_resolves_stylesheet_source() {
        let (dir, path) = write_config(
            r#"
[stylesheet]
name = "api.css"
source = "styles/api.css"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.stylesheet_resolved.name, "api.css");
        assert_eq!(
            config.stylesheet_resolved.source,
            Some(dir.path().join("styles/api.css"))
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/showdocs.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_rejects_stylesheet_path() {
        let (_dir, path) = write_config(
            r#"
[stylesheet]
name = "css/api.css"
"#,
        );

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_rejects_empty_stylesheet_name() {
        let (_dir, path) = write_config(
            r#"
[stylesheet]
name = ""
"#,
        );

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_apply_cli_settings_override_file() {
        let (_dir, path) = write_config(
            r#"
[render]
mode = "raw-markup"
"#,
        );
        let settings = CliSettings {
            mode: Some(RenderMode::PlainText),
            stylesheet_source: Some(PathBuf::from("/tmp/custom.css")),
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.render.mode, RenderMode::PlainText);
        assert_eq!(
            config.stylesheet_resolved.source,
            Some(PathBuf::from("/tmp/custom.css"))
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let (_dir, path) = write_config(
            r#"
[render]
mode = "raw-markup"
"#,
        );

        let config = Config::load(Some(&path), Some(&CliSettings::default())).unwrap();

        assert_eq!(config.render.mode, RenderMode::RawMarkup);
    }
}

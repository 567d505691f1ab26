//! showdocs CLI.
//!
//! Converts a generated API documentation tree into simplified pages that
//! show only the descriptions, in raw markup, plain text or both.

mod error;
mod output;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use showdocs_config::{CliSettings, Config};
use showdocs_extract::HtmlPageReader;
use showdocs_render::RenderMode;
use showdocs_site::{ConvertConfig, Converter};
use tracing_subscriber::EnvFilter;

use error::CliError;
use output::Output;

/// Log directives enabled by `--verbose`.
const VERBOSE_FILTER: &str =
    "warn,showdocs=debug,showdocs_site=debug,showdocs_extract=debug,showdocs_config=debug";

/// showdocs - simplified description pages from API documentation.
#[derive(Parser, Debug)]
#[command(name = "showdocs", version, about)]
#[command(group(ArgGroup::new("display").args(["mode", "html", "text", "mixed"])))]
struct Cli {
    /// Documentation directory or a single page.
    input: PathBuf,

    /// Output directory.
    #[arg(short = 'd', long)]
    output_dir: PathBuf,

    /// Display mode: raw-markup, plain-text or both (overrides config).
    #[arg(short, long)]
    mode: Option<RenderMode>,

    /// Same as --mode raw-markup.
    #[arg(long)]
    html: bool,

    /// Same as --mode plain-text.
    #[arg(short, long)]
    text: bool,

    /// Same as --mode both.
    #[arg(long)]
    mixed: bool,

    /// Show per-directory and per-file trace lines.
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file (default: auto-discover showdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Custom stylesheet to copy instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    stylesheet: Option<PathBuf>,
}

impl Cli {
    /// Display mode selected on the command line, if any.
    fn mode(&self) -> Option<RenderMode> {
        if self.html {
            Some(RenderMode::RawMarkup)
        } else if self.text {
            Some(RenderMode::PlainText)
        } else if self.mixed {
            Some(RenderMode::Both)
        } else {
            self.mode
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG for showdocs crates, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli, &output);
    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        output.flush();
        std::process::exit(1);
    }
    output.flush();
}

fn run(cli: Cli, output: &Output) -> Result<(), CliError> {
    let cli_settings = CliSettings {
        mode: cli.mode(),
        stylesheet_source: cli.stylesheet,
    };
    let config = Config::load(cli.config.as_deref(), Some(&cli_settings))?;
    if let Some(path) = &config.config_path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    let mode = config.render.mode;
    let converter = Converter::new(
        HtmlPageReader::new(),
        ConvertConfig {
            mode,
            stylesheet_name: config.stylesheet_resolved.name,
            stylesheet_source: config.stylesheet_resolved.source,
        },
    );

    output.info(&format!(
        "Converting {} ({mode})...",
        cli.input.display()
    ));
    let report = converter.run(&cli.input, &cli.output_dir)?;

    for failure in &report.failures {
        output.warning(&format!(
            "Skipped {}: {}",
            failure.path.display(),
            failure.error
        ));
    }
    if let Some(err) = &report.stylesheet_error {
        output.warning(&format!("Stylesheet not written: {err}"));
    }

    output.success(&format!(
        "Wrote {} pages to {}",
        report.written.len(),
        cli.output_dir.display()
    ));
    if !report.failures.is_empty() {
        output.warning(&format!("{} pages skipped", report.failures.len()));
    }

    Ok(())
}

//! Project configuration file
//!
//! `code2svg.toml` fixes which files are read and written and how the source
//! is rendered. Every key is optional; a missing file means all defaults,
//! which read `theme.css`, `UbuntuMono-Regular.ttf` and `code-typing.ts`
//! and write `output.svg`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::font::DEFAULT_FONT_SIZE;
use crate::highlight::Language;
use crate::layout::config::DEFAULT_WRAP_THRESHOLD;
use crate::layout::LayoutConfig;
use crate::renderer::SvgConfig;
use crate::RenderConfig;

/// Errors that can occur when loading or interpreting the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Unsupported language '{0}' (expected ts or js)")]
    UnsupportedLanguage(String),
}

/// What to produce from the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One filmstrip of every typed prefix
    #[default]
    Typing,
    /// One SVG per `====`-separated snippet
    Snippets,
    /// The whole file as one SVG
    Single,
}

/// Contents of `code2svg.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub mode: Mode,
    pub language: String,
    pub stylesheet: PathBuf,
    pub font: PathBuf,
    /// Source file; when unset it depends on the mode
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub font_size: f64,
    pub wrap_threshold: f64,
    /// Prefix the document with an XML declaration
    pub standalone: bool,
    /// One path per line
    pub pretty_print: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            language: "ts".to_string(),
            stylesheet: PathBuf::from("theme.css"),
            font: PathBuf::from("UbuntuMono-Regular.ttf"),
            input: None,
            output: PathBuf::from("output.svg"),
            font_size: DEFAULT_FONT_SIZE,
            wrap_threshold: DEFAULT_WRAP_THRESHOLD,
            standalone: false,
            pretty_print: false,
        }
    }
}

impl ProjectConfig {
    /// Looked up in the working directory when no path is given
    pub const FILE_NAME: &'static str = "code2svg.toml";

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load an explicit file, or `code2svg.toml` if it exists, or defaults.
    ///
    /// An explicit path that does not exist is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(Self::FILE_NAME);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Source file to read: the configured one, else `code-typing.ts` for
    /// typing mode and `code.ts` otherwise
    pub fn input_path(&self) -> PathBuf {
        match (&self.input, self.mode) {
            (Some(path), _) => path.clone(),
            (None, Mode::Typing) => PathBuf::from("code-typing.ts"),
            (None, _) => PathBuf::from("code.ts"),
        }
    }

    /// Output file for the snippet at `index`: `output.svg` becomes
    /// `output{index}.svg` next to it
    pub fn snippet_output(&self, index: usize) -> PathBuf {
        let stem = self
            .output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let name = match self.output.extension() {
            Some(ext) => format!("{}{}.{}", stem, index, ext.to_string_lossy()),
            None => format!("{}{}", stem, index),
        };
        self.output.with_file_name(name)
    }

    pub fn language(&self) -> Result<Language, ConfigError> {
        Language::from_name(&self.language)
            .ok_or_else(|| ConfigError::UnsupportedLanguage(self.language.clone()))
    }

    /// Render settings described by this file
    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        let layout = LayoutConfig::new()
            .with_font_size(self.font_size)
            .with_wrap_threshold(self.wrap_threshold);
        let svg = SvgConfig::new()
            .with_standalone(self.standalone)
            .with_pretty_print(self.pretty_print);
        Ok(RenderConfig::new()
            .with_layout(layout)
            .with_svg(svg)
            .with_language(self.language()?))
    }
}

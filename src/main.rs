//! code2svg CLI
//!
//! Usage:
//!   code2svg [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>      Project file (default: code2svg.toml if present)
//!   -m, --mode <MODE>        typing | snippets | single
//!   -s, --stylesheet <FILE>  highlight.js theme to take colors from
//!   -f, --font <FILE>        TrueType/OpenType font for the glyph outlines
//!   -i, --input <FILE>       Source file to render
//!   -o, --output <FILE>      SVG file to write
//!   -l, --language <LANG>    ts | js
//!       --standalone         Prefix the SVG with an XML declaration
//!       --pretty             Put each path on its own line
//!   -d, --debug              Log every line and frame
//!   -h, --help               Print help

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use code2svg::{
    read_source, render_snippet, render_typing, split_snippets, write_svg, ColorIndex, Font,
    LayoutEngine, Mode, ProjectConfig, RenderError, ScriptHighlighter,
};

#[derive(Parser)]
#[command(name = "code2svg")]
#[command(about = "Render source code as SVG glyph outlines")]
struct Cli {
    /// Project file (default: code2svg.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to render
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// highlight.js theme to take colors from
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// TrueType/OpenType font for the glyph outlines
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// Source file to render
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// SVG file to write (numbered per snippet in snippets mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Source language: ts or js
    #[arg(short, long)]
    language: Option<String>,

    /// Prefix the SVG with an XML declaration
    #[arg(long)]
    standalone: bool,

    /// Put each path on its own line
    #[arg(long)]
    pretty: bool,

    /// Log every line and frame to stderr
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn apply(self, mut config: ProjectConfig) -> ProjectConfig {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(stylesheet) = self.stylesheet {
            config.stylesheet = stylesheet;
        }
        if let Some(font) = self.font {
            config.font = font;
        }
        if let Some(input) = self.input {
            config.input = Some(input);
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        config.standalone |= self.standalone;
        config.pretty_print |= self.pretty;
        config
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let loaded = ProjectConfig::load_or_default(cli.config.as_deref());
    let config = match loaded {
        Ok(config) => cli.apply(config),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or everything with `--debug`
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(config: &ProjectConfig) -> Result<(), RenderError> {
    let render_config = config.render_config()?;

    let css = read_source(&config.stylesheet)?;
    let colors = ColorIndex::from_css(&css);
    report_diagnostics(&colors, &css, &config.stylesheet);

    let font_data = std::fs::read(&config.font).map_err(|source| RenderError::Read {
        path: config.font.clone(),
        source,
    })?;
    let font = Font::from_bytes(&font_data, render_config.layout.font_size)?;

    let highlighter = ScriptHighlighter::new(render_config.language);
    let engine = LayoutEngine::new(&colors, &highlighter, &font);

    let input = config.input_path();
    let source = read_source(&input)?;
    debug!(
        input = %input.display(),
        mode = ?config.mode,
        language = render_config.language.name(),
        "rendering"
    );

    match config.mode {
        Mode::Typing => {
            let (svg, strip) = render_typing(&engine, &source, &render_config);
            println!(
                "Total width: {}, height: {}, frame width: {}, height: {}",
                strip.total_width, strip.total_height, strip.frame_width, strip.frame_height
            );
            write_svg(&config.output, &svg)?;
        }
        Mode::Snippets => {
            // Render everything before writing anything
            let renderings: Vec<_> = split_snippets(&source)
                .into_iter()
                .map(|snippet| render_snippet(&engine, snippet, &render_config))
                .collect();
            for (index, rendering) in renderings.iter().enumerate() {
                println!(
                    "Snippet {}: width: {}, height: {}",
                    index, rendering.width, rendering.height
                );
                write_svg(&config.snippet_output(index), &rendering.svg)?;
            }
        }
        Mode::Single => {
            let rendering = render_snippet(&engine, &source, &render_config);
            println!(
                "Total width: {}, height: {}",
                rendering.width, rendering.height
            );
            write_svg(&config.output, &rendering.svg)?;
        }
    }

    Ok(())
}

fn report_diagnostics(colors: &ColorIndex, css: &str, path: &Path) {
    let filename = path.display().to_string();
    for diagnostic in colors.diagnostics() {
        warn!("{}", diagnostic.format(css, &filename));
    }
}

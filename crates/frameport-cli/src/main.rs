//! frameport CLI entry point.
//!
//! Loads a design document, converts it into an in-memory scene and prints
//! the result.
//!
//! # Usage
//! ```text
//! frameport convert <DOC> [--fonts FILE] [--prefix P] [--y-down] [--record-styles]
//!                         [--format tree|json]
//! frameport validate <DOC>
//! ```
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to change the
//! level. The CLI exits non-zero when the document cannot be loaded, when
//! `validate` finds violations, or when a root fails to convert.

mod print;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use frameport_convert::{
    AxisPolicy, ConvertOptions, Converter, FontRegistry, StyleStrategies, DEFAULT_NAME_PREFIX,
};
use frameport_core::{read_document, validate_forest, DesignDocument};
use frameport_scene::MemoryScene;

#[derive(Parser, Debug)]
#[command(name = "frameport")]
#[command(version, about = "Convert design trees into scene graphs", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a design document and print the resulting scene
    Convert {
        /// Design document (JSON)
        doc: PathBuf,

        /// Font table mapping families to font assets (JSON)
        #[arg(long)]
        fonts: Option<PathBuf>,

        /// Prefix for generated object names
        #[arg(long, default_value = DEFAULT_NAME_PREFIX)]
        prefix: String,

        /// Keep design-space y (downward) instead of flipping it
        #[arg(long)]
        y_down: bool,

        /// Record rounded corners, borders and shadows on the objects
        #[arg(long)]
        record_styles: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,
    },

    /// Check a design document without converting it
    Validate {
        /// Design document (JSON)
        doc: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Tree,
    Json,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Convert {
            doc,
            fonts,
            prefix,
            y_down,
            record_styles,
            format,
        } => {
            let axis = if y_down { AxisPolicy::YDown } else { AxisPolicy::YUp };
            let options = ConvertOptions::default()
                .with_axis(axis)
                .with_name_prefix(prefix);
            let fonts = match fonts {
                Some(path) => load_fonts(&path)?,
                None => FontRegistry::default(),
            };
            let styles = if record_styles {
                StyleStrategies::recording()
            } else {
                StyleStrategies::none()
            };
            convert(&doc, Converter::new(options, fonts).with_styles(styles), format)
        }
        Commands::Validate { doc } => validate(&doc),
    }
}

fn load_document(path: &Path) -> Result<DesignDocument> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let document = read_document(BufReader::new(file))
        .with_context(|| format!("loading {}", path.display()))?;
    info!(
        path = %path.display(),
        roots = document.nodes.len(),
        nodes = document.node_count(),
        "document loaded"
    );
    Ok(document)
}

fn load_fonts(path: &Path) -> Result<FontRegistry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading font table {}", path.display()))?;
    let fonts = FontRegistry::from_json(&json)
        .with_context(|| format!("parsing font table {}", path.display()))?;
    info!(path = %path.display(), families = fonts.len(), "font table loaded");
    Ok(fonts)
}

fn convert(path: &Path, converter: Converter<MemoryScene>, format: Format) -> Result<ExitCode> {
    let document = load_document(path)?;

    let mut scene = MemoryScene::new();
    let canvas = scene.create_container("Canvas");
    let forest = converter.convert_forest(&mut scene, &document.nodes, canvas);

    for diagnostic in &forest.report {
        if diagnostic.is_error() {
            warn!("{diagnostic}");
        } else {
            info!("{diagnostic}");
        }
    }

    let snapshot = scene
        .snapshot(canvas)
        .context("canvas missing after conversion")?;
    match format {
        Format::Tree => print!("{}", print::render_tree(&snapshot)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }

    let failed = forest.failures().count();
    if failed > 0 {
        warn!(failed, "some roots were not converted");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn validate(path: &Path) -> Result<ExitCode> {
    let document = load_document(path)?;
    let violations = validate_forest(&document.nodes);
    if violations.is_empty() {
        println!("{}: {} nodes, no violations", path.display(), document.node_count());
        return Ok(ExitCode::SUCCESS);
    }

    for violation in &violations {
        println!("{violation}");
    }
    println!("{}: {} violations", path.display(), violations.len());
    Ok(ExitCode::FAILURE)
}

//! razordoc: generate Razor documentation pages from library metadata.
//!
//! Usage: `razordoc -m MatBlazor.json -o Demo/Doc`
//!
//! The comment export is looked up next to the library (`MatBlazor.dll` →
//! `MatBlazor.xml`) unless `--comments` points elsewhere. Every file in the
//! output directory is deleted before the new pages are written.

use anyhow::{Context, Result};
use clap::Parser;
use razordoc::generator::{Generator, DEFAULT_CLEAN_PATTERN};
use razordoc::{manifest, render};
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "RAZORDOC_LOG";

#[derive(Parser)]
#[command(
    name = "razordoc",
    about = "Generate Razor documentation pages from component library metadata and XML doc comments"
)]
struct Cli {
    /// Library manifest (JSON) produced by the metadata extraction step
    #[arg(short = 'm', long)]
    manifest: PathBuf,

    /// Output directory (must exist; its files are replaced)
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// XML comment export. Defaults to the library location with a .xml extension.
    #[arg(short = 'c', long)]
    comments: Option<PathBuf>,

    /// Page template file. Supports ${title}, ${summary} and ${rows}.
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Output format: razor (default), json
    #[arg(short = 'f', long, default_value = "razor")]
    format: String,

    /// Glob of stale files to delete from the output directory before generating
    #[arg(long, default_value = DEFAULT_CLEAN_PATTERN)]
    clean: String,

    /// Only log warnings and errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every lookup miss and deleted file
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let library = manifest::load(&cli.manifest)
        .with_context(|| format!("failed to load manifest {}", cli.manifest.display()))?;

    let comments = cli
        .comments
        .clone()
        .unwrap_or_else(|| manifest::comment_export_path(&library, &cli.manifest));

    let template = match cli.template {
        Some(ref path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read template: {}", path.display()))?,
        ),
        None => None,
    };
    let renderer = render::create_renderer(&cli.format, template)?;

    let generator = Generator::new(library, comments, cli.output.clone())?
        .with_renderer(renderer)
        .with_clean_pattern(cli.clean.as_str());

    generator
        .generate()
        .with_context(|| format!("failed to generate pages in {}", cli.output.display()))?;

    Ok(())
}

/// Log to stderr. `RAZORDOC_LOG` sets the filter unless -q/-v override it.
fn init_logging(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

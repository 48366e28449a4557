//! CLI binary for convertpdf.
//!
//! A thin shim over the library crate that maps CLI flags and an optional
//! config file to [`Settings`] and reports the run summary.

use anyhow::{Context, Result};
use clap::Parser;
use convertpdf::{convert_all, load_file_config, FileConfig, Settings, SettingsOverrides};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Copy one PDF into the default output directory (./output)
  convertpdf document.pdf

  # Copy every PDF under docs/, mirroring the directory layout
  convertpdf -r docs/ -o converted

  # Also emit placeholder OCR artifacts beside each copy
  convertpdf --ocr -r docs/ -o converted

  # Read defaults from a config file; flags still win
  convertpdf --config convertpdf.yaml docs/ --no-ocr

CONFIG FILE (JSON or YAML, chosen by extension):
  output_dir: converted     # string  (default: "output")
  recursive:  true          # boolean (default: false)
  ocr:        false         # boolean (default: false)

  Precedence per setting: CLI flag, else config value, else default.
  Unknown keys are ignored.

OUTPUT LAYOUT:
  Each PDF lands at its path relative to the input directory it came from.
  With --ocr, four placeholder artifacts appear beside each copy:
    <name>.ocr.pdf   duplicate of the copied PDF
    <name>.html      fixed placeholder referencing the source
    <name>.md        fixed placeholder referencing the source
    <name>.json      {"source": "<path>", "status": "placeholder"}

ENVIRONMENT VARIABLES:
  CONVERTPDF_OUTPUT_DIR   Default for -o/--output-dir
  CONVERTPDF_CONFIG       Default for --config
  CONVERTPDF_ACCEL_LIB    Accelerator library path for the backend probe
  RUST_LOG                Overrides the log filter entirely

EXIT CODES:
  0  at least one PDF was collected and processed
  1  config file failed to load, or no valid PDF inputs were found
"#;

/// Copy PDF files into an output directory (placeholder converter).
#[derive(Parser, Debug)]
#[command(
    name = "convertpdf",
    version,
    about = "Copy PDF files into an output directory (placeholder converter)",
    long_about = "Minimal PDF converter skeleton. Collects PDF files from the given files and \
directories, mirrors them into the output directory, and can emit placeholder OCR artifacts. \
No actual OCR or PDF parsing is performed.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF files or directories to collect from.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (default: "output", or the config file's value).
    #[arg(short, long, env = "CONVERTPDF_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Recurse into directories.
    #[arg(short, long, overrides_with = "no_recursive")]
    recursive: bool,

    /// Do not recurse into directories (overrides the config file).
    #[arg(long, overrides_with = "recursive")]
    no_recursive: bool,

    /// Emit placeholder OCR outputs beside each copied PDF.
    #[arg(long, overrides_with = "no_ocr")]
    ocr: bool,

    /// Do not emit placeholder OCR outputs (overrides the config file).
    #[arg(long, overrides_with = "ocr")]
    no_ocr: bool,

    /// Config file (JSON or YAML, chosen by extension).
    #[arg(long, env = "CONVERTPDF_CONFIG")]
    config: Option<PathBuf>,

    /// Enable DEBUG-level logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Collapse a `--flag` / `--no-flag` pair into a tri-state: `None` when
/// neither was given, so the config file (then the default) decides.
fn flag_override(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // ── Resolve settings ─────────────────────────────────────────────────
    let file_config = match cli.config {
        Some(ref path) => load_file_config(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => FileConfig::default(),
    };

    let overrides = SettingsOverrides {
        output_dir: cli.output_dir.clone(),
        recursive: flag_override(cli.recursive, cli.no_recursive),
        ocr: flag_override(cli.ocr, cli.no_ocr),
    };
    let settings = Settings::resolve(&overrides, &file_config);
    debug!("Resolved settings: {:?}", settings);

    // ── Run ──────────────────────────────────────────────────────────────
    let summary = convert_all(&cli.inputs, &settings).context("Conversion failed")?;

    if !cli.quiet {
        eprintln!(
            "{} {} PDF(s)  {} placeholder set(s)  {}  →  {}",
            green("✔"),
            bold(&summary.pdfs_written.to_string()),
            summary.placeholder_sets,
            dim(&format!("{}ms", summary.total_duration_ms)),
            bold(&settings.output_dir.display().to_string()),
        );
        if summary.failed > 0 {
            eprintln!(
                "  {} {} task(s) failed — see log above",
                red("✗"),
                summary.failed
            );
        }
    }

    Ok(())
}

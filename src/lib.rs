//! # convertpdf
//!
//! A placeholder PDF "converter": collect PDFs from files and directories,
//! mirror them byte-for-byte into an output directory, and optionally emit
//! stub OCR artifacts. No PDF is ever parsed, no OCR runs, nothing leaves
//! the local filesystem — this crate exists so the surrounding tooling
//! (CLI surface, config layer, output layout) can be built and exercised
//! before a real conversion engine lands.
//!
//! ## Pipeline Overview
//!
//! ```text
//! inputs
//!  │
//!  ├─ 1. Config    merge CLI flags, optional JSON/YAML file, defaults
//!  ├─ 2. Backend   probe for an accelerator runtime (log line only)
//!  ├─ 3. Collect   expand files/directories into (source, base) tasks
//!  ├─ 4. Copy      mirror each PDF under the output directory
//!  └─ 5. Sidecar   with --ocr: duplicate PDF + HTML/MD/JSON placeholders
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use convertpdf::{convert_all, Settings};
//! use std::path::PathBuf;
//!
//! fn main() -> Result<(), convertpdf::ConvertPdfError> {
//!     let settings = Settings {
//!         output_dir: PathBuf::from("out"),
//!         recursive: true,
//!         ocr: false,
//!     };
//!     let summary = convert_all(&[PathBuf::from("docs")], &settings)?;
//!     eprintln!("{} PDFs written", summary.pdfs_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `convertpdf` binary (clap + anyhow + tracing-subscriber) |
//! | `yaml`  | on      | YAML config files; without it, `.yaml`/`.yml` configs report an error |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! convertpdf = { version = "0.1", default-features = false, features = ["yaml"] }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod backend;
pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use backend::{detect_backend, Backend};
pub use config::{load_file_config, merge_setting, FileConfig, Settings, SettingsOverrides};
pub use convert::{convert_all, RunSummary};
pub use error::{ConfigFormat, ConvertPdfError};
pub use pipeline::collect::{collect_pdfs, PdfTask};
pub use pipeline::copy::{copy_pdf, destination_path};
pub use pipeline::sidecar::write_ocr_placeholders;

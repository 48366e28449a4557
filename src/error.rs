//! Error types for the convertpdf library.
//!
//! Only *fatal* conditions are represented here: a config file that cannot
//! be loaded, or a run that collected zero PDFs. Per-item problems during
//! input collection and conversion (a missing input path, a non-PDF file, a
//! directory with no matches, a single file that fails to copy) are logged
//! via `tracing` and skipped — they never abort the run, so they never
//! appear in this enum.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the convertpdf library.
#[derive(Debug, Error)]
pub enum ConvertPdfError {
    // ── Config errors ─────────────────────────────────────────────────────
    /// Config file was not found at the given path.
    #[error("Config file not found: '{path}'\nCheck the path exists and is readable.")]
    ConfigNotFound { path: PathBuf },

    /// Process does not have read permission on the config file.
    #[error("Permission denied reading config '{path}'\nTry: chmod +r {path:?}")]
    ConfigPermissionDenied { path: PathBuf },

    /// Config file exists but could not be read for another reason.
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file's content is not valid for its format.
    #[error("Invalid {format} in config '{path}': {detail}")]
    ConfigParse {
        path: PathBuf,
        format: ConfigFormat,
        detail: String,
    },

    /// A `.yaml`/`.yml` config was given but the crate was built without
    /// the `yaml` feature.
    #[error(
        "YAML config support is not available: '{path}'\n\
         Rebuild with the `yaml` feature enabled, or use a JSON config."
    )]
    YamlUnavailable { path: PathBuf },

    // ── No-work error ─────────────────────────────────────────────────────
    /// Every input was missing, empty, or filtered out; nothing to do.
    #[error("No PDF inputs to process.")]
    NoInputs,
}

/// On-disk config format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "JSON"),
            ConfigFormat::Yaml => write!(f, "YAML"),
        }
    }
}

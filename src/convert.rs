//! Top-level conversion entry point.
//!
//! [`convert_all`] runs the whole placeholder pipeline: detect the backend
//! (log line only), collect PDF tasks, copy each one under the output
//! directory, and emit OCR placeholder artifacts when requested.
//!
//! Fatal outcomes are exactly two: the caller failed to load a config
//! (handled before this function) and zero PDFs collected
//! ([`ConvertPdfError::NoInputs`]). A file that fails to copy is logged and
//! counted in the summary but does not abort the remaining tasks.

use crate::backend::{detect_backend, Backend};
use crate::config::Settings;
use crate::error::ConvertPdfError;
use crate::pipeline::collect::collect_pdfs;
use crate::pipeline::copy::copy_pdf;
use crate::pipeline::sidecar::write_ocr_placeholders;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};

/// What a run did, for the CLI's summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Backend label that was logged (no functional effect).
    pub backend: Backend,
    /// Tasks collected from the inputs.
    pub tasks: usize,
    /// PDFs successfully copied.
    pub pdfs_written: usize,
    /// OCR placeholder sets written (one set = duplicate PDF + 3 sidecars).
    pub placeholder_sets: usize,
    /// Tasks that failed to convert (logged, non-fatal).
    pub failed: usize,
    /// Wall-clock duration of the run.
    pub total_duration_ms: u64,
}

/// Collect PDFs from `inputs` and copy each into the configured output
/// directory, sequentially, in discovery order.
///
/// # Errors
/// [`ConvertPdfError::NoInputs`] when collection produced zero tasks. Per-
/// task copy failures are logged via `tracing` and reported through
/// [`RunSummary::failed`] instead of aborting the run.
pub fn convert_all(inputs: &[PathBuf], settings: &Settings) -> Result<RunSummary, ConvertPdfError> {
    let start = Instant::now();

    let backend = detect_backend();
    match backend {
        Backend::Accelerated => {
            info!("Accelerator runtime detected; using accelerated backend (placeholder).")
        }
        Backend::Fallback => warn!("Accelerator runtime not detected; using fallback backend."),
    }

    let tasks = collect_pdfs(inputs, settings.recursive);
    if tasks.is_empty() {
        return Err(ConvertPdfError::NoInputs);
    }
    info!("Collected {} PDF task(s)", tasks.len());

    let mut summary = RunSummary {
        backend,
        tasks: tasks.len(),
        pdfs_written: 0,
        placeholder_sets: 0,
        failed: 0,
        total_duration_ms: 0,
    };

    for task in &tasks {
        let dest = match copy_pdf(task, &settings.output_dir) {
            Ok(dest) => dest,
            Err(e) => {
                error!("Failed to copy {}: {}", task.source.display(), e);
                summary.failed += 1;
                continue;
            }
        };
        summary.pdfs_written += 1;

        if settings.ocr {
            match write_ocr_placeholders(&dest, &task.source) {
                Ok(()) => {
                    info!("Wrote OCR placeholders for: {}", dest.display());
                    summary.placeholder_sets += 1;
                }
                Err(e) => {
                    error!("Failed to write OCR placeholders for {}: {}", dest.display(), e);
                    summary.failed += 1;
                }
            }
        }
    }

    summary.total_duration_ms = start.elapsed().as_millis() as u64;
    Ok(summary)
}

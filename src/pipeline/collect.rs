//! Input collection: expand file/directory arguments into PDF tasks.
//!
//! Collection is deliberately forgiving — a missing path, a non-PDF file,
//! or an empty directory is logged and skipped, never fatal. The caller
//! decides what an empty result means (the CLI driver treats it as a
//! no-work error).

use std::path::{Path, PathBuf};
use tracing::{error, warn};
use walkdir::WalkDir;

/// One unit of work: a PDF to copy and the directory its output path is
/// computed relative to.
///
/// Invariant: `source` existed and had a `.pdf` extension (case-insensitive)
/// at collection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfTask {
    /// The PDF file to copy.
    pub source: PathBuf,
    /// Base directory used to mirror `source`'s relative path into the
    /// output directory.
    pub base: PathBuf,
}

/// True if the path's extension is `.pdf`, case-insensitively.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Expand `inputs` into the sequence of PDF tasks to convert.
///
/// - A missing input is logged as an error and skipped.
/// - A directory contributes its `.pdf` children — immediate children only,
///   or all descendants when `recursive` is set. A directory with no
///   matches logs a warning. The directory itself is each match's base.
/// - A file contributes itself if it is a PDF (otherwise a warning); its
///   base is its parent directory.
///
/// Tasks come back in discovery order, which is whatever order the
/// filesystem enumerates entries in — not necessarily sorted.
pub fn collect_pdfs(inputs: &[PathBuf], recursive: bool) -> Vec<PdfTask> {
    let mut collected = Vec::new();

    for input in inputs {
        if !input.exists() {
            error!("Input not found: {}", input.display());
            continue;
        }

        if input.is_dir() {
            let before = collected.len();
            collect_from_dir(input, recursive, &mut collected);
            if collected.len() == before {
                warn!("No PDF files found in {}", input.display());
            }
        } else {
            if !is_pdf(input) {
                warn!("Skipping non-PDF input: {}", input.display());
                continue;
            }
            let base = input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf();
            collected.push(PdfTask {
                source: input.clone(),
                base,
            });
        }
    }

    collected
}

/// Gather the `.pdf` files under `dir` into `out`, pairing each with `dir`
/// as its base.
fn collect_from_dir(dir: &Path, recursive: bool, out: &mut Vec<PdfTask>) {
    if recursive {
        for entry in WalkDir::new(dir).min_depth(1) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() && is_pdf(entry.path()) {
                out.push(PdfTask {
                    source: entry.into_path(),
                    base: dir.to_path_buf(),
                });
            }
        }
    } else {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read directory {}: {}", dir.display(), e);
                return;
            }
        };
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() && is_pdf(&path) {
                out.push(PdfTask {
                    source: path,
                    base: dir.to_path_buf(),
                });
            }
        }
    }
}

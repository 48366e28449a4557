//! Verbatim PDF copy: mirror a task's source under the output directory.
//!
//! The destination is `output_dir` joined with the source's path relative
//! to its base directory. When the source is not under its base (symlinked
//! inputs, `..` components), the relative path cannot be computed; the copy
//! then lands at a flat name synthesized from the full source path. The
//! synthesized name is a pure function of the path — the same input maps to
//! the same output on every run and platform, and distinct paths map to
//! distinct names.

use crate::pipeline::collect::PdfTask;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Compute where `task`'s copy belongs under `output_dir`.
pub fn destination_path(task: &PdfTask, output_dir: &Path) -> PathBuf {
    match task.source.strip_prefix(&task.base) {
        Ok(relative) => output_dir.join(relative),
        Err(_) => {
            let fallback = sanitized_flat_name(&task.source);
            debug!(
                "{} is not under base {}; using flat name {}",
                task.source.display(),
                task.base.display(),
                fallback
            );
            output_dir.join(fallback)
        }
    }
}

/// Flatten a full path into a single file name: every path separator and
/// every byte outside `[A-Za-z0-9._-]` becomes `_`. The extension survives
/// unchanged, so the result is still recognizably a PDF.
fn sanitized_flat_name(path: &Path) -> String {
    let name: String = path
        .to_string_lossy()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    name.trim_start_matches('_').to_string()
}

/// Copy `task`'s source to its destination under `output_dir`, creating
/// parent directories as needed and overwriting any existing file. Bytes
/// and timestamps both carry over.
///
/// Returns the destination path written.
pub fn copy_pdf(task: &PdfTask, output_dir: &Path) -> io::Result<PathBuf> {
    let dest = destination_path(task, output_dir);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&task.source, &dest)?;
    copy_file_times(&task.source, &dest)?;
    info!("Wrote PDF: {}", dest.display());
    Ok(dest)
}

/// Carry the source's modified/accessed times over to `dest`.
pub(crate) fn copy_file_times(source: &Path, dest: &Path) -> io::Result<()> {
    let metadata = fs::metadata(source)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    File::options().write(true).open(dest)?.set_times(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(source: &Path, base: &Path) -> PdfTask {
        PdfTask {
            source: source.to_path_buf(),
            base: base.to_path_buf(),
        }
    }

    #[test]
    fn destination_mirrors_relative_path() {
        let t = task(Path::new("/docs/sub/b.pdf"), Path::new("/docs"));
        assert_eq!(
            destination_path(&t, Path::new("out")),
            PathBuf::from("out/sub/b.pdf")
        );
    }

    #[test]
    fn destination_for_direct_child() {
        let t = task(Path::new("/docs/a.pdf"), Path::new("/docs"));
        assert_eq!(
            destination_path(&t, Path::new("out")),
            PathBuf::from("out/a.pdf")
        );
    }

    #[test]
    fn destination_falls_back_to_flat_name_outside_base() {
        let t = task(Path::new("/elsewhere/c.pdf"), Path::new("/docs"));
        let dest = destination_path(&t, Path::new("out"));
        assert_eq!(dest, PathBuf::from("out/elsewhere_c.pdf"));
    }

    #[test]
    fn flat_name_is_deterministic_and_distinct() {
        let a = sanitized_flat_name(Path::new("/data/x/report.pdf"));
        let b = sanitized_flat_name(Path::new("/data/y/report.pdf"));
        assert_eq!(a, sanitized_flat_name(Path::new("/data/x/report.pdf")));
        assert_ne!(a, b);
        assert!(a.ends_with(".pdf"));
    }

    #[test]
    fn flat_name_replaces_awkward_characters() {
        let name = sanitized_flat_name(Path::new("/tmp/spaced out name.pdf"));
        assert_eq!(name, "tmp_spaced_out_name.pdf");
    }

    #[test]
    fn copy_preserves_bytes() {
        let src_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("doc.pdf");
        let payload = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n%%EOF\n";
        fs::write(&source, payload).unwrap();

        let dest = copy_pdf(&task(&source, src_dir.path()), out_dir.path()).unwrap();
        assert_eq!(dest, out_dir.path().join("doc.pdf"));
        assert_eq!(fs::read(&dest).unwrap(), payload);
    }

    #[test]
    fn copy_creates_missing_parent_directories() {
        let src_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("sub/deep/doc.pdf");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, b"%PDF").unwrap();

        let dest = copy_pdf(&task(&source, src_dir.path()), out_dir.path()).unwrap();
        assert_eq!(dest, out_dir.path().join("sub/deep/doc.pdf"));
        assert!(dest.is_file());
    }

    #[test]
    fn copy_overwrites_existing_destination() {
        let src_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("doc.pdf");
        fs::write(&source, b"new contents").unwrap();
        fs::write(out_dir.path().join("doc.pdf"), b"stale").unwrap();

        copy_pdf(&task(&source, src_dir.path()), out_dir.path()).unwrap();
        assert_eq!(
            fs::read(out_dir.path().join("doc.pdf")).unwrap(),
            b"new contents"
        );
    }

    #[test]
    fn copy_carries_modified_time() {
        let src_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("doc.pdf");
        fs::write(&source, b"%PDF").unwrap();

        let dest = copy_pdf(&task(&source, src_dir.path()), out_dir.path()).unwrap();

        let src_mtime = fs::metadata(&source).unwrap().modified().unwrap();
        let dest_mtime = fs::metadata(&dest).unwrap().modified().unwrap();
        // Filesystems may round to coarser granularity; within a second is
        // a faithful copy.
        let delta = src_mtime
            .duration_since(dest_mtime)
            .unwrap_or_else(|e| e.duration());
        assert!(delta.as_secs() < 1, "mtime drifted by {delta:?}");
    }
}

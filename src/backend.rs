//! Accelerator backend detection.
//!
//! Probes for an optional OpenVINO runtime library and reports which backend
//! a real converter would use. The result is purely informational — this
//! placeholder tool copies files the same way either way, so the label only
//! ever reaches a log line.
//!
//! Detection never fails: any lookup error (unset variable, unreadable
//! directory, missing file) counts as "not found" and falls through to
//! [`Backend::Fallback`].

use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an accelerator library file directly.
/// If it points at an existing file, detection succeeds without any
/// directory search.
pub const ACCEL_LIB_ENV: &str = "CONVERTPDF_ACCEL_LIB";

/// Which backend the (placeholder) conversion would run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// An accelerator runtime library was found.
    Accelerated,
    /// No accelerator available; plain CPU fallback.
    Fallback,
}

impl Backend {
    /// The label used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Accelerated => "accelerated",
            Backend::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The two accelerator library names probed for, with the platform's
/// shared-library naming convention applied.
fn accel_lib_names() -> [&'static str; 2] {
    match std::env::consts::OS {
        "macos" => ["libopenvino.dylib", "libopenvino_c.dylib"],
        "windows" => ["openvino.dll", "openvino_c.dll"],
        _ => ["libopenvino.so", "libopenvino_c.so"],
    }
}

/// Directories searched for the accelerator library: the dynamic-linker
/// search path from the environment, then the conventional system library
/// directories.
fn search_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for var in ["LD_LIBRARY_PATH", "DYLD_LIBRARY_PATH"] {
        if let Some(paths) = std::env::var_os(var) {
            dirs.extend(std::env::split_paths(&paths));
        }
    }
    for fixed in ["/usr/lib", "/usr/local/lib", "/usr/lib/x86_64-linux-gnu"] {
        dirs.push(PathBuf::from(fixed));
    }
    dirs
}

/// True if any of `names` exists as a regular file in any of `dirs`.
fn probe(dirs: &[PathBuf], names: &[&str]) -> bool {
    dirs.iter()
        .any(|dir| names.iter().any(|name| dir.join(name).is_file()))
}

/// Detect whether an accelerator runtime is present.
///
/// Checks [`ACCEL_LIB_ENV`] first, then searches the library path for the
/// platform's OpenVINO runtime names. Infallible: every miss resolves to
/// [`Backend::Fallback`].
pub fn detect_backend() -> Backend {
    if let Some(path) = std::env::var_os(ACCEL_LIB_ENV) {
        if !path.is_empty() && Path::new(&path).is_file() {
            debug!("Accelerator library from {}: {:?}", ACCEL_LIB_ENV, path);
            return Backend::Accelerated;
        }
    }

    let names = accel_lib_names();
    if probe(&search_dirs(), &names) {
        debug!("Accelerator library found on library path");
        return Backend::Accelerated;
    }

    Backend::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Backend::Accelerated.label(), "accelerated");
        assert_eq!(Backend::Fallback.label(), "fallback");
        assert_eq!(Backend::Fallback.to_string(), "fallback");
    }

    #[test]
    fn probe_finds_library_file() {
        let dir = tempfile::tempdir().unwrap();
        let names = accel_lib_names();
        std::fs::write(dir.path().join(names[1]), b"").unwrap();
        assert!(probe(&[dir.path().to_path_buf()], &names));
    }

    #[test]
    fn probe_misses_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!probe(&[dir.path().to_path_buf()], &accel_lib_names()));
    }

    #[test]
    fn probe_tolerates_nonexistent_dirs() {
        let dirs = [PathBuf::from("/definitely/not/a/real/dir")];
        assert!(!probe(&dirs, &accel_lib_names()));
    }

    #[test]
    fn detect_backend_never_panics() {
        let _ = detect_backend();
    }
}

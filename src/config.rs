//! Configuration: the on-disk config file, CLI overrides, and the merge
//! between them.
//!
//! Settings resolve with a fixed precedence, checked per field:
//!
//! 1. explicit CLI value,
//! 2. else the config file's value,
//! 3. else the hard-coded default.
//!
//! The config file is a typed structure with named optional fields rather
//! than a free-form map; unknown keys are ignored, missing keys fall
//! through to the next precedence level.

use crate::error::{ConfigFormat, ConvertPdfError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default output directory when neither CLI nor config names one.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Resolved, immutable settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory converted PDFs are written under.
    pub output_dir: PathBuf,
    /// Recurse into input directories.
    pub recursive: bool,
    /// Emit placeholder OCR artifacts beside each converted PDF.
    pub ocr: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            recursive: false,
            ocr: false,
        }
    }
}

impl Settings {
    /// Merge CLI overrides, an optional config file, and defaults into the
    /// final settings. Precedence per field: CLI, then config, then default.
    pub fn resolve(overrides: &SettingsOverrides, config: &FileConfig) -> Self {
        Self {
            output_dir: merge_setting(
                overrides.output_dir.clone(),
                config.output_dir.clone(),
                PathBuf::from(DEFAULT_OUTPUT_DIR),
            ),
            recursive: merge_setting(overrides.recursive, config.recursive, false),
            ocr: merge_setting(overrides.ocr, config.ocr, false),
        }
    }
}

/// The CLI's view of the settings: `None` means "flag not given", so the
/// config file (and then the default) decides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub output_dir: Option<PathBuf>,
    pub recursive: Option<bool>,
    pub ocr: Option<bool>,
}

/// Typed view of the on-disk config file. All fields optional; keys other
/// than these three are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output_dir: Option<PathBuf>,
    pub recursive: Option<bool>,
    pub ocr: Option<bool>,
}

/// Pick `explicit` if set, else the config's value, else `default`.
pub fn merge_setting<T>(explicit: Option<T>, config: Option<T>, default: T) -> T {
    explicit.or(config).unwrap_or(default)
}

/// Load a config file, dispatching on extension: `.yaml`/`.yml` parse as
/// YAML, anything else as JSON. An empty or `null` document resolves to an
/// all-defaults [`FileConfig`].
///
/// # Errors
/// [`ConvertPdfError::ConfigNotFound`] / [`ConvertPdfError::ConfigPermissionDenied`] /
/// [`ConvertPdfError::ConfigRead`] when the file cannot be read,
/// [`ConvertPdfError::ConfigParse`] on malformed content, and
/// [`ConvertPdfError::YamlUnavailable`] when a YAML config is given but the
/// crate was built without the `yaml` feature.
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConvertPdfError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConvertPdfError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => ConvertPdfError::ConfigPermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ConvertPdfError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let config = if is_yaml_extension(path) {
        parse_yaml(path, &text)?
    } else {
        parse_json(path, &text)?
    };

    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn is_yaml_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

fn parse_json(path: &Path, text: &str) -> Result<FileConfig, ConvertPdfError> {
    if text.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    // Option<_> so a literal `null` document is accepted as empty.
    serde_json::from_str::<Option<FileConfig>>(text)
        .map(Option::unwrap_or_default)
        .map_err(|e| ConvertPdfError::ConfigParse {
            path: path.to_path_buf(),
            format: ConfigFormat::Json,
            detail: e.to_string(),
        })
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Path, text: &str) -> Result<FileConfig, ConvertPdfError> {
    if text.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str::<Option<FileConfig>>(text)
        .map(Option::unwrap_or_default)
        .map_err(|e| ConvertPdfError::ConfigParse {
            path: path.to_path_buf(),
            format: ConfigFormat::Yaml,
            detail: e.to_string(),
        })
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Path, _text: &str) -> Result<FileConfig, ConvertPdfError> {
    Err(ConvertPdfError::YamlUnavailable {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn merge_precedence_explicit_wins() {
        assert_eq!(merge_setting(Some(1), Some(2), 3), 1);
    }

    #[test]
    fn merge_precedence_config_beats_default() {
        assert_eq!(merge_setting(None, Some(2), 3), 2);
    }

    #[test]
    fn merge_precedence_default_last() {
        assert_eq!(merge_setting::<i32>(None, None, 3), 3);
    }

    #[test]
    fn resolve_each_field_independently() {
        let overrides = SettingsOverrides {
            output_dir: Some(PathBuf::from("cli-out")),
            recursive: None,
            ocr: None,
        };
        let config = FileConfig {
            output_dir: Some(PathBuf::from("cfg-out")),
            recursive: Some(true),
            ocr: None,
        };
        let settings = Settings::resolve(&overrides, &config);
        assert_eq!(settings.output_dir, PathBuf::from("cli-out")); // CLI wins
        assert!(settings.recursive); // config wins
        assert!(!settings.ocr); // default
    }

    #[test]
    fn default_settings() {
        let s = Settings::default();
        assert_eq!(s.output_dir, PathBuf::from("output"));
        assert!(!s.recursive);
        assert!(!s.ocr);
    }

    #[test]
    fn load_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "config.json",
            r#"{"output_dir": "converted", "recursive": true, "ocr": false}"#,
        );
        let config = load_file_config(&path).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("converted")));
        assert_eq!(config.recursive, Some(true));
        assert_eq!(config.ocr, Some(false));
    }

    #[test]
    fn load_json_ignores_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "config.json",
            r#"{"recursive": true, "dpi": 300, "model": "none"}"#,
        );
        let config = load_file_config(&path).unwrap();
        assert_eq!(config.recursive, Some(true));
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn empty_document_is_empty_mapping() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["empty.json", "empty.yaml"] {
            let path = write_config(&dir, name, "");
            let config = load_file_config(&path).unwrap();
            assert_eq!(config, FileConfig::default(), "file: {name}");
        }
    }

    #[test]
    fn null_document_is_empty_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "null.json", "null");
        assert_eq!(load_file_config(&path).unwrap(), FileConfig::default());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "bad.json", "{not json");
        match load_file_config(&path) {
            Err(ConvertPdfError::ConfigParse { format, .. }) => {
                assert_eq!(format, ConfigFormat::Json)
            }
            other => panic!("expected JSON parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(
            load_file_config(&path),
            Err(ConvertPdfError::ConfigNotFound { .. })
        ));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn load_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "config.yaml", "output_dir: converted\nrecursive: true\n");
        let config = load_file_config(&path).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("converted")));
        assert_eq!(config.recursive, Some(true));
        assert_eq!(config.ocr, None);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yml_and_uppercase_extensions_parse_as_yaml() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["config.yml", "config.YAML"] {
            let path = write_config(&dir, name, "ocr: true\n");
            let config = load_file_config(&path).unwrap();
            assert_eq!(config.ocr, Some(true), "file: {name}");
        }
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "bad.yaml", "output_dir: [unclosed\n");
        match load_file_config(&path) {
            Err(ConvertPdfError::ConfigParse { format, .. }) => {
                assert_eq!(format, ConfigFormat::Yaml)
            }
            other => panic!("expected YAML parse error, got {other:?}"),
        }
    }

    #[cfg(not(feature = "yaml"))]
    #[test]
    fn yaml_without_feature_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "config.yaml", "ocr: true\n");
        assert!(matches!(
            load_file_config(&path),
            Err(ConvertPdfError::YamlUnavailable { .. })
        ));
    }
}

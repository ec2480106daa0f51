//! Output handling for the CLI: status messages and the generated file.

use crate::error::{CliError, Result};
use chrono::NaiveDateTime;
use colored::*;
use configgen_domain::YamlDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp layout used in output filenames.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Status message formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Filename for a generated configuration: `<type>_config_<YYYYMMDD_HHMMSS>.yaml`.
pub fn output_filename(device_type: &str, at: NaiveDateTime) -> String {
    format!("{}_config_{}.yaml", device_type, at.format(TIMESTAMP_FORMAT))
}

/// Write a generated configuration into `dir`.
///
/// An existing file with the same name is overwritten.
pub fn write_config(
    dir: &Path,
    device_type: &str,
    document: &YamlDocument,
    at: NaiveDateTime,
) -> Result<PathBuf> {
    let path = dir.join(output_filename(device_type, at));
    fs::write(&path, document.as_str()).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 42)
            .unwrap()
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(
            output_filename("router", timestamp()),
            "router_config_20240309_070542.yaml"
        );
    }

    #[test]
    fn test_device_type_used_verbatim() {
        assert_eq!(
            output_filename("edge-FW", timestamp()),
            "edge-FW_config_20240309_070542.yaml"
        );
    }

    #[test]
    fn test_write_config() {
        let dir = tempfile::tempdir().unwrap();
        let document = YamlDocument::new("hostname: r1").unwrap();

        let path = write_config(dir.path(), "router", &document, timestamp()).unwrap();
        assert_eq!(path, dir.path().join("router_config_20240309_070542.yaml"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hostname: r1");
    }

    #[test]
    fn test_write_config_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = YamlDocument::new("a: 1").unwrap();
        let second = YamlDocument::new("b: 2").unwrap();

        write_config(dir.path(), "switch", &first, timestamp()).unwrap();
        let path = write_config(dir.path(), "switch", &second, timestamp()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "b: 2");
    }

    #[test]
    fn test_write_config_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let document = YamlDocument::new("a: 1").unwrap();

        let result = write_config(&dir.path().join("absent"), "router", &document, timestamp());
        assert!(matches!(result, Err(CliError::Write { .. })));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.info("note"), "ℹ note");
    }
}

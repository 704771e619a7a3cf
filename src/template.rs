//! Loading the template as raw text

use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Default template location, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "template.yaml";

/// A template held as opaque text. It is never parsed as YAML.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    text: String,
}

impl Template {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError {
            path: path.to_path_buf(),
            source,
        })?;
        let text = normalize_newlines(raw);

        tracing::debug!("Loaded template {} ({} bytes)", path.display(), text.len());

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Block terminators match on `\n`, so `\r\n` and bare `\r` become `\n`.
fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("template.yaml");
        fs::write(&path, "Parameters:\n  domainName:\n").unwrap();

        let template = Template::load(&path).unwrap();
        assert_eq!(template.text(), "Parameters:\n  domainName:\n");
        assert_eq!(template.path(), path.as_path());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        let err = Template::load(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_load_normalizes_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        let crlf = temp_dir.path().join("crlf.yaml");
        let cr = temp_dir.path().join("cr.yaml");
        fs::write(&crlf, "Outputs:\r\n  CustomDomainUrl:\r\n    Value: x\r\n").unwrap();
        fs::write(&cr, "Outputs:\r  CustomDomainUrl:\r\r    Value: x\r").unwrap();

        assert_eq!(
            Template::load(&crlf).unwrap().text(),
            "Outputs:\n  CustomDomainUrl:\n    Value: x\n"
        );
        assert_eq!(
            Template::load(&cr).unwrap().text(),
            "Outputs:\n  CustomDomainUrl:\n\n    Value: x\n"
        );
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("template.yaml");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = Template::load(&path).unwrap_err();
        assert_eq!(err.source.kind(), std::io::ErrorKind::InvalidData);
    }
}

//! Error types shared by the loader and the reporters

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The template could not be read from disk.
#[derive(Error, Debug)]
#[error("{}: {source}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render diagnostic: {0}")]
    Render(#[from] std::fmt::Error),
}

/// A single finding attached to the template source, for rich rendering.
#[derive(Error, Debug, Diagnostic, Clone)]
#[error("{message}")]
#[diagnostic(code(sam_domain_check::custom_domain))]
pub struct TemplateDiagnostic {
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub bad_bit: Option<SourceSpan>,
    pub message: String,
}

impl TemplateDiagnostic {
    pub fn new(
        path: &Path,
        content: String,
        span: Option<SourceSpan>,
        message: String,
    ) -> Self {
        Self {
            src: NamedSource::new(path.display().to_string(), content),
            bad_bit: span,
            message,
        }
    }
}

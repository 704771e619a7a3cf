//! Rendering a validation outcome

use miette::{GraphicalReportHandler, GraphicalTheme};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::error::{LoadError, ReportError};
use crate::template::Template;
use crate::validation::{Finding, VALIDATED_FEATURES};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Status lines and a bulleted error list
    #[default]
    Text,
    /// A single JSON object
    Json,
    /// The error list followed by annotated template snippets
    Diagnostics,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    template: String,
    passed: bool,
    errors: Vec<&'a str>,
}

pub fn render(
    format: OutputFormat,
    template: &Template,
    findings: &[Finding],
    out: &mut impl Write,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => render_text(findings, out),
        OutputFormat::Json => render_json(template, findings, out),
        OutputFormat::Diagnostics => render_diagnostics(template, findings, out),
    }
}

/// A template that could not be read, in the requested format.
pub fn render_load_error(
    format: OutputFormat,
    path: &Path,
    error: &LoadError,
    out: &mut impl Write,
) -> Result<(), ReportError> {
    let message = format!("Error loading template: {error}");

    match format {
        OutputFormat::Json => {
            let report = JsonReport {
                template: path.display().to_string(),
                passed: false,
                errors: vec![message.as_str()],
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text | OutputFormat::Diagnostics => writeln!(out, "{message}")?,
    }
    Ok(())
}

pub fn render_text(findings: &[Finding], out: &mut impl Write) -> Result<(), ReportError> {
    if findings.is_empty() {
        writeln!(
            out,
            "✅ Template validation passed - CloudFront custom domain configuration is correct"
        )?;
        writeln!(out, "✅ Key features validated:")?;
        for feature in VALIDATED_FEATURES {
            writeln!(out, "  - {feature}")?;
        }
    } else {
        writeln!(out, "❌ Validation errors found:")?;
        for finding in findings {
            writeln!(out, "  - {finding}")?;
        }
    }
    Ok(())
}

pub fn render_json(
    template: &Template,
    findings: &[Finding],
    out: &mut impl Write,
) -> Result<(), ReportError> {
    let report = JsonReport {
        template: template.path().display().to_string(),
        passed: findings.is_empty(),
        errors: findings.iter().map(|f| f.message.as_str()).collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Text output, then one annotated snippet per finding.
pub fn render_diagnostics(
    template: &Template,
    findings: &[Finding],
    out: &mut impl Write,
) -> Result<(), ReportError> {
    render_text(findings, out)?;

    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    for finding in findings {
        let diagnostic = finding.to_diagnostic(template);
        let mut rendered = String::new();
        handler.render_report(&mut rendered, &diagnostic)?;
        writeln!(out)?;
        write!(out, "{rendered}")?;
    }
    Ok(())
}

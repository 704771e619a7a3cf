use miette::SourceSpan;
use std::fmt;
use std::ops::Range;

use crate::error::TemplateDiagnostic;
use crate::template::Template;

/// One failed check. `span` points at the block the message is about, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    pub span: Option<Range<usize>>,
}

impl Finding {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    pub fn in_block(message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn to_diagnostic(&self, template: &Template) -> TemplateDiagnostic {
        let span = self
            .span
            .as_ref()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

        TemplateDiagnostic::new(
            template.path(),
            template.text().to_string(),
            span,
            self.message.clone(),
        )
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{OutputError, Stage};

/// A diagnostic wrapper for output errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct OutputDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::ResolveOutput => "Check the output path and the configured formats",
        Stage::CreateDir => "Check that no file occupies a directory segment of the path",
        Stage::Decode | Stage::Encode => "The codec rejected the content",
        Stage::Open | Stage::Write => "Check permissions and free space at the destination",
    }
}

impl From<OutputError> for OutputDiagnostic {
    fn from(e: OutputError) -> Self {
        OutputDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage).into()),
            source: Some(e.error),
            severity: Severity::Error,
        }
    }
}

impl From<OutputError> for miette::Report {
    fn from(e: OutputError) -> Self {
        miette::Report::new(OutputDiagnostic::from(e))
    }
}

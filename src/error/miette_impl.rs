//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{DeviceError, RunError};

/// A diagnostic wrapper for pipeline errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct GenDiagnostic {
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

impl From<DeviceError> for GenDiagnostic {
    fn from(e: DeviceError) -> Self {
        GenDiagnostic {
            message: format!("[{}] on device '{}'", e.stage, e.device),
            source: Some(e.error),
            help: Some("Check the inventory entry for this device".into()),
            severity: Severity::Error,
        }
    }
}

impl From<RunError> for GenDiagnostic {
    fn from(e: RunError) -> Self {
        match e {
            RunError::Aborted(dev) => GenDiagnostic::from(dev),
            RunError::Load(load) => GenDiagnostic {
                message: "inventory could not be loaded".into(),
                source: Some(Box::new(load)),
                help: Some("Check the inventory path and format".into()),
                severity: Severity::Error,
            },
        }
    }
}

impl From<RunError> for miette::Report {
    fn from(e: RunError) -> Self {
        miette::Report::new(GenDiagnostic::from(e))
    }
}

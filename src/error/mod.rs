//! Error types and policies for the generation pipeline.
//!
//! This module provides:
//! - `ErrorPolicy`: Controls whether a per-device failure stops the run
//! - `Stage`: Indicates where in the pipeline a device failed
//! - `DeviceError`: A single per-device error with context
//! - `RunError`: Fatal errors that abort a whole run

use std::fmt;

use thiserror::Error;

use crate::inventory::LoadError;

/// Policy for per-device failures.
///
/// Fatal input errors (unreadable or malformed inventory files) always abort
/// the run regardless of policy; this only governs errors scoped to a single
/// device record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first per-device error
    FailFast,
    /// Record the error, skip the device, and continue
    #[default]
    SkipAndReport,
}

impl ErrorPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fail_fast" | "failfast" => Some(ErrorPolicy::FailFast),
            "skip_and_report" | "skip" => Some(ErrorPolicy::SkipAndReport),
            _ => None,
        }
    }
}

/// Pipeline stage where a device failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while converting the raw inventory entry into a record
    Load,
    /// Error while rendering the record into configuration text
    Render,
    /// Error while persisting the rendered text
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Load => write!(f, "Load"),
            Stage::Render => write!(f, "Render"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// A single per-device error.
#[derive(Debug)]
pub struct DeviceError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Hostname of the failing device, or `#<index>` when it has none
    pub device: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.device, self.error)
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// Fatal errors that abort a whole run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The inventory file could not be read or parsed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A per-device error under `ErrorPolicy::FailFast`
    #[error("run aborted: {0}")]
    Aborted(DeviceError),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;

//! Declarative job configuration for generation runs.
//!
//! A job file describes one complete run: where the inventory lives, where
//! the rendered configurations go, and how per-device failures are handled.
//!
//! ```yaml
//! input:
//!   path: inventory/devices.json
//! output:
//!   dir: generated
//! error_policy: skip_and_report
//! ```

use serde::Deserialize;

/// Configuration for an entire generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// Inventory input
    pub input: JobInput,
    /// Output destination
    pub output: JobOutput,
    /// Error policy: "fail_fast" or "skip_and_report"
    #[serde(default)]
    pub error_policy: Option<String>,
}

/// Inventory input section of a job.
#[derive(Debug, Clone, Deserialize)]
pub struct JobInput {
    /// Inventory file path; "-" for stdin
    pub path: String,
    /// Explicit format: "json" or "csv" (overrides extension inference)
    #[serde(default)]
    pub format: Option<String>,
}

/// Output section of a job.
#[derive(Debug, Clone, Deserialize)]
pub struct JobOutput {
    /// Directory receiving one `<hostname>.cfg` file per device
    pub dir: String,
}

impl JobConfig {
    /// Create a job for the given input path and output directory.
    pub fn new(input_path: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            input: JobInput {
                path: input_path.into(),
                format: None,
            },
            output: JobOutput {
                dir: output_dir.into(),
            },
            error_policy: None,
        }
    }

    /// Set the explicit inventory format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.input.format = Some(format.into());
        self
    }

    /// Set the error policy.
    pub fn with_error_policy(mut self, policy: impl Into<String>) -> Self {
        self.error_policy = Some(policy.into());
        self
    }

    /// Parse a job configuration from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_reader(reader: impl std::io::Read) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    /// Parse a job configuration from JSON.
    #[cfg(feature = "json")]
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

//! Builder for assembling generation pipelines.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::engine::{Engine, Generator};
use crate::error::ErrorPolicy;
use crate::inventory::{
    self, FileSource, InventoryFormat, InventorySource, StdinSource,
};
use crate::job::JobConfig;
use crate::sink::{ConfigSink, DirSink};

/// Errors produced while assembling a pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Neither an input path nor a source was configured
    #[error("no inventory input was configured")]
    MissingInput,

    /// Neither an output directory nor a sink was configured
    #[error("no output directory or sink was configured")]
    MissingOutput,
}

/// Fluent builder for [`Generator`]s.
///
/// The inventory format is taken from an explicit setting when given,
/// otherwise inferred from the input path's extension; when neither applies
/// (e.g. stdin without an explicit format) the generator reports it at
/// execution time.
pub struct GeneratorBuilder {
    input_arg: Option<String>,
    source: Option<Arc<dyn InventorySource>>,
    explicit_format: Option<InventoryFormat>,
    out_dir: Option<PathBuf>,
    sink: Option<Arc<dyn ConfigSink>>,
    policy: ErrorPolicy,
}

impl GeneratorBuilder {
    /// Create a new builder with the default error policy.
    pub fn new() -> Self {
        Self {
            input_arg: None,
            source: None,
            explicit_format: None,
            out_dir: None,
            sink: None,
            policy: ErrorPolicy::default(),
        }
    }

    /// Set the inventory input path. Use "-" for stdin.
    pub fn input(mut self, arg: impl Into<String>) -> Self {
        self.input_arg = Some(arg.into());
        self
    }

    /// Set a pre-built inventory source (overrides `input`).
    pub fn source(mut self, source: Arc<dyn InventorySource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the explicit inventory format (overrides extension inference).
    pub fn format(mut self, format: InventoryFormat) -> Self {
        self.explicit_format = Some(format);
        self
    }

    /// Set the output directory.
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Set a pre-built sink (overrides `out_dir`).
    pub fn sink(mut self, sink: Arc<dyn ConfigSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the error policy.
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Assemble the generator.
    pub fn build(self) -> Result<Generator, BuildError> {
        let (source, path_hint): (Arc<dyn InventorySource>, Option<PathBuf>) =
            match (self.source, self.input_arg) {
                (Some(source), _) => (source, None),
                (None, Some(arg)) if arg == "-" => (Arc::new(StdinSource::new()), None),
                (None, Some(arg)) => {
                    let path = PathBuf::from(&arg);
                    (Arc::new(FileSource::new(path.clone())), Some(path))
                }
                (None, None) => return Err(BuildError::MissingInput),
            };

        let format = self.explicit_format.or_else(|| {
            path_hint
                .as_deref()
                .and_then(inventory::infer_format_from_path)
        });

        let sink: Arc<dyn ConfigSink> = match (self.sink, self.out_dir) {
            (Some(sink), _) => sink,
            (None, Some(dir)) => Arc::new(DirSink::new(dir)),
            (None, None) => return Err(BuildError::MissingOutput),
        };

        let engine = Engine::new(sink, self.policy);
        Ok(Generator::new(source, format, engine))
    }

    /// Populate a builder from a declarative job configuration.
    pub fn from_job_config(config: JobConfig) -> Self {
        let mut builder = GeneratorBuilder::new()
            .input(config.input.path)
            .out_dir(config.output.dir);

        if let Some(format) = config
            .input
            .format
            .as_deref()
            .and_then(InventoryFormat::from_str)
        {
            builder = builder.format(format);
        }

        if let Some(policy) = config
            .error_policy
            .as_deref()
            .and_then(ErrorPolicy::from_str)
        {
            builder = builder.with_policy(policy);
        }

        builder
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Generation engine: the sequential render-then-write run loop.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{DeviceError, ErrorPolicy, RunError, Stage};
use crate::inventory::{self, Inventory, InventoryFormat, InventorySource};
use crate::model::DeviceRecord;
use crate::render::{self, RenderError};
use crate::sink::ConfigSink;

/// Aggregate outcome of one generation run.
///
/// `Display` prints the summary line followed by one numbered line per
/// recorded error, in the order they occurred.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Devices whose configuration was written
    pub written: usize,
    /// Devices skipped (unsupported vendor tag)
    pub skipped: usize,
    /// Devices that failed to load, render, or write
    pub failed: usize,
    /// Hostnames seen more than once in the batch
    pub duplicates: Vec<String>,
    /// Per-device errors, in occurrence order
    pub errors: Vec<DeviceError>,
}

impl RunReport {
    /// Total number of devices accounted for.
    pub fn total(&self) -> usize {
        self.written + self.skipped + self.failed
    }

    /// Check whether every device was written without incident.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.failed == 0 && self.duplicates.is_empty()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {} device(s): {} written, {} skipped, {} failed",
            self.total(),
            self.written,
            self.skipped,
            self.failed
        )?;
        if !self.duplicates.is_empty() {
            write!(f, " ({} duplicate hostname(s))", self.duplicates.len())?;
        }
        for (i, e) in self.errors.iter().enumerate() {
            write!(f, "\n  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

/// Engine owning the sink, the error policy, and the run loop.
///
/// Processing is strictly sequential: render, then write, then advance to
/// the next record. Rendering is a pure function of the record and writes
/// are independent per device, so no state is shared across iterations.
#[derive(Debug)]
pub struct Engine {
    sink: Arc<dyn ConfigSink>,
    policy: ErrorPolicy,
}

impl Engine {
    /// Create a new engine.
    pub fn new(sink: Arc<dyn ConfigSink>, policy: ErrorPolicy) -> Self {
        Self { sink, policy }
    }

    /// Get the output sink.
    pub fn sink(&self) -> &Arc<dyn ConfigSink> {
        &self.sink
    }

    /// Get the error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Process a loaded inventory: one render + write per record.
    ///
    /// Entries the loader rejected count as failed devices. Under
    /// `SkipAndReport` every error is recorded and the run continues; under
    /// `FailFast` the first per-device error aborts the run. Unsupported
    /// vendor tags are a deliberate skip, not an error, and never abort.
    pub fn run(&self, inventory: Inventory) -> Result<RunReport, RunError> {
        let mut report = RunReport::default();
        let mut seen: HashSet<String> = HashSet::new();

        for rejected in inventory.rejected {
            let device = rejected
                .hostname
                .unwrap_or_else(|| format!("#{}", rejected.index));
            tracing::warn!(%device, error = %rejected.error, "record rejected");
            report.failed += 1;
            let error = DeviceError {
                stage: Stage::Load,
                device,
                error: Box::new(rejected.error),
            };
            if self.policy == ErrorPolicy::FailFast {
                return Err(RunError::Aborted(error));
            }
            report.errors.push(error);
        }

        for record in &inventory.records {
            if !seen.insert(record.hostname.clone()) {
                tracing::warn!(hostname = %record.hostname, "duplicate hostname; output will be overwritten");
                report.duplicates.push(record.hostname.clone());
            }

            if let Err(e) = self.process(record, &mut report) {
                tracing::warn!(hostname = %record.hostname, error = %e, "device failed");
                report.failed += 1;
                if self.policy == ErrorPolicy::FailFast {
                    return Err(RunError::Aborted(e));
                }
                report.errors.push(e);
            }
        }

        tracing::info!(
            written = report.written,
            skipped = report.skipped,
            failed = report.failed,
            "run complete"
        );
        Ok(report)
    }

    fn process(&self, record: &DeviceRecord, report: &mut RunReport) -> Result<(), DeviceError> {
        let rendered = match render::render(record) {
            Ok(rendered) => rendered,
            Err(RenderError::UnsupportedVendor(tag)) => {
                tracing::warn!(hostname = %record.hostname, %tag, "unsupported vendor, skipping");
                report.skipped += 1;
                return Ok(());
            }
            Err(e) => {
                return Err(DeviceError {
                    stage: Stage::Render,
                    device: record.hostname.clone(),
                    error: Box::new(e),
                });
            }
        };

        if let Some(reason) = &rendered.skipped {
            tracing::warn!(hostname = %record.hostname, %reason, "partial render");
        }

        self.sink
            .write(&record.hostname, &rendered.text)
            .map_err(|e| DeviceError {
                stage: Stage::Write,
                device: record.hostname.clone(),
                error: Box::new(e),
            })?;

        tracing::info!(hostname = %record.hostname, sink = %self.sink.id(), "configuration written");
        report.written += 1;
        Ok(())
    }
}

/// A fully assembled generation pipeline: source + format + engine.
///
/// Built by [`GeneratorBuilder`](crate::builder::GeneratorBuilder).
#[derive(Debug)]
pub struct Generator {
    source: Arc<dyn InventorySource>,
    format: Option<InventoryFormat>,
    engine: Engine,
}

impl Generator {
    pub(crate) fn new(
        source: Arc<dyn InventorySource>,
        format: Option<InventoryFormat>,
        engine: Engine,
    ) -> Self {
        Self {
            source,
            format,
            engine,
        }
    }

    /// Get the inventory source.
    pub fn source(&self) -> &Arc<dyn InventorySource> {
        &self.source
    }

    /// Get the resolved inventory format, if one is known.
    pub fn format(&self) -> Option<InventoryFormat> {
        self.format
    }

    /// Get the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Load the inventory and process every record.
    pub fn execute(&self) -> Result<RunReport, RunError> {
        let format = self
            .format
            .ok_or_else(|| inventory::LoadError::UnknownFormat(self.source.id().to_string()))?;
        if !format.is_available() {
            return Err(inventory::LoadError::NotEnabled(format).into());
        }

        tracing::info!(source = %self.source.id(), %format, "loading inventory");
        let inventory = inventory::load(self.source.as_ref(), format)?;
        tracing::info!(
            records = inventory.records.len(),
            rejected = inventory.rejected.len(),
            "inventory loaded"
        );

        self.engine.run(inventory)
    }
}

//! # confgen
//!
//! Vendor-specific network configuration generation from device inventories.
//!
//! ## Overview
//!
//! confgen provides:
//! - **Inventory loading**: JSON and CSV device inventories behind one API
//! - **Deterministic rendering**: one rendering rule per vendor dialect
//!   (Cisco, Arista, Juniper) plus role-based templates for CSV inventories
//! - **Per-device output**: one `<hostname>.cfg` file per record, written
//!   into an output directory that is created on demand
//! - **Error isolation**: configurable policy (SkipAndReport or FailFast)
//!   so one bad record never blocks the rest of the batch
//! - **Job configuration**: define a whole run via a YAML/JSON job file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use confgen::{ErrorPolicy, GeneratorBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = GeneratorBuilder::new()
//!         .input("devices.json")
//!         .out_dir("generated")
//!         .with_policy(ErrorPolicy::SkipAndReport)
//!         .build()?;
//!
//!     let report = generator.execute()?;
//!     println!("{report}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - JSON inventory support (enabled by default)
//! - `csv` - CSV inventory support (enabled by default)
//! - `yaml` - YAML job files
//! - `miette` - Pretty error reporting with miette
//! - `cli` - The `confgen` command-line binary
//!
//! ## Pipeline semantics
//!
//! A run is single-threaded and strictly sequential: the inventory is
//! loaded once, then each record is rendered and written before the next is
//! touched. Rendering is a pure function of the record, writes go to
//! independent files, and no state is shared across records, so the order
//! is an implementation detail rather than a contract.
//!
//! Malformed inventory files abort the run before any output is produced.
//! Record-scoped problems (missing fields, unsupported vendor tags, write
//! failures) are isolated per device: under the default policy they are
//! reported and counted while the rest of the batch still generates. The
//! sink never deletes files it did not write, so stale output from earlier
//! runs survives until removed by hand.

// Core modules
pub mod builder;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod job;
pub mod model;
pub mod render;
pub mod sink;

// Re-exports for convenience
pub use builder::{BuildError, GeneratorBuilder};
pub use engine::{Engine, Generator, RunReport};
pub use error::{DeviceError, ErrorPolicy, RunError, Stage};
pub use inventory::{
    FileSource, Inventory, InventoryFormat, InventorySource, LoadError, MemorySource, StdinSource,
};
pub use job::JobConfig;
pub use model::{DeviceRecord, DeviceRole, Interface, Vendor};
pub use render::{RenderError, Rendered, render, render_vendor};
pub use sink::{ConfigSink, DirSink, MemorySink, WriteError};

/// Build a generator from a job configuration.
pub fn generator_from_job(config: JobConfig) -> Result<Generator, BuildError> {
    builder::GeneratorBuilder::from_job_config(config).build()
}

/// Build a generator from a job configuration, allowing the caller to
/// further customize the builder before it is built. This is a natural hook
/// point for swapping in a custom source or sink based on the parsed
/// configuration.
pub fn generator_from_job_with<F>(config: JobConfig, customize: F) -> Result<Generator, BuildError>
where
    F: FnOnce(GeneratorBuilder) -> GeneratorBuilder,
{
    let builder = GeneratorBuilder::from_job_config(config);
    customize(builder).build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::GenDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;

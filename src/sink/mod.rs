//! Output sinks for rendered configuration blocks.
//!
//! This module provides:
//! - `ConfigSink`: Trait for configuration output destinations
//! - `DirSink`: Writes one `<hostname>.cfg` file per device into a directory
//! - `MemorySink`: In-memory implementation for testing
//! - `WriteError`: Errors that can occur while persisting output

use std::fmt::Debug;

use thiserror::Error;

mod dir;
mod memory;

pub use dir::DirSink;
pub use memory::MemorySink;

/// Errors that can occur while persisting output.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The hostname cannot be used as a filename
    #[error("hostname `{0}` is not usable as a filename")]
    InvalidHostname(String),

    /// I/O error while writing the target
    #[error("failed to write `{target}`: {source}")]
    Io {
        /// Path or identifier of the failing target
        target: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Trait for configuration output destinations.
///
/// Implementors persist one rendered text block per device, keyed by
/// hostname. Writes are independent per device; a sink never deletes
/// anything it did not write in the current call.
pub trait ConfigSink: Send + Sync + Debug {
    /// Returns a unique identifier for this sink.
    ///
    /// This is used for error messages and logging.
    /// Convention: directory path for directory sinks.
    fn id(&self) -> &str;

    /// Persist the rendered text for one device, replacing any previous
    /// content for the same hostname.
    fn write(&self, hostname: &str, text: &str) -> Result<(), WriteError>;
}

/// Check that a hostname is safe to use as a filename stem.
///
/// Accepts ASCII alphanumerics plus `.`, `_` and `-`; rejects empty names,
/// names starting with a dot, and anything that could traverse out of the
/// output directory.
pub fn is_safe_hostname(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

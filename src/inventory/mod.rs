//! Inventory loading: formats, sources, and record conversion.
//!
//! This module provides:
//! - `InventoryFormat`: Enum representing supported inventory file formats
//! - `LoadError`: Errors that can occur while loading an inventory
//! - `InventorySource`: Trait for inventory byte sources
//! - `Inventory`: The loaded record sequence plus per-record rejects

use std::io::Read;
use std::path::Path;

mod source;
pub use source::{FileSource, InventorySource, MemorySource, StdinSource};

#[cfg(feature = "csv")]
mod csv;
#[cfg(feature = "json")]
mod json;

use thiserror::Error;

use crate::model::DeviceRecord;

/// Represents supported inventory file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryFormat {
    /// JSON document with a top-level `devices` array
    Json,
    /// CSV table with a header row
    Csv,
}

impl std::fmt::Display for InventoryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryFormat::Json => write!(f, "json"),
            InventoryFormat::Csv => write!(f, "csv"),
        }
    }
}

impl InventoryFormat {
    /// Parse a format from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(InventoryFormat::Json),
            "csv" => Some(InventoryFormat::Csv),
            _ => None,
        }
    }

    /// Get file extensions for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            InventoryFormat::Json => &["json"],
            InventoryFormat::Csv => &["csv"],
        }
    }

    /// Check if this format is available (feature enabled).
    pub fn is_available(&self) -> bool {
        match self {
            #[cfg(feature = "json")]
            InventoryFormat::Json => true,
            #[cfg(not(feature = "json"))]
            InventoryFormat::Json => false,

            #[cfg(feature = "csv")]
            InventoryFormat::Csv => true,
            #[cfg(not(feature = "csv"))]
            InventoryFormat::Csv => false,
        }
    }
}

/// Infer the inventory format from a file extension.
pub fn infer_format_from_path(path: &Path) -> Option<InventoryFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())?;
    [InventoryFormat::Json, InventoryFormat::Csv]
        .into_iter()
        .find(|k| k.extensions().iter().any(|e| *e == ext))
}

/// Errors that can occur while loading an inventory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O error while reading the source
    #[error("I/O error reading inventory: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON/CSV syntax; aborts the run before any output
    #[error("malformed inventory: {0}")]
    Syntax(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A record lacks a required field
    #[error("record #{index} is missing required field `{field}`")]
    MissingField {
        /// Zero-based position of the record in the input
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// The CSV header row lacks a required column
    #[error("inventory is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// The format could not be determined from the source
    #[error("cannot infer inventory format from `{0}`; pass an explicit format")]
    UnknownFormat(String),

    /// The format is known but its feature is not compiled in
    #[error("inventory format `{0}` is not enabled; enable the corresponding feature")]
    NotEnabled(InventoryFormat),
}

/// A raw inventory entry that could not be converted into a record.
#[derive(Debug)]
pub struct RejectedRecord {
    /// Zero-based position of the entry in the input
    pub index: usize,
    /// Hostname, when the entry carried one
    pub hostname: Option<String>,
    /// Why the entry was rejected
    pub error: LoadError,
}

/// The result of loading an inventory file.
///
/// Syntax errors are fatal and never produce an `Inventory`; entries that
/// parse but lack a required field land in `rejected` so the rest of the
/// batch can still be processed.
#[derive(Debug, Default)]
pub struct Inventory {
    /// Records in input order
    pub records: Vec<DeviceRecord>,
    /// Entries rejected during conversion, in input order
    pub rejected: Vec<RejectedRecord>,
}

impl Inventory {
    /// Wrap an already-built record list.
    pub fn from_records(records: Vec<DeviceRecord>) -> Self {
        Self {
            records,
            rejected: Vec::new(),
        }
    }

    /// Total number of entries seen in the input.
    pub fn len(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    /// Check whether the input had no entries at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.rejected.is_empty()
    }
}

/// Load an inventory from a source using the specified format.
pub fn load(
    source: &dyn InventorySource,
    format: InventoryFormat,
) -> Result<Inventory, LoadError> {
    let mut reader = source.open()?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse(format, &bytes)
}

/// Parse inventory bytes using the specified format.
pub fn parse(format: InventoryFormat, bytes: &[u8]) -> Result<Inventory, LoadError> {
    match format {
        #[cfg(feature = "json")]
        InventoryFormat::Json => json::parse(bytes),

        #[cfg(feature = "csv")]
        InventoryFormat::Csv => csv::parse(bytes),

        #[allow(unreachable_patterns)]
        _ => Err(LoadError::NotEnabled(format)),
    }
}

//! Inventory source trait and implementations.

use std::fmt::Debug;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;
use std::sync::Arc;

/// Trait for inventory byte sources.
///
/// Implementors provide a way to open a readable stream from various sources
/// such as files, stdin, or in-memory buffers.
pub trait InventorySource: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Open and return a new readable stream.
    ///
    /// Each call should return a fresh stream positioned at the beginning.
    fn open(&self) -> io::Result<Box<dyn Read + Send>>;
}

/// Source reading from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    id: String,
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl InventorySource for FileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = std::fs::File::open(&self.path)?;
        Ok(Box::new(file))
    }
}

/// Source reading from stdin.
#[derive(Debug, Clone)]
pub struct StdinSource {
    id: String,
}

impl StdinSource {
    /// Create a new stdin source.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InventorySource for StdinSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(io::stdin()))
    }
}

/// In-memory source for testing.
#[derive(Debug, Clone)]
pub struct MemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl MemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }
}

impl InventorySource for MemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.data.as_ref().clone())))
    }
}

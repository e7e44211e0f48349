//! In-memory sink for testing.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{ConfigSink, WriteError, is_safe_hostname};

/// In-memory sink collecting rendered blocks by hostname.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    id: String,
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Get the text written for a hostname, if any.
    pub fn get(&self, hostname: &str) -> Option<String> {
        self.entries.lock().unwrap().get(hostname).cloned()
    }

    /// Get all written entries keyed by hostname.
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of hostnames written so far.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Check whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl ConfigSink for MemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&self, hostname: &str, text: &str) -> Result<(), WriteError> {
        if !is_safe_hostname(hostname) {
            return Err(WriteError::InvalidHostname(hostname.to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(hostname.to_string(), text.to_string());
        Ok(())
    }
}

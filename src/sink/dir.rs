//! Directory sink: one `<hostname>.cfg` file per device.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{ConfigSink, WriteError, is_safe_hostname};

/// Sink writing each device's configuration to `<root>/<hostname>.cfg`.
///
/// The directory (and its parents) are created on first write; creation is
/// idempotent, so re-running against an existing directory succeeds.
/// Existing files are truncated and replaced; files from earlier runs that
/// are not rewritten stay untouched.
#[derive(Debug, Clone)]
pub struct DirSink {
    id: String,
    root: PathBuf,
}

impl DirSink {
    /// Create a new directory sink rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        let id = root.to_string_lossy().into_owned();
        Self { id, root }
    }

    /// Get the output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output path for a hostname.
    pub fn path_for(&self, hostname: &str) -> PathBuf {
        self.root.join(format!("{hostname}.cfg"))
    }
}

impl ConfigSink for DirSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&self, hostname: &str, text: &str) -> Result<(), WriteError> {
        if !is_safe_hostname(hostname) {
            return Err(WriteError::InvalidHostname(hostname.to_string()));
        }

        std::fs::create_dir_all(&self.root).map_err(|source| WriteError::Io {
            target: self.id.clone(),
            source,
        })?;

        let path = self.path_for(hostname);
        let io_err = |source| WriteError::Io {
            target: path.to_string_lossy().into_owned(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)
            .map_err(io_err)?;
        file.write_all(text.as_bytes()).map_err(io_err)?;
        Ok(())
    }
}

#[cfg(test)]
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};

/// Destination for encoded icons, addressed by file name.
pub trait IconSink {
    /// Write `bytes` under `file_name`, replacing anything already there.
    /// Returns the path that was written, for reporting.
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes icons into a directory on disk.
///
/// The directory itself must already exist; see [`FsSink::prepare`].
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory and any missing parents.
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| IconError::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }
}

impl IconSink for FsSink {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes).map_err(|source| IconError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

/// Keeps encoded icons in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: BTreeMap<String, Vec<u8>>,
}

#[cfg(test)]
impl IconSink for MemorySink {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.files.insert(file_name.to_string(), bytes.to_vec());
        Ok(PathBuf::from(file_name))
    }
}

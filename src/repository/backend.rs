use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::container::Container;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Persistence contract behind the store.
///
/// Implementations only move the full container sequence in and out of some
/// medium; all locking and mutation logic lives in
/// [`JsonStore`](crate::repository::JsonStore), so a backend may be a local
/// file, process memory or anything else that can round-trip the sequence.
pub trait StoreBackend: Send + Sync {
    fn load(&self) -> RepositoryResult<Vec<Container>>;
    fn save(&self, containers: &[Container]) -> RepositoryResult<()>;
}

/// Backend persisting the container list as a pretty-printed JSON file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StoreBackend for FileBackend {
    /// A missing or unreadable data file loads as an empty collection so the
    /// service can always start.
    fn load(&self) -> RepositoryResult<Vec<Container>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(containers) => Ok(containers),
            Err(err) => {
                log::warn!(
                    "data file {} is not valid JSON, starting empty: {err}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, containers: &[Container]) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(containers)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Purely in-process backend, used by tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    containers: Mutex<Vec<Container>>,
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> RepositoryResult<Vec<Container>> {
        let containers = self.containers.lock().map_err(|_| RepositoryError::Lock)?;
        Ok(containers.clone())
    }

    fn save(&self, containers: &[Container]) -> RepositoryResult<()> {
        let mut stored = self.containers.lock().map_err(|_| RepositoryError::Lock)?;
        *stored = containers.to_vec();
        Ok(())
    }
}

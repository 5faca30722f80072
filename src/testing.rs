//! Test helpers: an in-memory probe and a scratch directory.
//! Compiled for this crate's own tests and behind the `test-helpers` feature.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tempfile::TempDir;

use crate::probe::ExistenceProbe;

/// In-memory set of existing paths. Clones share state, so a test can hand
/// one clone to the expectation and drive the other from the action.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    paths: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `paths` already present.
    pub fn with_paths<I, T>(paths: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PathBuf>,
    {
        let fs = Self::new();
        fs.lock().extend(paths.into_iter().map(Into::into));
        fs
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<PathBuf>> {
        // a panicking test may poison the lock; the set itself stays usable
        self.paths.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn touch(&self, path: impl AsRef<Path>) {
        self.lock().insert(path.as_ref().to_path_buf());
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.lock().remove(path.as_ref());
    }

    /// Move `from` to `to`. Does nothing if `from` is absent.
    pub fn rename(&self, from: impl AsRef<Path>, to: impl AsRef<Path>) {
        let mut paths = self.lock();
        if paths.remove(from.as_ref()) {
            paths.insert(to.as_ref().to_path_buf());
        }
    }

    /// Create `to` if `from` exists.
    pub fn copy(&self, from: impl AsRef<Path>, to: impl AsRef<Path>) {
        let mut paths = self.lock();
        if paths.contains(from.as_ref()) {
            paths.insert(to.as_ref().to_path_buf());
        }
    }
}

impl ExistenceProbe for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.lock().contains(path)
    }
}

/// Per-test temporary directory, removed on drop.
#[derive(Debug)]
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("transfer_check").tempdir()?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the sandbox; nothing is created.
    pub fn path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create an empty file named `name` and return its path.
    pub fn touch(&self, name: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let p = self.path(name);
        std::fs::OpenOptions::new().create(true).append(true).open(&p)?;
        Ok(p)
    }
}

//! Existence checks.
//!
//! The checker only ever asks one question of the filesystem: does this path
//! exist? `ExistenceProbe` is that question as a trait, so tests can answer it
//! from memory instead of disk.

use std::path::Path;

/// Answers whether a path exists.
pub trait ExistenceProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem. Symlinks are followed, so a dangling
/// link counts as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ExistenceProbe for LocalFs {
    #[inline]
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F> ExistenceProbe for F
where
    F: Fn(&Path) -> bool,
{
    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

//! Config path resolution and symlink checks.

use dirs::config_dir;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

/// Config file location: `$TRANSFER_CHECK_CONFIG` if set, else
/// `<config dir>/transfer_check/config.xml`. `None` when neither a config dir
/// nor `$HOME` is known.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV)
        && !p.is_empty()
    {
        return Some(PathBuf::from(p));
    }
    match config_dir() {
        Some(base) => Some(base.join("transfer_check").join("config.xml")),
        None => std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("transfer_check")
                .join("config.xml")
        }),
    }
}

/// True if an existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    for anc in path.ancestors().skip(1) {
        if anc.as_os_str().is_empty() || !anc.exists() {
            continue;
        }
        if fs::symlink_metadata(anc)?.file_type().is_symlink() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tempdir_has_no_symlink_ancestor() {
        let td = tempfile::tempdir().unwrap();
        let real = fs::canonicalize(td.path()).unwrap();
        assert!(!path_has_symlink_ancestor(&real.join("log.txt")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_parent_is_detected() {
        let td = tempfile::tempdir().unwrap();
        let real = td.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = td.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        assert!(path_has_symlink_ancestor(&link.join("log.txt")).unwrap());
    }
}

//! Transfer expectations.
//!
//! The free functions mirror the three things a test usually wants to say:
//!
//! ```
//! use transfer_check::expect::{delete_file, move_file, TransferOptions};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let src = dir.path().join("a.txt");
//! let dst = dir.path().join("a.bak");
//! std::fs::write(&src, "x").unwrap();
//!
//! let mut moved = move_file(&src, TransferOptions::to(&dst));
//! assert!(moved.evaluate(|| std::fs::rename(&src, &dst).unwrap()));
//!
//! let mut deleted = delete_file(&dst);
//! assert!(deleted.evaluate(|| std::fs::remove_file(&dst).unwrap()));
//! assert_eq!(deleted.success_message(), format!("File {} was deleted", dst.display()));
//! ```

mod expectation;
mod messages;
mod mode;
mod outcome;

pub use expectation::{Expectation, TransferOptions};
pub use mode::Mode;
pub use outcome::{Outcome, Violation};

use crate::errors::Result;
use std::path::PathBuf;

/// Expect `source` to be moved. Without a target in `options` this reads as
/// a delete in messages.
pub fn move_file(source: impl Into<PathBuf>, options: TransferOptions) -> Expectation {
    Expectation::unchecked(source.into(), Mode::Move, options)
}

/// Expect `source` to be copied; `options.target` is required.
pub fn copy_file(source: impl Into<PathBuf>, options: TransferOptions) -> Result<Expectation> {
    Expectation::new(source, Mode::Copy, options)
}

/// Expect `source` to be deleted.
pub fn delete_file(source: impl Into<PathBuf>) -> Expectation {
    Expectation::unchecked(source.into(), Mode::Delete, TransferOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransferCheckError;

    #[test]
    fn constructors_set_mode() {
        assert_eq!(move_file("/a", TransferOptions::to("/b")).mode(), Mode::Move);
        assert_eq!(copy_file("/a", TransferOptions::to("/b")).unwrap().mode(), Mode::Copy);
        let d = delete_file("/a");
        assert_eq!(d.mode(), Mode::Delete);
        assert_eq!(d.target(), None);
        assert!(!d.overwrite());
    }

    #[test]
    fn copy_requires_target() {
        let err = copy_file("/a", TransferOptions::default()).unwrap_err();
        assert_eq!(err.code(), "missing_target");
        assert!(matches!(err, TransferCheckError::MissingTarget(_)));
    }

    #[test]
    fn overwrite_is_carried() {
        let e = copy_file("/a", TransferOptions::to("/b").overwrite(true)).unwrap();
        assert!(e.overwrite());
        assert_eq!(e.source(), std::path::Path::new("/a"));
    }
}

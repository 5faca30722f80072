//! Core library for `transfer_check`.
//!
//! Checks that an action really moved, copied or deleted a file: the source
//! is probed before the action, the action runs, and source and target are
//! probed again. Violations come back as values with a readable message;
//! the checker itself never changes the filesystem.
//!
//! ```
//! use transfer_check::prelude::*;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let src = dir.path().join("report.csv");
//! let dst = dir.path().join("report.csv.bak");
//! std::fs::write(&src, "a,b").unwrap();
//!
//! let mut check = copy_file(&src, TransferOptions::to(&dst)).unwrap();
//! let copied = check.evaluate(|| {
//!     std::fs::copy(&src, &dst).unwrap();
//! });
//! assert!(copied, "{}", check.failure_message().unwrap_or_default());
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod expect;
pub mod output;
pub mod probe;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use config::{Config, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use errors::TransferCheckError;
pub use expect::{
    Expectation, Mode, Outcome, TransferOptions, Violation, copy_file, delete_file, move_file,
};
pub use probe::{ExistenceProbe, LocalFs};

/// Convenience prelude for test suites.
pub mod prelude {
    pub use crate::errors::{Result as TCResult, TransferCheckError};
    pub use crate::expect::{
        Expectation, Mode, Outcome, TransferOptions, Violation, copy_file, delete_file, move_file,
    };
    pub use crate::probe::{ExistenceProbe, LocalFs};
}

//! Typed error definitions for transfer_check.
//! These are configuration and launch failures only; a transfer that did not
//! happen is an `Outcome`, not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferCheckError {
    #[error("A target must be given in copy mode (source: {0})")]
    MissingTarget(PathBuf),

    #[error("A delete takes no target (source: {0})")]
    UnexpectedTarget(PathBuf),

    #[error("No action command given; pass it after `--`")]
    EmptyAction,

    #[error("Failed to launch action '{program}': {source}")]
    ActionSpawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl TransferCheckError {
    /// Stable machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            TransferCheckError::MissingTarget(_) => "missing_target",
            TransferCheckError::UnexpectedTarget(_) => "unexpected_target",
            TransferCheckError::EmptyAction => "empty_action",
            TransferCheckError::ActionSpawn { .. } => "action_spawn",
        }
    }
}

pub type Result<T> = std::result::Result<T, TransferCheckError>;

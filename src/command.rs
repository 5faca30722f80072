//! External command used as the action by the CLI.

use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use tracing::{debug, warn};

use crate::errors::{Result, TransferCheckError};

/// Run `argv[0]` with the remaining arguments, no shell, and wait for it.
///
/// A non-zero exit is logged and returned, not treated as an error: the
/// verdict comes from the filesystem alone.
pub fn run_action(argv: &[OsString]) -> Result<ExitStatus> {
    let (program, args) = argv.split_first().ok_or(TransferCheckError::EmptyAction)?;
    debug!(program = %program.to_string_lossy(), args = ?args, "launching action");

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| TransferCheckError::ActionSpawn {
            program: program.to_string_lossy().into_owned(),
            source,
        })?;

    if !status.success() {
        warn!(program = %program.to_string_lossy(), %status, "action exited unsuccessfully");
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argv_is_an_error() {
        let err = run_action(&[]).unwrap_err();
        assert!(matches!(err, TransferCheckError::EmptyAction));
    }

    #[test]
    fn unknown_program_fails_to_launch() {
        let err = run_action(&[OsString::from("transfer-check-no-such-program")]).unwrap_err();
        assert_eq!(err.code(), "action_spawn");
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_returned() {
        assert!(run_action(&[OsString::from("true")]).unwrap().success());
        assert!(!run_action(&[OsString::from("false")]).unwrap().success());
    }
}

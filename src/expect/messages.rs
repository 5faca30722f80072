//! Message rendering.
//!
//! Wording depends on the shape of the transfer rather than on the raw mode:
//! a non-copy expectation with a target reads as a move, one without a target
//! reads as a delete.

use std::path::Path;

use super::mode::Mode;
use super::outcome::Violation;

/// What the caller asked to happen, with the target where one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape<'a> {
    Copied(&'a Path),
    Moved(&'a Path),
    Deleted,
}

impl<'a> Shape<'a> {
    pub(crate) fn of(mode: Mode, target: Option<&'a Path>) -> Self {
        match (mode, target) {
            (Mode::Copy, Some(t)) => Shape::Copied(t),
            (_, Some(t)) => Shape::Moved(t),
            // copy without a target is rejected at construction
            (_, None) => Shape::Deleted,
        }
    }
}

/// Failure text for `violation`, or `None` when the pairing cannot arise.
pub(crate) fn failure(shape: Shape<'_>, violation: Violation, source: &Path) -> Option<String> {
    let s = source.display();
    let msg = match (violation, shape) {
        (Violation::SourceMissing, Shape::Deleted) => {
            format!("File {s} could not be deleted, as it does not exist")
        }
        (Violation::SourceMissing, Shape::Moved(_)) => {
            format!("File {s} could not be moved, as it does not exist")
        }
        (Violation::SourceMissing, Shape::Copied(_)) => {
            format!("File {s} could not be copied, as it does not exist")
        }
        (Violation::TargetAlreadyExists, Shape::Moved(t)) => {
            format!("File {s} could not be moved, as target {} already exists", t.display())
        }
        (Violation::TargetAlreadyExists, Shape::Copied(t)) => {
            format!("File {s} could not be copied, as target {} already exists", t.display())
        }
        (Violation::TargetMissing, Shape::Moved(t)) => {
            format!("File {s} should have been moved to {}, but target wasn't created", t.display())
        }
        (Violation::TargetMissing, Shape::Copied(t)) => {
            format!("File {s} should have been copied to {}, but target wasn't created", t.display())
        }
        (Violation::SourceStillExists, Shape::Moved(_)) => {
            format!("File {s} should have been moved, but source file still exists")
        }
        (Violation::SourceStillExists, Shape::Deleted) => {
            format!("File {s} should have been deleted, but source file still exists")
        }
        (Violation::TargetAlreadyExists | Violation::TargetMissing, Shape::Deleted)
        | (Violation::SourceStillExists, Shape::Copied(_)) => return None,
    };
    Some(msg)
}

/// Text describing the transfer as done.
pub(crate) fn success(shape: Shape<'_>, source: &Path) -> String {
    let s = source.display();
    match shape {
        Shape::Copied(t) => format!("File {s} was copied to {}", t.display()),
        Shape::Moved(t) => format!("File {s} was moved to {}", t.display()),
        Shape::Deleted => format!("File {s} was deleted"),
    }
}

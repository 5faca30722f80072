//! Evaluation results.

use std::fmt;

/// The way an expectation failed. Checks run in declaration order and the
/// first one that fails is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Source did not exist before the action ran.
    SourceMissing,
    /// Target existed before the action ran and overwrite was off.
    TargetAlreadyExists,
    /// Target did not exist after the action ran.
    TargetMissing,
    /// Source still existed after a move or delete.
    SourceStillExists,
}

impl Violation {
    /// Stable snake_case code for structured logs.
    pub fn code(self) -> &'static str {
        match self {
            Violation::SourceMissing => "source_missing",
            Violation::TargetAlreadyExists => "target_already_exists",
            Violation::TargetMissing => "target_missing",
            Violation::SourceStillExists => "source_still_exists",
        }
    }

    /// True for violations detected before the action runs.
    pub fn is_precondition(self) -> bool {
        matches!(self, Violation::SourceMissing | Violation::TargetAlreadyExists)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// State of an expectation. Moves out of `Unevaluated` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Unevaluated,
    Satisfied,
    Violated(Violation),
}

impl Outcome {
    pub fn violation(self) -> Option<Violation> {
        match self {
            Outcome::Violated(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_satisfied(self) -> bool {
        matches!(self, Outcome::Satisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preconditions_are_the_first_two_kinds() {
        assert!(Violation::SourceMissing.is_precondition());
        assert!(Violation::TargetAlreadyExists.is_precondition());
        assert!(!Violation::TargetMissing.is_precondition());
        assert!(!Violation::SourceStillExists.is_precondition());
    }

    #[test]
    fn outcome_defaults_to_unevaluated() {
        let o = Outcome::default();
        assert_eq!(o, Outcome::Unevaluated);
        assert_eq!(o.violation(), None);
        assert!(!o.is_satisfied());
        assert_eq!(
            Outcome::Violated(Violation::TargetMissing).violation(),
            Some(Violation::TargetMissing)
        );
    }
}

//! The transfer expectation: check, act, check again.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::messages::{self, Shape};
use super::mode::Mode;
use super::outcome::{Outcome, Violation};
use crate::errors::{Result, TransferCheckError};
use crate::probe::{ExistenceProbe, LocalFs};

/// Optional knobs for an expectation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferOptions {
    /// Where the file should end up. Required for copies.
    pub target: Option<PathBuf>,
    /// Accept a target that already exists before the action.
    pub overwrite: bool,
}

impl TransferOptions {
    /// Options with a target and overwrite off.
    pub fn to(target: impl Into<PathBuf>) -> Self {
        Self {
            target: Some(target.into()),
            overwrite: false,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// A single-use check that an action moved, copied or deleted `source`.
///
/// Construct it, call [`evaluate`](Self::evaluate) once with the action under
/// test, then read the verdict and messages. Nothing here touches the disk
/// except existence checks through the probe `P`.
#[derive(Debug, Clone)]
pub struct Expectation<P = LocalFs> {
    source: PathBuf,
    target: Option<PathBuf>,
    mode: Mode,
    overwrite: bool,
    outcome: Outcome,
    evaluated: bool,
    probe: P,
}

impl Expectation<LocalFs> {
    /// Build an expectation checked against the local filesystem.
    ///
    /// Fails with [`TransferCheckError::MissingTarget`] when `mode` is
    /// [`Mode::Copy`] and no target was given, and with
    /// [`TransferCheckError::UnexpectedTarget`] when `mode` is [`Mode::Delete`]
    /// and one was.
    pub fn new(source: impl Into<PathBuf>, mode: Mode, options: TransferOptions) -> Result<Self> {
        let source = source.into();
        match (mode, options.target.is_some()) {
            (Mode::Copy, false) => return Err(TransferCheckError::MissingTarget(source)),
            (Mode::Delete, true) => return Err(TransferCheckError::UnexpectedTarget(source)),
            _ => {}
        }
        Ok(Self::unchecked(source, mode, options))
    }

    /// Caller guarantees a copy carries a target and a delete does not.
    pub(super) fn unchecked(source: PathBuf, mode: Mode, options: TransferOptions) -> Self {
        Self {
            source,
            target: options.target,
            mode,
            overwrite: options.overwrite,
            outcome: Outcome::Unevaluated,
            evaluated: false,
            probe: LocalFs,
        }
    }
}

impl<P: ExistenceProbe> Expectation<P> {
    /// Swap the existence probe.
    pub fn with_probe<Q: ExistenceProbe>(self, probe: Q) -> Expectation<Q> {
        Expectation {
            source: self.source,
            target: self.target,
            mode: self.mode,
            overwrite: self.overwrite,
            outcome: self.outcome,
            evaluated: self.evaluated,
            probe,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn violation(&self) -> Option<Violation> {
        self.outcome.violation()
    }

    pub fn is_satisfied(&self) -> bool {
        self.outcome.is_satisfied()
    }

    /// Run `action` between the pre- and postcondition checks.
    ///
    /// Returns true when the filesystem ends up as the mode requires. A panic
    /// inside `action` unwinds through this call unchanged.
    pub fn evaluate<F: FnOnce()>(&mut self, action: F) -> bool {
        match self.try_evaluate(|| Ok::<(), Infallible>(action())) {
            Ok(verdict) => verdict,
            Err(never) => match never {},
        }
    }

    /// Like [`evaluate`](Self::evaluate) for fallible actions.
    ///
    /// An `Err` from `action` is handed back as is and no outcome is recorded;
    /// only filesystem state is classified.
    pub fn try_evaluate<F, E>(&mut self, action: F) -> std::result::Result<bool, E>
    where
        F: FnOnce() -> std::result::Result<(), E>,
    {
        if self.evaluated {
            warn!(
                source = %self.source.display(),
                mode = %self.mode,
                "expectation already evaluated; returning the recorded verdict"
            );
            return Ok(self.outcome.is_satisfied());
        }
        self.evaluated = true;

        if let Some(v) = self.check_before() {
            return Ok(self.record(Outcome::Violated(v)));
        }

        debug!(source = %self.source.display(), mode = %self.mode, "running action");
        action()?;

        let outcome = match self.check_after() {
            Some(v) => Outcome::Violated(v),
            None => Outcome::Satisfied,
        };
        Ok(self.record(outcome))
    }

    fn check_before(&self) -> Option<Violation> {
        debug!(source = %self.source.display(), "checking source exists");
        if !self.probe.exists(&self.source) {
            return Some(Violation::SourceMissing);
        }
        if let Some(target) = self.target.as_deref()
            && !self.overwrite
            && self.probe.exists(target)
        {
            return Some(Violation::TargetAlreadyExists);
        }
        None
    }

    fn check_after(&self) -> Option<Violation> {
        if let Some(target) = self.target.as_deref()
            && !self.probe.exists(target)
        {
            return Some(Violation::TargetMissing);
        }
        if !self.mode.keeps_source() && self.probe.exists(&self.source) {
            return Some(Violation::SourceStillExists);
        }
        None
    }

    fn record(&mut self, outcome: Outcome) -> bool {
        self.outcome = outcome;
        match outcome {
            Outcome::Violated(v) => info!(
                source = %self.source.display(),
                dest = ?self.target,
                mode = %self.mode,
                violation = v.code(),
                action_ran = !v.is_precondition(),
                "transfer expectation violated"
            ),
            _ => info!(
                source = %self.source.display(),
                dest = ?self.target,
                mode = %self.mode,
                "transfer expectation satisfied"
            ),
        }
        outcome.is_satisfied()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::of(self.mode, self.target.as_deref())
    }

    /// Why the expectation failed. `None` before evaluation or on success.
    pub fn failure_message(&self) -> Option<String> {
        let v = self.outcome.violation()?;
        messages::failure(self.shape(), v, &self.source)
    }

    /// The transfer described as done. Used when a negated assertion fails.
    pub fn success_message(&self) -> String {
        messages::success(self.shape(), &self.source)
    }

    /// Evaluate and panic with the failure message unless satisfied.
    #[track_caller]
    pub fn assert_performed<F: FnOnce()>(mut self, action: F) {
        if !self.evaluate(action) {
            panic!("{}", self.failure_message().unwrap_or_default());
        }
    }

    /// Evaluate and panic with the success message if the transfer happened.
    #[track_caller]
    pub fn assert_not_performed<F: FnOnce()>(mut self, action: F) {
        if self.evaluate(action) {
            panic!("{}", self.success_message());
        }
    }
}

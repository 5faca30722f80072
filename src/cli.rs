//! CLI definition and parsing.
//!
//! Notes:
//! - The action is everything after `--` and is run without a shell.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, Subcommand, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::errors::Result;
use crate::expect::{Expectation, Mode, TransferOptions};

/// Check that a command moved, copied or deleted a file.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Run a command and check that it moved, copied or deleted a file"
)]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true, overrides_with = "no_json", help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Emit compact text logs even if the config enables JSON.
    #[arg(long, global = true, overrides_with = "json")]
    pub no_json: bool,

    /// Also append logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Print the config file location and exit.
    #[arg(long, help = "Print the config file location used by transfer_check and exit")]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<TransferCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TransferCommand {
    /// Expect SOURCE to disappear and TARGET (if given) to appear.
    Move(TransferArgs),
    /// Expect TARGET to appear while SOURCE stays.
    Copy(TransferArgs),
    /// Expect SOURCE to disappear.
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct TransferArgs {
    #[arg(value_name = "SOURCE", value_hint = ValueHint::AnyPath)]
    pub source: PathBuf,

    #[arg(long = "to", short = 't', value_name = "TARGET", value_hint = ValueHint::AnyPath)]
    pub target: Option<PathBuf>,

    /// Accept a TARGET that already exists.
    #[arg(long, overrides_with = "no_overwrite")]
    pub overwrite: bool,

    /// Refuse an existing TARGET even if the config enables overwrite.
    #[arg(long, overrides_with = "overwrite")]
    pub no_overwrite: bool,

    /// Succeed only if the transfer did NOT happen.
    #[arg(long)]
    pub negate: bool,

    /// Command to run, given after `--`.
    #[arg(last = true, value_name = "ACTION")]
    pub action: Vec<OsString>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DeleteArgs {
    #[arg(value_name = "SOURCE", value_hint = ValueHint::AnyPath)]
    pub source: PathBuf,

    /// Succeed only if SOURCE was NOT deleted.
    #[arg(long)]
    pub negate: bool,

    /// Command to run, given after `--`.
    #[arg(last = true, value_name = "ACTION")]
    pub action: Vec<OsString>,
}

impl TransferArgs {
    /// The overwrite choice made on the command line, if any. The last of
    /// `--overwrite` and `--no-overwrite` wins.
    pub fn overwrite_flag(&self) -> Option<bool> {
        match (self.overwrite, self.no_overwrite) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl TransferCommand {
    pub fn mode(&self) -> Mode {
        match self {
            TransferCommand::Move(_) => Mode::Move,
            TransferCommand::Copy(_) => Mode::Copy,
            TransferCommand::Delete(_) => Mode::Delete,
        }
    }

    /// Build the expectation. `--overwrite`/`--no-overwrite` win over the config default.
    pub fn expectation(&self, cfg: &Config) -> Result<Expectation> {
        let (source, options) = match self {
            TransferCommand::Move(a) | TransferCommand::Copy(a) => (
                a.source.clone(),
                TransferOptions {
                    target: a.target.clone(),
                    overwrite: a.overwrite_flag().unwrap_or(cfg.overwrite),
                },
            ),
            TransferCommand::Delete(a) => (a.source.clone(), TransferOptions::default()),
        };
        Expectation::new(source, self.mode(), options)
    }

    pub fn action(&self) -> &[OsString] {
        match self {
            TransferCommand::Move(a) | TransferCommand::Copy(a) => &a.action,
            TransferCommand::Delete(a) => &a.action,
        }
    }

    pub fn negate(&self) -> bool {
        match self {
            TransferCommand::Move(a) | TransferCommand::Copy(a) => a.negate,
            TransferCommand::Delete(a) => a.negate,
        }
    }
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.json {
            cfg.json = true;
        } else if self.no_json {
            cfg.json = false;
        }
        if let Some(p) = &self.log_file {
            cfg.log_file = Some(p.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

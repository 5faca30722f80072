//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the expectation, runs the
//! action command and reports the verdict.

use anyhow::{Result, bail};
use std::process::ExitCode;
use tracing::{debug, error};

use transfer_check::cli::Args;
use transfer_check::config::{CONFIG_ENV, load_config};
use transfer_check::output as out;
use transfer_check::{TransferCheckError, command, default_config_path};

use crate::logging::init_tracing;

/// Run the CLI. Exit 0 when the verdict is what was asked for, 1 otherwise.
pub fn run(args: Args) -> Result<ExitCode> {
    if args.print_config {
        print_config_location();
        return Ok(ExitCode::SUCCESS);
    }

    let Some(cmd) = args.command.as_ref() else {
        bail!("no transfer given; use one of: move, copy, delete (see --help)");
    };

    let mut cfg = load_config()?;
    args.apply_overrides(&mut cfg);

    // held until return so the file appender flushes
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), cfg.json)?;
    debug!(?args, "starting transfer_check");

    let mut expectation = cmd.expectation(&cfg).inspect_err(|e| log_error(e))?;
    if cmd.action().is_empty() {
        let e = TransferCheckError::EmptyAction;
        log_error(&e);
        return Err(e.into());
    }

    let verdict = expectation
        .try_evaluate(|| command::run_action(cmd.action()).map(|_| ()))
        .inspect_err(|e| log_error(e))?;

    let passed = if cmd.negate() { !verdict } else { verdict };
    let msg = if verdict {
        expectation.success_message()
    } else {
        expectation.failure_message().unwrap_or_default()
    };
    if passed {
        out::print_pass(&msg);
        Ok(ExitCode::SUCCESS)
    } else {
        out::print_fail(&msg);
        Ok(ExitCode::FAILURE)
    }
}

fn log_error(e: &TransferCheckError) {
    error!(code = e.code(), error = %e, "transfer check aborted");
}

fn print_config_location() {
    if let Some(p) = std::env::var_os(CONFIG_ENV)
        && !p.is_empty()
    {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit): {}", p.to_string_lossy()));
        return;
    }
    match default_config_path() {
        Some(p) if p.exists() => out::print_info(&format!("Config file: {}", p.display())),
        Some(p) => out::print_info(&format!("Config file (not present, defaults in use): {}", p.display())),
        None => out::print_info("No config directory could be determined; defaults in use."),
    }
}

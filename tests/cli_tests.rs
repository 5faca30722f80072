use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use transfer_check::cli::{Args, TransferCommand};
use transfer_check::config::types::{Config, LogLevel};
use transfer_check::{Mode, TransferCheckError};

#[test]
fn move_parses_target_and_action() {
    let args = Args::parse_from([
        "transfer_check", "move", "/tmp/x", "--to", "/tmp/x.bak", "--", "mv", "/tmp/x", "/tmp/x.bak",
    ]);
    let cmd = args.command.expect("subcommand");
    assert_eq!(cmd.mode(), Mode::Move);
    assert_eq!(
        cmd.action(),
        &[OsString::from("mv"), OsString::from("/tmp/x"), OsString::from("/tmp/x.bak")]
    );
    assert!(!cmd.negate());

    let e = cmd.expectation(&Config::default()).unwrap();
    assert_eq!(e.source(), Path::new("/tmp/x"));
    assert_eq!(e.target(), Some(Path::new("/tmp/x.bak")));
    assert!(!e.overwrite());
}

#[test]
fn copy_without_target_is_a_configuration_error() {
    let args = Args::parse_from(["transfer_check", "copy", "/tmp/x", "--", "true"]);
    let cmd = args.command.unwrap();
    let err = cmd.expectation(&Config::default()).unwrap_err();
    assert!(matches!(err, TransferCheckError::MissingTarget(p) if p == PathBuf::from("/tmp/x")));
}

#[test]
fn overwrite_comes_from_flag_or_config() {
    let args = Args::parse_from(["transfer_check", "copy", "a", "-t", "b", "--overwrite"]);
    let cmd = args.command.unwrap();
    assert!(cmd.expectation(&Config::default()).unwrap().overwrite());

    let args = Args::parse_from(["transfer_check", "copy", "a", "-t", "b"]);
    let cmd = args.command.unwrap();
    let cfg = Config { overwrite: true, ..Config::default() };
    assert!(cmd.expectation(&cfg).unwrap().overwrite());
}

#[test]
fn no_overwrite_beats_config() {
    let cfg = Config { overwrite: true, ..Config::default() };

    let args = Args::parse_from(["transfer_check", "move", "a", "-t", "b", "--no-overwrite"]);
    assert!(!args.command.unwrap().expectation(&cfg).unwrap().overwrite());

    let args = Args::parse_from(["transfer_check", "move", "a", "-t", "b", "--overwrite", "--no-overwrite"]);
    assert!(!args.command.unwrap().expectation(&cfg).unwrap().overwrite());

    let args = Args::parse_from(["transfer_check", "move", "a", "-t", "b", "--no-overwrite", "--overwrite"]);
    assert!(args.command.unwrap().expectation(&Config::default()).unwrap().overwrite());
}

#[test]
fn delete_with_target_option_is_not_accepted() {
    assert!(Args::try_parse_from(["transfer_check", "delete", "a", "--to", "b"]).is_err());
}

#[test]
fn no_json_beats_config() {
    let args = Args::parse_from(["transfer_check", "delete", "a", "--no-json"]);
    let mut cfg = Config { json: true, ..Config::default() };
    args.apply_overrides(&mut cfg);
    assert!(!cfg.json);

    let args = Args::parse_from(["transfer_check", "delete", "a"]);
    let mut cfg = Config { json: true, ..Config::default() };
    args.apply_overrides(&mut cfg);
    assert!(cfg.json, "unset flags leave the config value alone");
}

#[test]
fn delete_ignores_config_overwrite() {
    let args = Args::parse_from(["transfer_check", "delete", "a", "--negate", "--", "rm", "a"]);
    let cmd = args.command.unwrap();
    assert!(matches!(cmd, TransferCommand::Delete(_)));
    assert!(cmd.negate());
    let cfg = Config { overwrite: true, ..Config::default() };
    let e = cmd.expectation(&cfg).unwrap();
    assert!(!e.overwrite());
    assert_eq!(e.target(), None);
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["transfer_check", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));

    let args = Args::parse_from(["transfer_check", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["transfer_check"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn global_flags_after_subcommand() {
    let args = Args::parse_from(["transfer_check", "delete", "a", "--json", "--log-file", "/tmp/t.log"]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert!(cfg.json);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/t.log")));
    assert_eq!(cfg.log_level, LogLevel::Normal);
}

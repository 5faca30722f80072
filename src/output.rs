//! User-facing lines for the CLI. Colors only when stdout is a terminal.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {msg}");
    }
}

/// Verdict line for a satisfied check.
pub fn print_pass(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {msg}");
    }
}

/// Verdict line for a failed check. Goes to stdout with the passing line so
/// scripts read one stream.
pub fn print_fail(msg: &str) {
    if is_tty() {
        println!("{} {}", "failed:".red().bold(), msg);
    } else {
        println!("failed: {msg}");
    }
}

pub fn print_error(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {msg}");
    }
}

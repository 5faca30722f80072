use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = transfer_check::cli::parse();
    match app::run(args) {
        Ok(code) => code,
        Err(e) => {
            transfer_check::output::print_error(&format!("{e:#}"));
            ExitCode::from(2)
        }
    }
}

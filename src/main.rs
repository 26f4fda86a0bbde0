use std::process::ExitCode;

use swap_names::errors::exit_code;
use swap_names::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = swap_names::cli::parse();
    match app::run(args) {
        Ok(code) => code,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            ExitCode::from(exit_code::UNEXPECTED)
        }
    }
}

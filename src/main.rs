//! docnav - inspect documentation site navigation configs.

mod cli;

use clap::{ColorChoice, Parser};
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    docnav::logger::set_verbose(cli.verbose);

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

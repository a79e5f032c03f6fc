#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;

use chirp::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("chirp: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("chirp:   caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

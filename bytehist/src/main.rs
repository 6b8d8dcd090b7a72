//! # bytehist
//!
//! A CLI tool that shows how often each byte value occurs in a file.
//!
//! ## Overview
//!
//! bytehist is built on top of bytehistlib. It reads the input file, counts
//! every byte and prints an ASCII bar graph followed by a frequency table.
//!
//! ## Usage
//!
//! ```bash
//! # Graph and table, 80 columns wide
//! bytehist firmware.bin
//!
//! # Most frequent bytes first, graph only, 120 columns
//! bytehist -s -g -l 120 firmware.bin
//!
//! # Table only
//! bytehist -t firmware.bin
//! ```
//!
//! ## Exit codes
//!
//! | Code | Meaning                       |
//! |------|-------------------------------|
//! | 0    | success                       |
//! | 1    | missing input file argument   |
//! | 2    | help requested or bad option  |
//! | 3    | input cannot be opened        |
//! | 4    | input cannot be stat'd        |
//! | 5    | input cannot be read          |
//!
//! Set `BYTEHIST_LOG_LEVEL` (e.g. `debug`) to get diagnostics on stderr.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use bytehistlib::{render_file, HistogramError};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

use crate::cli::CommandLineArgs;

fn init_tracing_subscriber() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(format!(
            "{}_LOG_LEVEL",
            env!("CARGO_PKG_NAME").to_uppercase()
        ))
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}

/// Write the rendered text to stdout.
///
/// A reader that goes away early (`bytehist big.bin | head`) is not an error.
fn write_stdout(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    match out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Process exit code for a failed run.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<HistogramError>()
        .map(HistogramError::exit_code)
        .unwrap_or(1)
}

fn run(args: &CommandLineArgs) -> Result<()> {
    tracing::debug!(input = %args.input.display(), options = ?args.options, "starting");

    let output = render_file(&args.input, &args.options)?;
    write_stdout(&output)
}

fn main() -> ExitCode {
    init_tracing_subscriber();

    let args = match CommandLineArgs::parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(exit) => {
            if exit.to_stdout {
                print!("{}", exit.message);
            } else {
                eprint!("{}", exit.message);
            }
            return ExitCode::from(exit.code);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

//! High-level orchestration of one split run.

use std::io;

use split_core::{ChunkWriter, Result, SplitSummary};

use crate::config::CliConfig;
use crate::error::InvocationError;
use crate::io::open_input;

/// Splits the configured input into files in the current directory.
///
/// 1. Prints the resolved settings when `debug` is set
/// 2. Opens the input file (or stdin)
/// 3. Streams it through a [`ChunkWriter`]
///
/// # Errors
///
/// Returns the first engine failure: the input cannot be opened or read, an
/// output file exists or cannot be written, or the suffixes run out.
pub fn process_input(config: &CliConfig) -> Result<SplitSummary> {
    if config.debug {
        eprintln!("{}", config.split);
    }

    let input = open_input(config.split.input.as_deref())?;

    ChunkWriter::new(&config.split)
        .with_verbose(config.verbose)
        .write(input)
}

/// Runs one invocation and attaches the program name to any failure.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`InvocationError`]; format it with
/// [`crate::format_error_for_stderr`].
pub fn run_cli(config: &CliConfig, program: &str) -> io::Result<SplitSummary> {
    process_input(config).map_err(|source| {
        io::Error::from(InvocationError {
            program: program.to_string(),
            source,
        })
    })
}

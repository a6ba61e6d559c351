//! Split a file into pieces
//!
//! A Rust implementation of the split utility: cuts a file or standard input
//! into numbered pieces by line count or byte count.

use std::process;

mod opts;

use opts::SplitOpts;

use split_cli::{format_error_for_stderr, run_cli, usage_hint};

const PROGRAM_NAME: &str = "split";

fn main() -> std::io::Result<()> {
    let opts = SplitOpts::parse();

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            if let Some(hint) = usage_hint(PROGRAM_NAME, &err) {
                eprintln!("{hint}");
            }
            process::exit(1);
        }
    };

    if let Err(err) = run_cli(&config, PROGRAM_NAME) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }

    Ok(())
}

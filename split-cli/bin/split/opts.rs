//! Command line argument parsing for the split utility.

use clap::Parser;

use split_cli::CliConfig;
use split_core::options;

/// Split a file into pieces
///
/// Writes fixed-size pieces of FILE (standard input when absent) to
/// PREFIX00, PREFIX01, ... The default is 1000 lines per piece and the
/// prefix `x`.
#[derive(Debug, Parser)]
#[command(
    name = "split",
    version,
    about = "Split a file into pieces",
    override_usage = "split [--verbose] [--debug] [-l LINES | -b BYTES[k|m]] [-a SUFFIX_LENGTH] [FILE [PREFIX]]",
    after_help = "Split options:\n  \
                  -a N          use suffixes of N digits (default 2)\n  \
                  -b N[k|m]     put N bytes per output file (k = 1024, m = 1038576)\n  \
                  -l N          put N lines per output file (default 1000)\n\n\
                  Long options must come before split options and operands."
)]
pub struct SplitOpts {
    /// Print a diagnostic just before each output file is opened
    #[arg(long)]
    verbose: bool,

    /// Print the resolved split settings before splitting
    #[arg(long)]
    debug: bool,

    /// Split options and operands, resolved after clap is done
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

impl SplitOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    ///
    /// # Errors
    ///
    /// Returns the option resolver's error for malformed split options or
    /// operands.
    pub fn config(&self) -> split_core::Result<CliConfig> {
        Ok(CliConfig {
            split: options::resolve(&self.args)?,
            verbose: self.verbose,
            debug: self.debug,
        })
    }
}

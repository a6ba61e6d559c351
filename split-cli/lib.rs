//! Command-line front-end for the `split` utility.
//!
//! Wraps [`split_core`] with input opening, diagnostics and error formatting.
//! Binaries parse their flags, build a [`CliConfig`] and hand it to
//! [`run_cli`].

mod config;
mod error;
mod io;
mod process;


pub use config::{CliConfig, DEFAULT_BUFFER_SIZE};
pub use error::{format_error_for_stderr, usage_hint, InvocationError};
pub use io::open_input;
pub use process::{process_input, run_cli};

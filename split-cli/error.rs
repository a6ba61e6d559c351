//! Error reporting for the `split` command line.

use std::io;

use thiserror::Error;

/// A failed invocation, tagged with the program name for stderr output.
#[derive(Debug, Error)]
#[error("{program}: {source}")]
pub struct InvocationError {
    /// Program name to prefix in error output
    pub program: String,
    /// Underlying engine failure
    pub source: split_core::Error,
}

impl From<InvocationError> for io::Error {
    fn from(err: InvocationError) -> Self {
        io::Error::new(err.source.kind(), err)
    }
}

/// Formats an error returned by [`crate::run_cli`] as a single stderr line.
///
/// Errors carrying an [`InvocationError`] already hold the program prefix;
/// anything else gets `program` prepended.
pub fn format_error_for_stderr(program: &str, err: &io::Error) -> String {
    match err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>())
    {
        Some(run_err) => run_err.to_string(),
        None => format!("{program}: {err}"),
    }
}

/// Returns the usage hint printed after argument errors.
pub fn usage_hint(program: &str, err: &split_core::Error) -> Option<String> {
    err.is_usage()
        .then(|| format!("Try '{program} --help' for more information."))
}

//! Error types for option resolution and chunk writing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a split invocation can fail.
///
/// All variants are fatal. Output files that were completed before the failure
/// stay on disk.
#[derive(Debug, Error)]
pub enum Error {
    /// Both `-l` and `-b` were given, or one of them was repeated
    #[error("cannot split in more than one way")]
    ConflictingMode,

    /// An option flag was the last token
    #[error("option requires an argument -- '{option}'")]
    MissingOptionArgument {
        /// Option letter without the leading dash
        option: char,
    },

    /// `-a` value is not a positive decimal integer
    #[error("invalid suffix length: '{value}'")]
    InvalidSuffixLength {
        /// Raw value token
        value: String,
    },

    /// `-l` value is not a positive decimal integer
    #[error("invalid number of lines: '{value}'")]
    InvalidLineCount {
        /// Raw value token
        value: String,
    },

    /// `-b` value is not `N`, `Nk` or `Nm`
    #[error("invalid number of bytes: '{value}'")]
    InvalidByteSpec {
        /// Raw value token
        value: String,
    },

    /// Token is neither an option, an option value, nor a valid operand
    #[error("invalid operand '{operand}'")]
    InvalidOperand {
        /// Offending token
        operand: String,
    },

    /// More than two operands were given
    #[error("extra operand '{operand}'")]
    ExtraOperand {
        /// First operand past the output prefix
        operand: String,
    },

    /// The chunk counter no longer fits into the suffix width
    #[error("output file suffixes exhausted (suffix length {suffix_length})")]
    SuffixSpaceExhausted {
        /// Configured suffix width
        suffix_length: usize,
    },

    /// Target output file is already present
    #[error("{}: File exists", path.display())]
    OutputFileExists {
        /// Path of the existing file
        path: PathBuf,
    },

    /// Output file could not be created for a reason other than a collision
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing or flushing an output file failed
    #[error("{}: write error: {source}", path.display())]
    WriteOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Input file does not exist
    #[error("cannot open '{path}' for reading: No such file or directory")]
    InputNotFound {
        /// Input path as given
        path: String,
    },

    /// Input could not be opened or read
    #[error("{path}: read error: {source}")]
    InputReadError {
        /// Input path as given, `-` for stdin
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` for failures detected while interpreting arguments,
    /// before any file was touched.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::ConflictingMode
                | Error::MissingOptionArgument { .. }
                | Error::InvalidSuffixLength { .. }
                | Error::InvalidLineCount { .. }
                | Error::InvalidByteSpec { .. }
                | Error::InvalidOperand { .. }
                | Error::ExtraOperand { .. }
        )
    }

    /// Closest [`io::ErrorKind`] for this failure. I/O-backed variants keep
    /// the kind of their source.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::OutputFileExists { .. } => io::ErrorKind::AlreadyExists,
            Error::InputNotFound { .. } => io::ErrorKind::NotFound,
            Error::SuffixSpaceExhausted { .. } => io::ErrorKind::Other,
            Error::CreateOutput { source, .. }
            | Error::WriteOutput { source, .. }
            | Error::InputReadError { source, .. } => source.kind(),
            Error::ConflictingMode
            | Error::MissingOptionArgument { .. }
            | Error::InvalidSuffixLength { .. }
            | Error::InvalidLineCount { .. }
            | Error::InvalidByteSpec { .. }
            | Error::InvalidOperand { .. }
            | Error::ExtraOperand { .. } => io::ErrorKind::InvalidInput,
        }
    }
}

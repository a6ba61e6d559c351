//! Configuration types and constants for split operations.

use std::fmt;
use std::num::{NonZeroU64, NonZeroUsize};
use std::path::PathBuf;

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Number of lines per output file when no mode is selected
pub const DEFAULT_LINES_PER_FILE: NonZeroU64 = match NonZeroU64::new(1000) {
    Some(lines) => lines,
    None => unreachable!(),
};

/// Number of suffix digits when `-a` is not given
pub const DEFAULT_SUFFIX_LENGTH: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(length) => length,
    None => unreachable!(),
};

/// Largest accepted `-a` value. A wider suffix cannot fit a file name on
/// common filesystems.
pub const MAX_SUFFIX_LENGTH: usize = 255;

/// Output file name prefix when no second operand is given
pub const DEFAULT_OUTPUT_PREFIX: &str = "x";

/// Multiplier for the `k` byte-spec suffix
pub const KILOBYTE: u64 = 1024;

/// Multiplier for the `m` byte-spec suffix. Not 2^20; existing split sizes
/// depend on this exact value.
pub const MEGABYTE: u64 = 1_038_576;

/// How the input is cut into chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Each output file holds `chunk_size` lines
    Lines,
    /// Each output file holds `chunk_size` bytes
    Bytes,
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::Lines => f.write_str("lines"),
            SplitMode::Bytes => f.write_str("bytes"),
        }
    }
}

/// Fully resolved settings for one split invocation.
///
/// Built once by [`crate::options::resolve`] (or by hand in library use) and
/// passed by reference into the writer. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Splitting discipline
    pub mode: SplitMode,
    /// Lines or bytes per output file, depending on `mode`
    pub chunk_size: NonZeroU64,
    /// Width of the zero-padded numeric suffix
    pub suffix_length: NonZeroUsize,
    /// Input file name, or `None` for standard input
    pub input: Option<String>,
    /// Prefix for every output file name
    pub output_prefix: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            mode: SplitMode::Lines,
            chunk_size: DEFAULT_LINES_PER_FILE,
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            input: None,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
        }
    }
}

impl SplitConfig {
    /// Builds the output file name for a rendered suffix.
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        PathBuf::from(format!("{}{suffix}", self.output_prefix))
    }

    /// Human-readable input name, `-` for standard input.
    pub fn input_display(&self) -> &str {
        self.input.as_deref().unwrap_or("-")
    }
}

impl fmt::Display for SplitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode={} chunk_size={} suffix_length={} input={} prefix={}",
            self.mode,
            self.chunk_size,
            self.suffix_length,
            self.input_display(),
            self.output_prefix
        )
    }
}

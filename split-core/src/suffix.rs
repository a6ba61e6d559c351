//! Zero-padded numeric suffixes for output file names.

use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Sequential chunk number rendered as a fixed-width decimal string.
///
/// Starts at zero. The counter is exhausted once its decimal form needs more
/// digits than the configured width.
#[derive(Debug, Clone)]
pub struct SuffixCounter {
    value: u64,
    width: NonZeroUsize,
}

impl SuffixCounter {
    /// Creates a counter at zero for suffixes of `width` digits.
    pub fn new(width: NonZeroUsize) -> Self {
        Self { value: 0, width }
    }

    /// Renders the current value, left-padded with `0` to the configured width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SuffixSpaceExhausted`] if the value has more digits
    /// than the width allows.
    pub fn render(&self) -> Result<String> {
        let width = self.width.get();
        let digits = self.value.checked_ilog10().map_or(1, |log| log as usize + 1);
        if digits > width {
            return Err(Error::SuffixSpaceExhausted {
                suffix_length: width,
            });
        }
        Ok(format!("{:0width$}", self.value))
    }

    /// Moves to the next chunk number.
    pub fn advance(&mut self) {
        self.value = self.value.saturating_add(1);
    }
}

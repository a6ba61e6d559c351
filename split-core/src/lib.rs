//! # split-core
//!
//! Engine of the `split` utility: turns argument tokens into a [`SplitConfig`]
//! and streams an input into numbered output files.
//!
//! The crate performs no process handling. Every failure is returned as an
//! [`Error`] so the caller alone decides how to report it and which exit
//! status to use.
//!
//! ```no_run
//! use split_core::{options, ChunkWriter};
//!
//! let config = options::resolve(&["-b", "64k", "image.bin", "img_"])?;
//! let input = std::io::BufReader::new(std::fs::File::open("image.bin").unwrap());
//! ChunkWriter::new(&config).write(input)?;
//! # Ok::<(), split_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod suffix;
pub mod writer;

pub use config::{SplitConfig, SplitMode};
pub use error::{Error, Result};
pub use suffix::SuffixCounter;
pub use writer::{ChunkWriter, SplitSummary};

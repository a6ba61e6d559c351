//! Configuration for a `split` command-line invocation.

pub use split_core::config::DEFAULT_BUFFER_SIZE;
use split_core::SplitConfig;

/// Configuration for CLI operations
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Resolved split settings
    pub split: SplitConfig,
    /// Report every created file on stderr
    pub verbose: bool,
    /// Print the resolved settings on stderr before splitting
    pub debug: bool,
}

//! Streaming writer that cuts an input into suffixed output files.
//!
//! Both split modes feed the same output sink, which owns the suffix counter
//! and the single open output file. The sink creates a file only when the
//! first byte for it arrives, so empty input produces no files and an input
//! that divides evenly leaves no empty trailing file behind.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::{SplitConfig, SplitMode, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};
use crate::suffix::SuffixCounter;


/// Outcome of a completed split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Created output files in suffix order
    pub files: Vec<PathBuf>,
    /// Total bytes copied from the input
    pub bytes: u64,
    /// Total lines copied (line mode only, zero in byte mode)
    pub lines: u64,
}

/// Writes an input stream into consecutive output files.
///
/// # Examples
///
/// ```no_run
/// use std::io::BufReader;
///
/// use split_core::{options, ChunkWriter};
///
/// let config = options::resolve(&["-l", "100", "log.txt", "part"])?;
/// let input = BufReader::new(std::fs::File::open("log.txt").unwrap());
/// let summary = ChunkWriter::new(&config).write(input)?;
/// println!("{} files", summary.files.len());
/// # Ok::<(), split_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChunkWriter<'a> {
    config: &'a SplitConfig,
    directory: Option<PathBuf>,
    verbose: bool,
}

impl<'a> ChunkWriter<'a> {
    /// Creates a writer that places files in the current directory.
    pub fn new(config: &'a SplitConfig) -> Self {
        Self {
            config,
            directory: None,
            verbose: false,
        }
    }

    /// Places output files under `directory` instead of the current directory.
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Reports every created file on stderr.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Consumes `input` to end-of-stream and writes the chunks.
    ///
    /// # Errors
    ///
    /// Returns an error in these cases:
    ///
    /// - The input cannot be read ([`Error::InputReadError`])
    /// - An output file already exists ([`Error::OutputFileExists`])
    /// - An output file cannot be created or written
    /// - More chunks are needed than the suffix width can name
    ///   ([`Error::SuffixSpaceExhausted`])
    ///
    /// Files completed before the failure are left in place.
    pub fn write<R: BufRead>(&self, mut input: R) -> Result<SplitSummary> {
        let mut sink = ChunkSink::new(self);
        let chunk_size = self.config.chunk_size.get();

        match self.config.mode {
            SplitMode::Lines => self.write_lines(&mut input, &mut sink, chunk_size)?,
            SplitMode::Bytes => self.write_blocks(&mut input, &mut sink, chunk_size)?,
        }

        sink.finish()
    }

    fn write_lines<R: BufRead>(
        &self,
        input: &mut R,
        sink: &mut ChunkSink<'_>,
        lines_per_file: u64,
    ) -> Result<()> {
        let mut line = Vec::new();
        let mut lines_in_chunk = 0;

        loop {
            line.clear();
            // Terminators are kept as read; a final unterminated line is kept too
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(|source| self.read_error(source))?;
            if read == 0 {
                break;
            }

            sink.write_all(&line)?;
            sink.summary.lines += 1;
            lines_in_chunk += 1;

            if lines_in_chunk == lines_per_file {
                sink.close()?;
                lines_in_chunk = 0;
            }

            // An unterminated line was cut short by end-of-stream
            if line.last() != Some(&b'\n') {
                break;
            }
        }

        Ok(())
    }

    fn write_blocks<R: BufRead>(
        &self,
        input: &mut R,
        sink: &mut ChunkSink<'_>,
        bytes_per_file: u64,
    ) -> Result<()> {
        loop {
            let copied = self.copy_block(input, sink, bytes_per_file)?;
            sink.close()?;

            // A short block means the input reported end-of-stream
            if copied < bytes_per_file {
                return Ok(());
            }
        }
    }

    /// Copies up to `limit` bytes into the sink, stopping at the first empty
    /// read.
    fn copy_block<R: BufRead>(
        &self,
        input: &mut R,
        sink: &mut ChunkSink<'_>,
        limit: u64,
    ) -> Result<u64> {
        let mut block = input.by_ref().take(limit);
        let mut copied = 0;

        loop {
            let len = match block.fill_buf() {
                Ok([]) => return Ok(copied),
                Ok(buf) => {
                    sink.write_all(buf)?;
                    buf.len()
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(self.read_error(source)),
            };
            block.consume(len);
            copied += len as u64;
        }
    }

    fn read_error(&self, source: io::Error) -> Error {
        Error::InputReadError {
            path: self.config.input_display().to_string(),
            source,
        }
    }
}

/// Output file currently receiving data.
struct OpenChunk {
    path: PathBuf,
    out: BufWriter<File>,
}

/// Shared output side of both split modes.
///
/// Holds at most one open file. The counter advances exactly once per closed
/// file.
struct ChunkSink<'w> {
    config: &'w SplitConfig,
    directory: Option<&'w Path>,
    verbose: bool,
    counter: SuffixCounter,
    current: Option<OpenChunk>,
    summary: SplitSummary,
}

impl<'w> ChunkSink<'w> {
    fn new(writer: &'w ChunkWriter<'_>) -> Self {
        Self {
            config: writer.config,
            directory: writer.directory.as_deref(),
            verbose: writer.verbose,
            counter: SuffixCounter::new(writer.config.suffix_length),
            current: None,
            summary: SplitSummary::default(),
        }
    }

    /// Appends `buf` to the current file, creating it first if needed.
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let chunk = match self.current.take() {
            Some(chunk) => chunk,
            None => self.open_next()?,
        };
        let chunk = self.current.insert(chunk);

        chunk
            .out
            .write_all(buf)
            .map_err(|source| Error::WriteOutput {
                path: chunk.path.clone(),
                source,
            })?;
        self.summary.bytes += buf.len() as u64;
        Ok(())
    }

    /// Flushes and closes the current file, then moves to the next suffix.
    fn close(&mut self) -> Result<()> {
        let Some(chunk) = self.current.take() else {
            return Ok(());
        };

        let OpenChunk { path, out } = chunk;
        out.into_inner().map_err(|err| Error::WriteOutput {
            path: path.clone(),
            source: err.into_error(),
        })?;

        self.summary.files.push(path);
        self.counter.advance();
        Ok(())
    }

    fn finish(mut self) -> Result<SplitSummary> {
        self.close()?;
        Ok(self.summary)
    }

    fn open_next(&self) -> Result<OpenChunk> {
        let suffix = self.counter.render()?;
        let name = self.config.output_path(&suffix);
        let path = match self.directory {
            Some(directory) => directory.join(name),
            None => name,
        };

        // create_new: never clobber or append to an existing file
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => Error::OutputFileExists { path: path.clone() },
                _ => Error::CreateOutput {
                    path: path.clone(),
                    source,
                },
            })?;

        if self.verbose {
            eprintln!("creating file '{}'", path.display());
        }

        Ok(OpenChunk {
            path,
            out: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file),
        })
    }
}

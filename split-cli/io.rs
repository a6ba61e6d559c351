//! Input handling for the `split` command line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use split_core::{Error, Result};

use crate::config::DEFAULT_BUFFER_SIZE;

/// Opens a buffered reader over the named file, or stdin for `None`.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] if the file does not exist and
/// [`Error::InputReadError`] if it cannot be opened for another reason.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        return Ok(Box::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdin(),
        )));
    };

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_string(),
        },
        _ => Error::InputReadError {
            path: path.to_string(),
            source,
        },
    })?;

    Ok(Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file)))
}

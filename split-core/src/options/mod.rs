//! Resolution of raw command-line tokens into a [`SplitConfig`].
//!
//! The grammar is deliberately small: `-a N`, `-b N[k|m]` and `-l N` each take
//! exactly one following value token, and everything else is an operand. The
//! rules run in a fixed order:
//!
//! 1. Mode conflict check over the raw tokens
//! 2. Option/value pair extraction
//! 3. Value parsing
//! 4. Defaults
//! 5. Operand extraction (`[input [prefix]]`)

use std::num::{NonZeroU64, NonZeroUsize};

use crate::config::{
    SplitConfig, SplitMode, DEFAULT_LINES_PER_FILE, DEFAULT_OUTPUT_PREFIX, DEFAULT_SUFFIX_LENGTH,
    KILOBYTE, MAX_SUFFIX_LENGTH, MEGABYTE,
};
use crate::error::{Error, Result};


/// Option flags that take a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    SuffixLength,
    Bytes,
    Lines,
}

impl Flag {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "-a" => Some(Flag::SuffixLength),
            "-b" => Some(Flag::Bytes),
            "-l" => Some(Flag::Lines),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            Flag::SuffixLength => 'a',
            Flag::Bytes => 'b',
            Flag::Lines => 'l',
        }
    }
}

/// Raw option values and leftover operands, before any value is parsed.
#[derive(Debug, Default)]
struct Extracted<'a> {
    suffix_length: Option<&'a str>,
    bytes: Option<&'a str>,
    lines: Option<&'a str>,
    operands: Vec<&'a str>,
}

/// Resolves the argument tokens (without the program name) into a config.
///
/// # Errors
///
/// Returns the first rule violation found:
///
/// - [`Error::ConflictingMode`] if `-l` and `-b` are combined or repeated
/// - [`Error::MissingOptionArgument`] if a flag is the last token
/// - [`Error::InvalidSuffixLength`], [`Error::InvalidLineCount`] or
///   [`Error::InvalidByteSpec`] for malformed values
/// - [`Error::InvalidOperand`] or [`Error::ExtraOperand`] for bad operands
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Result<SplitConfig> {
    check_mode_conflict(tokens)?;

    let extracted = extract_options(tokens)?;

    let suffix_length = extracted
        .suffix_length
        .map(parse_suffix_length)
        .transpose()?
        .unwrap_or(DEFAULT_SUFFIX_LENGTH);

    let (mode, chunk_size) = match (extracted.lines, extracted.bytes) {
        (Some(lines), None) => (SplitMode::Lines, parse_line_count(lines)?),
        (None, Some(bytes)) => (SplitMode::Bytes, parse_byte_spec(bytes)?),
        (None, None) => (SplitMode::Lines, DEFAULT_LINES_PER_FILE),
        // Rejected by the conflict check
        (Some(_), Some(_)) => return Err(Error::ConflictingMode),
    };

    let (input, output_prefix) = resolve_operands(&extracted.operands)?;

    Ok(SplitConfig {
        mode,
        chunk_size,
        suffix_length,
        input,
        output_prefix,
    })
}

fn check_mode_conflict<S: AsRef<str>>(tokens: &[S]) -> Result<()> {
    let count = |flag: &str| {
        tokens
            .iter()
            .filter(|token| AsRef::<str>::as_ref(*token) == flag)
            .count()
    };
    let lines = count("-l");
    let bytes = count("-b");

    if (lines > 0 && bytes > 0) || lines > 1 || bytes > 1 {
        return Err(Error::ConflictingMode);
    }
    Ok(())
}

fn extract_options<S: AsRef<str>>(tokens: &[S]) -> Result<Extracted<'_>> {
    let mut extracted = Extracted::default();
    let mut tokens = tokens.iter().map(AsRef::<str>::as_ref);

    while let Some(token) = tokens.next() {
        let Some(flag) = Flag::from_token(token) else {
            extracted.operands.push(token);
            continue;
        };

        let value = tokens.next().ok_or(Error::MissingOptionArgument {
            option: flag.letter(),
        })?;

        // A repeated -a keeps the last value
        match flag {
            Flag::SuffixLength => extracted.suffix_length = Some(value),
            Flag::Bytes => extracted.bytes = Some(value),
            Flag::Lines => extracted.lines = Some(value),
        }
    }

    Ok(extracted)
}

fn resolve_operands(operands: &[&str]) -> Result<(Option<String>, String)> {
    let mut input = None;
    let mut output_prefix = None;

    for (index, operand) in operands.iter().enumerate() {
        if !is_valid_operand(operand) {
            return Err(Error::InvalidOperand {
                operand: (*operand).to_string(),
            });
        }

        match index {
            0 => input = Some((*operand).to_string()),
            1 => output_prefix = Some((*operand).to_string()),
            _ => {
                return Err(Error::ExtraOperand {
                    operand: (*operand).to_string(),
                })
            }
        }
    }

    let output_prefix = output_prefix
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string());

    Ok((input, output_prefix))
}

/// Checks a token against the operand shape `[A-Za-z0-9_]*(\.[A-Za-z0-9]*)?`.
///
/// Word characters, optionally followed by a single dot and an alphanumeric
/// extension. The empty string is accepted.
pub fn is_valid_operand(token: &str) -> bool {
    let (stem, extension) = match token.split_once('.') {
        Some((stem, extension)) => (stem, Some(extension)),
        None => (token, None),
    };

    stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && extension.is_none_or(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Parses plain ASCII decimal digits. Signs, whitespace and separators are
/// rejected.
fn parse_decimal(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Parses the `-a` value.
///
/// # Errors
///
/// Returns [`Error::InvalidSuffixLength`] unless `value` is a decimal
/// integer in `1..=MAX_SUFFIX_LENGTH`.
pub fn parse_suffix_length(value: &str) -> Result<NonZeroUsize> {
    parse_decimal(value)
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n <= MAX_SUFFIX_LENGTH)
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| Error::InvalidSuffixLength {
            value: value.to_string(),
        })
}

/// Parses the `-l` value.
///
/// # Errors
///
/// Returns [`Error::InvalidLineCount`] unless `value` is a positive decimal
/// integer.
pub fn parse_line_count(value: &str) -> Result<NonZeroU64> {
    parse_decimal(value)
        .and_then(NonZeroU64::new)
        .ok_or_else(|| Error::InvalidLineCount {
            value: value.to_string(),
        })
}

/// Parses the `-b` value: `N`, `Nk` (N x 1024) or `Nm` (N x 1038576).
///
/// A suffixed number must not start with `0`, and the result must be positive
/// and fit into a `u64`.
///
/// # Errors
///
/// Returns [`Error::InvalidByteSpec`] for any other form.
pub fn parse_byte_spec(value: &str) -> Result<NonZeroU64> {
    let invalid = || Error::InvalidByteSpec {
        value: value.to_string(),
    };

    let (digits, multiplier) = if let Some(digits) = value.strip_suffix('k') {
        (digits, KILOBYTE)
    } else if let Some(digits) = value.strip_suffix('m') {
        (digits, MEGABYTE)
    } else {
        (value, 1)
    };

    if multiplier != 1 && digits.starts_with('0') {
        return Err(invalid());
    }

    parse_decimal(digits)
        .and_then(|n| n.checked_mul(multiplier))
        .and_then(NonZeroU64::new)
        .ok_or_else(invalid)
}

//! Machine-Code Loader.
//!
//! A program file holds one instruction word per line, written in hexadecimal with an
//! optional `0x` prefix. Only the leading run of hex digits on each line is read, so a
//! trailing comment or assembler annotation is ignored. Line `n` is loaded at address `n`.

use std::fs;
use std::path::Path;

use crate::common::LoadError;

/// A loaded program: machine words in address order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    words: Vec<u32>,
}

impl Program {
    /// Wraps already-encoded words.
    pub const fn from_words(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// The program words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` for an empty program.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<u32>> for Program {
    fn from(words: Vec<u32>) -> Self {
        Self::from_words(words)
    }
}

/// Parses machine-code text.
///
/// # Arguments
///
/// * `text` - File contents, one hexadecimal word per line.
///
/// # Returns
///
/// The program, or `LoadError::InvalidLine` for the first line that does not start
/// with a 32-bit hexadecimal value.
pub fn parse_program(text: &str) -> Result<Program, LoadError> {
    let words = text
        .lines()
        .enumerate()
        .map(|(address, line)| {
            parse_word(line).ok_or_else(|| LoadError::InvalidLine {
                address,
                line: line.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Program::from_words(words))
}

/// Reads and parses a machine-code file.
///
/// # Arguments
///
/// * `path` - Path to the file.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text)
}

/// Parses the leading hexadecimal word of a line.
fn parse_word(line: &str) -> Option<u32> {
    let trimmed = line.trim_start();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(trimmed);

    let end = digits
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    u32::from_str_radix(&digits[..end], 16).ok()
}

//! Hex instruction-image parsing.
//!
//! The instruction source is an ordered sequence of hex-encoded 32-bit
//! words, one per memory word slot. The stored text encodes each word in
//! the opposite byte order from what the decoder expects, so the text-order
//! bytes are interpreted little-endian to reconstruct the word (an explicit
//! byte swap). The image is padded with zero words to the memory depth; a
//! zero word terminates the simulated program.

use thiserror::Error;

/// Maximum number of hex-encoded bytes per instruction word.
const WORD_BYTES: usize = 4;

/// Error raised while parsing a hex instruction image.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// A line contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit on line {line}")]
    InvalidHexDigit {
        /// 1-based source line number.
        line: usize,
    },

    /// A line had an odd number of hex digits.
    #[error("odd-length hex word on line {line}")]
    OddLength {
        /// 1-based source line number.
        line: usize,
    },

    /// A line encoded more than four bytes.
    #[error("hex word wider than 32 bits on line {line}")]
    WordTooWide {
        /// 1-based source line number.
        line: usize,
    },

    /// The image holds more words than the memory can.
    #[error("image has {words} words but the memory depth is {depth}")]
    TooManyWords {
        /// Number of words in the image text.
        words: usize,
        /// Memory depth in words.
        depth: usize,
    },
}

/// A parsed instruction image: one 32-bit word per memory word slot.
#[derive(Clone, Debug)]
pub struct ProgramImage {
    words: Vec<u32>,
}

impl ProgramImage {
    /// Parses hex lines into an image padded with zero words to `depth`.
    ///
    /// Whitespace inside a line is ignored (bytes may be space-separated);
    /// blank lines are skipped. Each remaining line must encode at most
    /// four bytes; shorter words are zero-extended.
    ///
    /// # Arguments
    ///
    /// * `lines` - The hex word lines, in program order.
    /// * `depth` - Memory depth in words (capacity / 4).
    ///
    /// # Errors
    ///
    /// Any [`ImageError`]; parsing is all-or-nothing.
    pub fn from_hex_lines<I, S>(lines: I, depth: usize) -> Result<Self, ImageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::with_capacity(depth);
        for (idx, line) in lines.into_iter().enumerate() {
            let text: String = line.as_ref().split_whitespace().collect();
            if text.is_empty() {
                continue;
            }
            words.push(parse_word(&text, idx + 1)?);
        }

        if words.len() > depth {
            return Err(ImageError::TooManyWords {
                words: words.len(),
                depth,
            });
        }
        words.resize(depth, 0);

        Ok(Self { words })
    }

    /// Returns the instruction word for a byte-addressed PC, or `None` when
    /// the PC lies past the image.
    pub fn word_at(&self, pc: u32) -> Option<u32> {
        self.words.get((pc / 4) as usize).copied()
    }

    /// Number of word slots in the image (the memory depth).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true when the image has no word slots.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parses one hex word, byte-swapping from stored to decode order.
///
/// The text bytes are in the opposite order from the word's value, so the
/// word is `u32::from_le_bytes` over the text-order bytes (zero-extended
/// for words shorter than four bytes).
fn parse_word(text: &str, line: usize) -> Result<u32, ImageError> {
    if text.len() % 2 != 0 {
        return Err(ImageError::OddLength { line });
    }
    if text.len() > 2 * WORD_BYTES {
        return Err(ImageError::WordTooWide { line });
    }

    let mut bytes = [0u8; WORD_BYTES];
    for (i, pair) in text.as_bytes().chunks(2).enumerate() {
        let hi = hex_digit(pair[0], line)?;
        let lo = hex_digit(pair[1], line)?;
        bytes[i] = (hi << 4) | lo;
    }
    Ok(u32::from_le_bytes(bytes))
}

/// Converts one ASCII hex digit to its value.
fn hex_digit(ch: u8, line: usize) -> Result<u8, ImageError> {
    match ch {
        b'0'..=b'9' => Ok(ch - b'0'),
        b'a'..=b'f' => Ok(ch - b'a' + 10),
        b'A'..=b'F' => Ok(ch - b'A' + 10),
        _ => Err(ImageError::InvalidHexDigit { line }),
    }
}

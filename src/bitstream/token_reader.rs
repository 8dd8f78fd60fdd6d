//! TokenReader: sequential sources of bit-tokens for the decoder.
//!
//! NOTE: whitespace between tokens is skipped, so "0 1 1" and "011" read the same.
//!

use std::collections::VecDeque;

use crate::error::{HuffError, Result};

const BUFFER_SIZE: usize = 64 * 1024;

/// A sequential source of bit-tokens.
pub trait TokenSource {
    /// True if at least one more token can be read.
    fn has_next(&mut self) -> Result<bool>;

    /// Next bit (false for '0', true for '1'), or None if the source is exhausted.
    fn next_bit(&mut self) -> Result<Option<bool>>;

    /// Count of tokens handed out so far.
    fn consumed(&self) -> usize;
}

fn token_to_bit(token: char, position: usize) -> Result<bool> {
    match token {
        '0' => Ok(false),
        '1' => Ok(true),
        token => Err(HuffError::InvalidToken { token, position }),
    }
}

/// Reads '0'/'1' characters from any byte source.
#[derive(Debug)]
pub struct BitTokens<R> {
    buffer: Vec<u8>,
    cursor: usize,
    consumed: usize,
    source: R,
}

impl<R: std::io::Read> BitTokens<R> {
    /// Creates a new token reader (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: Vec::with_capacity(BUFFER_SIZE),
            cursor: 0,
            consumed: 0,
            source,
        }
    }

    /// Move the cursor to the next non-whitespace byte, refilling the buffer as needed.
    /// Returns false when the source has no more tokens.
    fn skip_to_token(&mut self) -> Result<bool> {
        loop {
            if self.cursor == self.buffer.len() {
                self.buffer.resize(BUFFER_SIZE, 0);
                let size = self.source.read(&mut self.buffer)?;
                self.buffer.truncate(size);
                self.cursor = 0;
                if size == 0 {
                    return Ok(false);
                }
            }
            if self.buffer[self.cursor].is_ascii_whitespace() {
                self.cursor += 1;
            } else {
                return Ok(true);
            }
        }
    }
}

impl<R: std::io::Read> TokenSource for BitTokens<R> {
    fn has_next(&mut self) -> Result<bool> {
        self.skip_to_token()
    }

    fn next_bit(&mut self) -> Result<Option<bool>> {
        if !self.skip_to_token()? {
            return Ok(None);
        }
        let token = self.buffer[self.cursor] as char;
        let bit = token_to_bit(token, self.consumed)?;
        self.cursor += 1;
        self.consumed += 1;
        Ok(Some(bit))
    }

    fn consumed(&self) -> usize {
        self.consumed
    }
}

/// Token source over bits already in memory.
#[derive(Debug, Default, Clone)]
pub struct SliceTokens {
    bits: VecDeque<bool>,
    consumed: usize,
}

impl SliceTokens {
    pub fn new(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Parse a string of '0'/'1' characters, ignoring whitespace.
    pub fn parse(text: &str) -> Result<Self> {
        let bits = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(pos, c)| token_to_bit(c, pos))
            .collect::<Result<Vec<bool>>>()?;
        Ok(Self::new(bits))
    }
}

impl TokenSource for SliceTokens {
    fn has_next(&mut self) -> Result<bool> {
        Ok(!self.bits.is_empty())
    }

    fn next_bit(&mut self) -> Result<Option<bool>> {
        let bit = self.bits.pop_front();
        if bit.is_some() {
            self.consumed += 1;
        }
        Ok(bit)
    }

    fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod test {
    use super::{BitTokens, SliceTokens, TokenSource};
    use crate::error::HuffError;

    #[test]
    fn basic_test() {
        let mut tr = BitTokens::new("1001".as_bytes());
        assert!(tr.has_next().unwrap());
        assert_eq!(tr.next_bit().unwrap(), Some(true));
        assert_eq!(tr.next_bit().unwrap(), Some(false));
        assert_eq!(tr.next_bit().unwrap(), Some(false));
        assert_eq!(tr.next_bit().unwrap(), Some(true));
        assert_eq!(tr.next_bit().unwrap(), None);
        assert!(!tr.has_next().unwrap());
        assert_eq!(tr.consumed(), 4);
    }

    #[test]
    fn whitespace_test() {
        let mut tr = BitTokens::new(" 0 1\n1\r\n ".as_bytes());
        assert_eq!(tr.next_bit().unwrap(), Some(false));
        assert_eq!(tr.next_bit().unwrap(), Some(true));
        assert_eq!(tr.next_bit().unwrap(), Some(true));
        assert!(!tr.has_next().unwrap());
    }

    #[test]
    fn invalid_token_test() {
        let mut tr = BitTokens::new("01x".as_bytes());
        tr.next_bit().unwrap();
        tr.next_bit().unwrap();
        assert!(matches!(
            tr.next_bit(),
            Err(HuffError::InvalidToken {
                token: 'x',
                position: 2
            })
        ));
    }

    #[test]
    fn long_input_test() {
        // Longer than one buffer fill.
        let text = "01".repeat(40_000);
        let mut tr = BitTokens::new(text.as_bytes());
        let mut ones = 0;
        while let Some(bit) = tr.next_bit().unwrap() {
            if bit {
                ones += 1;
            }
        }
        assert_eq!(ones, 40_000);
        assert_eq!(tr.consumed(), 80_000);
    }

    #[test]
    fn slice_tokens_test() {
        let mut st = SliceTokens::parse("1 0").unwrap();
        assert!(st.has_next().unwrap());
        assert_eq!(st.next_bit().unwrap(), Some(true));
        assert_eq!(st.next_bit().unwrap(), Some(false));
        assert_eq!(st.next_bit().unwrap(), None);
        assert_eq!(st.consumed(), 2);
        assert!(SliceTokens::parse("012").is_err());
    }
}

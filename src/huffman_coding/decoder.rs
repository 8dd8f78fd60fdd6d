//! Turns a stream of bit-tokens back into symbols by walking the tree.
//!
//! Each symbol starts at the root. A '0' steps left, a '1' steps right, and reaching a
//! leaf emits its symbol. The stream is done when the token source is exhausted between
//! symbols. Running out in the middle of a code is an error.
//!
//! A single-leaf tree has an empty code, so no token is ever consumed and token
//! exhaustion can not end the output. Decoding such a tree needs an explicit symbol count.

use std::io::Write;

use log::{debug, info, warn};

use super::huffman::HuffmanTree;
use super::node::Node;
use crate::bitstream::token_reader::TokenSource;
use crate::error::{HuffError, Result};

const FLUSH_SIZE: usize = 64 * 1024;

/// Decodes bit-tokens with one tree. Optionally stops after a fixed number of symbols.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    tree: &'a HuffmanTree,
    count: Option<usize>,
}

impl HuffmanTree {
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder {
            tree: self,
            count: None,
        }
    }
}

impl<'a> Decoder<'a> {
    /// Stop after exactly `count` symbols. Required for a single-leaf tree.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Decode the next symbol, or None if the source is exhausted at a symbol boundary.
    fn next_symbol<T: TokenSource>(&self, tokens: &mut T) -> Result<Option<u32>> {
        if !tokens.has_next()? {
            return Ok(None);
        }
        let mut node = self.tree.root();
        loop {
            match node {
                Node::Leaf { symbol, .. } => return Ok(Some(*symbol)),
                Node::Internal { left, right, .. } => {
                    node = match tokens.next_bit()? {
                        Some(true) => right.as_ref(),
                        Some(false) => left.as_ref(),
                        None => {
                            return Err(HuffError::ExhaustedInput {
                                consumed: tokens.consumed(),
                            })
                        }
                    };
                }
            }
        }
    }

    /// Feed every decoded symbol to `emit`. Returns the number of symbols decoded.
    fn run<T, F>(&self, tokens: &mut T, mut emit: F) -> Result<usize>
    where
        T: TokenSource,
        F: FnMut(u32) -> Result<()>,
    {
        if let Node::Leaf { symbol, .. } = self.tree.root() {
            let count = self.count.ok_or(HuffError::UnboundedSingleLeafDecode)?;
            if tokens.has_next()? {
                warn!("Single-symbol table: ignoring tokens in the compressed stream.");
            }
            for _ in 0..count {
                emit(*symbol)?;
            }
            debug!("Emitted symbol {} {} times.", symbol, count);
            return Ok(count);
        }

        let mut decoded = 0;
        while self.count.map_or(true, |n| decoded < n) {
            match self.next_symbol(tokens)? {
                Some(symbol) => emit(symbol)?,
                None if self.count.is_some() => {
                    // Fewer symbols in the stream than we were told to expect.
                    return Err(HuffError::ExhaustedInput {
                        consumed: tokens.consumed(),
                    });
                }
                None => break,
            }
            decoded += 1;
        }
        if self.count.is_some() && tokens.has_next()? {
            warn!("Stopped after {} symbols with tokens left over.", decoded);
        }
        debug!(
            "Decoded {} symbols from {} tokens.",
            decoded,
            tokens.consumed()
        );
        Ok(decoded)
    }

    /// Decode the whole stream into symbols.
    pub fn decode<T: TokenSource>(&self, tokens: &mut T) -> Result<Vec<u32>> {
        let mut out = Vec::new();
        self.run(tokens, |symbol| {
            out.push(symbol);
            Ok(())
        })?;
        Ok(out)
    }

    /// Decode the stream and write each symbol to `output` as one raw byte.
    /// Returns the number of bytes written.
    pub fn translate<T, W>(&self, tokens: &mut T, output: &mut W) -> Result<usize>
    where
        T: TokenSource,
        W: Write,
    {
        let mut buf: Vec<u8> = Vec::with_capacity(FLUSH_SIZE);
        let written = self.run(tokens, |symbol| {
            let byte = u8::try_from(symbol).map_err(|_| HuffError::SymbolOutOfRange(symbol))?;
            buf.push(byte);
            if buf.len() == FLUSH_SIZE {
                output.write_all(&buf)?;
                buf.clear();
            }
            Ok(())
        })?;
        output.write_all(&buf)?;
        output.flush()?;
        info!("Wrote {} decoded bytes.", written);
        Ok(written)
    }
}

//! Huffman prefix codes, kept as plain text.
//!
//! Version 0.1.0
//!
//! Builds an optimal prefix-code tree from symbol frequencies, saves its code table as text,
//! rebuilds the tree from a saved table, and decodes a stream of '0'/'1' bit-tokens back into
//! the original symbols. Encoding (symbols to bit-tokens) is included so the decoder has
//! something to read.
//!
//! Basic usage from the command line:
//!
//! `$> huffcode build hamlet.txt`            writes hamlet.code
//!
//! `$> huffcode encode hamlet.txt`           writes hamlet.short
//!
//! `$> huffcode decode hamlet.short`         writes hamlet.new
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{HuffError, Result};
pub use huffman_coding::huffman::{CodeTable, HuffmanTree};

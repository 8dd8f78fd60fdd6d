//! The huffman_coding module holds the prefix-code tree and everything done with it.
//!
//! - node: the tree node, either a leaf with a symbol or a join of two children.
//! - huffman_tree_from_freqs: greedy tree construction from symbol frequencies.
//! - huffman: the finished tree and the symbol -> code lookup table derived from it.
//! - code_table: saving a tree as a text code table, and rebuilding a tree from one.
//! - encoder / decoder: symbols to bit-tokens and back.
//!
//! A tree is built once, either from frequencies or from a saved table, and only read after
//! that. All of this is sequential; nothing here benefits from multithreading.
//!

pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod huffman;
pub mod huffman_tree_from_freqs;
pub mod node;

//! The bitstream module is the token I/O layer of huffcode.
//!
//! Compressed data is kept as text: one '0' or '1' character per bit. Packing the bits into
//! bytes is left to other tools. The readers here hand the decoder one bit-token at a time,
//! and the writer buffers tokens produced by the encoder before they reach the output sink.
//!
pub mod token_reader;
pub mod token_writer;

use std::fs::File;
use std::io::BufReader;

use log::info;

use super::write_output;
use crate::bitstream::token_reader::BitTokens;
use crate::error::Result;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::cli::HcOpts;

/// Decode the '0'/'1' text in opts.input with the code table in opts.table, writing the
/// bytes to opts.output. Returns the number of bytes written.
pub fn decompress(opts: &HcOpts) -> Result<usize> {
    let tree = HuffmanTree::load(BufReader::new(File::open(&opts.table)?))?;
    info!("Loaded code table {} ({} symbols).", opts.table, tree.symbol_count());

    let mut tokens = BitTokens::new(File::open(&opts.input)?);
    let mut decoder = tree.decoder();
    if let Some(count) = opts.count {
        decoder = decoder.with_count(count);
    }

    let mut decoded = Vec::new();
    let written = decoder.translate(&mut tokens, &mut decoded)?;
    write_output(&opts.output, opts.force_overwrite, &decoded)?;
    info!("{}: decoded {} bytes into {}.", opts.input, written, opts.output);
    Ok(written)
}

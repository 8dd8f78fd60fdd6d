use std::fs::{self, File};
use std::io::BufReader;

use log::{info, warn};

use super::write_output;
use crate::bitstream::token_writer::TokenWriter;
use crate::error::Result;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::cli::HcOpts;
use crate::tools::freq_count::freqs;

/// Count the byte frequencies of opts.input and save the code table to opts.table.
pub fn build_table(opts: &HcOpts) -> Result<HuffmanTree> {
    let data = fs::read(&opts.input)?;
    let freqs = freqs(&data);
    let tree = HuffmanTree::from_freqs(&freqs)?;

    let mut saved = Vec::new();
    tree.save(&mut saved)?;
    write_output(&opts.table, opts.force_overwrite, &saved)?;

    let table = tree.code_table();
    info!(
        "{}: {} bytes, {} symbols, {:.3} bits per byte. Table saved to {}.",
        opts.input,
        data.len(),
        table.len(),
        table.average_len(&freqs),
        opts.table
    );
    Ok(tree)
}

/// Encode opts.input with the code table in opts.table, writing '0'/'1' text to opts.output.
/// Returns the number of bytes encoded.
pub fn compress(opts: &HcOpts) -> Result<usize> {
    let tree = HuffmanTree::load(BufReader::new(File::open(&opts.table)?))?;
    let table = tree.code_table();

    let data = fs::read(&opts.input)?;
    let mut tw = TokenWriter::new(Vec::new()).with_line_width(opts.line_width);
    let count = table.encode(data.iter().map(|&b| u32::from(b)), &mut tw)?;
    let tokens = tw.written();
    write_output(&opts.output, opts.force_overwrite, &tw.into_inner()?)?;

    if tree.is_single_leaf() {
        warn!(
            "{} uses a single-symbol table, so {} is empty. Decode it with -n {}.",
            opts.input, opts.output, count
        );
    }

    info!(
        "{}: encoded {} bytes into {} tokens ({}).",
        opts.input, count, tokens, opts.output
    );
    Ok(count)
}

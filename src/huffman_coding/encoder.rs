//! Encoding symbols into bit-tokens with a code table. This is the inverse of the decoder
//! and is what produces the compressed streams it reads.

use std::io::Write;

use log::debug;

use super::huffman::CodeTable;
use crate::bitstream::token_writer::TokenWriter;
use crate::error::{HuffError, Result};

impl CodeTable {
    /// Write the code of every symbol to `out`. Returns the number of symbols encoded.
    pub fn encode<I, W>(&self, symbols: I, out: &mut TokenWriter<W>) -> Result<usize>
    where
        I: IntoIterator<Item = u32>,
        W: Write,
    {
        let mut count = 0;
        for symbol in symbols {
            let code = self.get(symbol).ok_or(HuffError::UnknownSymbol(symbol))?;
            out.put_code(code)?;
            count += 1;
        }
        debug!("Encoded {} symbols into {} tokens.", count, out.written());
        Ok(count)
    }

    /// Encode the symbols into a single string of '0'/'1'.
    pub fn encode_to_string(&self, symbols: &[u32]) -> Result<String> {
        let mut out = String::new();
        for &symbol in symbols {
            out.push_str(self.get(symbol).ok_or(HuffError::UnknownSymbol(symbol))?);
        }
        Ok(out)
    }
}

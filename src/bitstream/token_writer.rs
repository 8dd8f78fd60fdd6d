use std::io::Write;

use crate::error::Result;

const BUFFER_SIZE: usize = 64 * 1024;

/// Writes bit-tokens as '0'/'1' characters. Tokens are queued in a buffer and pushed to the
/// output sink whenever the buffer fills, and on flush().
pub struct TokenWriter<W: Write> {
    /// Tokens waiting to go out.
    output: Vec<u8>,
    /// Handle to the output stream
    writer: W,
    /// Count of tokens written so far.
    written: usize,
    /// Break lines after this many tokens (0 for one long line).
    line_width: usize,
    /// A line has tokens but no newline yet.
    line_open: bool,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            output: Vec::with_capacity(BUFFER_SIZE),
            writer,
            written: 0,
            line_width: 0,
            line_open: false,
        }
    }

    /// Break the token text into lines of `width` tokens.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Queue a code string (already made of '0'/'1').
    pub fn put_code(&mut self, code: &str) -> Result<()> {
        for &b in code.as_bytes() {
            self.output.push(b);
            self.written += 1;
            self.line_open = true;
            if self.line_width > 0 && self.written % self.line_width == 0 {
                self.output.push(b'\n');
                self.line_open = false;
            }
        }
        if self.output.len() >= BUFFER_SIZE {
            self.writer.write_all(&self.output)?;
            self.output.clear();
        }
        Ok(())
    }

    /// Count of tokens queued or written.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Push out everything, ending with a newline.
    pub fn flush(&mut self) -> Result<()> {
        if self.line_open {
            self.output.push(b'\n');
            self.line_open = false;
        }
        self.writer.write_all(&self.output)?;
        self.output.clear();
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the output sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod test {
    use super::TokenWriter;

    #[test]
    fn put_code_test() {
        let mut tw = TokenWriter::new(Vec::new());
        tw.put_code("10").unwrap();
        tw.put_code("0").unwrap();
        assert_eq!(tw.written(), 3);
        let out = tw.into_inner().unwrap();
        assert_eq!(out, "100\n".as_bytes());
    }

    #[test]
    fn line_width_test() {
        let mut tw = TokenWriter::new(Vec::new()).with_line_width(4);
        tw.put_code("1101").unwrap();
        tw.put_code("00").unwrap();
        let out = tw.into_inner().unwrap();
        assert_eq!(out, "1101\n00\n".as_bytes());
    }

    #[test]
    fn flush_twice_test() {
        let mut tw = TokenWriter::new(Vec::new());
        tw.put_code("01").unwrap();
        tw.flush().unwrap();
        tw.flush().unwrap();
        assert_eq!(tw.into_inner().unwrap(), "01\n".as_bytes());
    }

    #[test]
    fn empty_test() {
        let tw = TokenWriter::new(Vec::new());
        assert!(tw.into_inner().unwrap().is_empty());
    }
}

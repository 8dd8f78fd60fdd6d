//! Error type shared by every stage of the huffcode library.
//!
//! All failures here are data-contract violations (or I/O failures of a channel handed to
//! us), so nothing is retried. Each error is reported once to the caller.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HuffError>;

#[derive(Debug, Error)]
pub enum HuffError {
    /// No symbol with a positive frequency (or an empty code table).
    #[error("empty alphabet: no symbol with a positive frequency")]
    EmptyAlphabet,

    /// Code table records that can not form a prefix-code tree.
    #[error("malformed code table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    /// The token source ran dry in the middle of a code.
    #[error("compressed stream ended mid-code after {consumed} tokens")]
    ExhaustedInput { consumed: usize },

    /// A single-leaf tree has no code bits, so the token count can not bound the output.
    #[error("single-leaf code table needs an explicit symbol count to decode")]
    UnboundedSingleLeafDecode,

    /// Something other than '0' or '1' in the compressed stream.
    #[error("invalid bit token {token:?} at position {position}")]
    InvalidToken { token: char, position: usize },

    #[error("symbol {0} has no code in this table")]
    UnknownSymbol(u32),

    #[error("symbol {0} does not fit in a byte")]
    SymbolOutOfRange(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffError {
    /// Shorthand for building a `MalformedTable` error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        HuffError::MalformedTable {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::HuffError;

    #[test]
    fn malformed_message_test() {
        let err = HuffError::malformed(4, "code extends past leaf for symbol 65");
        assert_eq!(
            err.to_string(),
            "malformed code table at line 4: code extends past leaf for symbol 65"
        );
    }

    #[test]
    fn io_conversion_test() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HuffError = io.into();
        assert!(matches!(err, HuffError::Io(_)));
    }
}

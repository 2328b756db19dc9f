//! Errors raised at the host-facing edges of the scanner.
//!
//! The scan itself never fails; "no match" is a normal [`ScanResult`].
//! Errors come only from converting the host's valid-symbol table and
//! from the selector parser.
//!
//! [`ScanResult`]: crate::ScanResult

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The host's valid-symbol table has fewer entries than external tokens.
    #[error("valid-symbol table has {found} entries, expected at least {expected}")]
    ValidSymbolsTooShort { expected: usize, found: usize },

    /// A selector with no keyword segments.
    #[error("empty keyword selector")]
    EmptySelector,

    /// Input at `pos` is not a keyword segment.
    #[error("expected keyword segment at byte {pos}")]
    NotAKeyword { pos: u32 },

    /// Selector text starts with a UTF-8 byte order mark.
    #[error("selector starts with a byte order mark")]
    ByteOrderMark,

    /// Selector text contains a NUL byte, which the cursor reads as `EOF_CHAR`.
    #[error("null byte in selector at byte {pos}")]
    InteriorNull { pos: u32 },
}

//! External keyword-segment scanner for the Pharo grammar.
//!
//! The grammar's static rules cannot tell `at:` (a keyword-message
//! segment) from `x:` in `x := 1` (an identifier followed by assignment)
//! without looking past the colon. This crate supplies that one token as
//! an external scanner:
//!
//! ```text
//! host parser --(cursor, valid symbols)--> KeywordScanner --> ScanResult
//! ```
//!
//! # Example
//!
//! ```
//! use pharo_lexer_core::{SourceBuffer, Span};
//! use pharo_scanner::{ExternalScanner, KeywordScanner, ScanResult, ValidSymbols};
//!
//! let buf = SourceBuffer::new("  at: 1 put: 2");
//! let mut cursor = buf.cursor();
//! let mut scanner = KeywordScanner::create();
//!
//! let result = scanner.scan(&mut cursor, ValidSymbols::KEYWORD);
//! assert_eq!(result.token().map(|t| t.span), Some(Span::new(2, 5)));
//! assert_eq!(cursor.token_text(), "at:");
//!
//! let assignment = SourceBuffer::new("x := 1");
//! let mut cursor = assignment.cursor();
//! assert_eq!(scanner.scan(&mut cursor, ValidSymbols::KEYWORD), ScanResult::NoMatch);
//! assert_eq!(cursor.pos(), 0);
//! ```

mod external;
mod keyword;
mod options;
mod scan_error;
mod selector;
mod token;
mod valid_symbols;

pub use external::{ExternalScanner, SERIALIZATION_BUFFER_SIZE};
pub use keyword::KeywordScanner;
pub use options::{ProbePolicy, ScanOptions};
pub use scan_error::ScanError;
pub use selector::KeywordSelector;
pub use token::{ExternalToken, ScanResult, Token};
pub use valid_symbols::ValidSymbols;

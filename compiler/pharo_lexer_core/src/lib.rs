//! Low-level input model for Pharo lexing.
//!
//! This crate owns everything a token scanner needs to look at source text:
//!
//! - [`SourceBuffer`]: owned source text with encoding checks
//! - [`Cursor`]: character cursor with trivia skipping and checkpoints
//! - [`Span`]: compact byte range
//! - [`char_class`]: whitespace and identifier classification
//!
//! It has no `pharo_*` dependencies. The scanner crate (`pharo_scanner`)
//! builds the keyword-segment recognizer on top of it.

pub mod char_class;
mod cursor;
mod source_buffer;
mod span;

pub use char_class::IdentifierSet;
pub use cursor::{Checkpoint, Cursor, EOF_CHAR};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use span::Span;

//! Keyword selectors assembled from keyword segments.
//!
//! A keyword selector such as `at:put:` is a run of keyword segments. The
//! grammar builds `keyword_selector`, `keyword_message`, and keyword
//! pragmas out of the external `keyword` token; this module does the same
//! for a bare selector, driving [`KeywordScanner`] until the input is
//! exhausted.

use pharo_lexer_core::{EncodingIssueKind, SourceBuffer};
use smallvec::SmallVec;

use crate::{KeywordScanner, ScanError, ScanOptions, ScanResult, Token, ValidSymbols};

/// A parsed keyword selector.
///
/// Segments are kept with their spans in the parsed text, so callers can
/// point back at individual parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordSelector {
    source: String,
    segments: SmallVec<[Token; 4]>,
}

impl KeywordSelector {
    /// Parse `text` as a sequence of keyword segments.
    ///
    /// Whitespace between segments is allowed. Anything else, including
    /// the `:=` of an assignment, is rejected, as is text with a byte
    /// order mark or a NUL byte.
    pub fn parse(text: &str) -> Result<Self, ScanError> {
        Self::parse_with(text, ScanOptions::default())
    }

    /// [`parse`](Self::parse) with explicit scanner options.
    pub fn parse_with(text: &str, options: ScanOptions) -> Result<Self, ScanError> {
        let buf = SourceBuffer::new(text);
        if let Some(issue) = buf.encoding_issues().first() {
            return Err(match issue.kind {
                EncodingIssueKind::Utf8Bom => ScanError::ByteOrderMark,
                EncodingIssueKind::InteriorNull => ScanError::InteriorNull { pos: issue.pos },
            });
        }

        let mut cursor = buf.cursor();
        let scanner = KeywordScanner::new(options);
        let mut segments = SmallVec::new();

        loop {
            match scanner.scan_keyword(&mut cursor, ValidSymbols::KEYWORD) {
                ScanResult::Match(token) => {
                    tracing::trace!(
                        kind = %token.kind,
                        segment = cursor.token_text(),
                        span = %token.span,
                        "keyword segment",
                    );
                    segments.push(token);
                }
                // A failed probe may leave an identifier consumed; only
                // clean end of input finishes the selector.
                ScanResult::NoMatch if cursor.is_eof() && cursor.token_span().is_empty() => break,
                ScanResult::NoMatch => {
                    return Err(ScanError::NotAKeyword {
                        pos: cursor.token_start(),
                    });
                }
            }
        }

        if segments.is_empty() {
            return Err(ScanError::EmptySelector);
        }

        let selector = KeywordSelector {
            source: text.to_owned(),
            segments,
        };
        tracing::debug!(
            selector = %selector.name(),
            arity = selector.arity(),
            "parsed keyword selector",
        );
        Ok(selector)
    }

    /// The segment tokens, in source order.
    pub fn segments(&self) -> &[Token] {
        &self.segments
    }

    /// Segment texts, each ending in `:`.
    pub fn parts(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments
            .iter()
            .map(|token| &self.source[token.span.to_range()])
    }

    /// Canonical selector name: the segments concatenated without spaces.
    pub fn name(&self) -> String {
        self.parts().collect()
    }

    /// Number of arguments the selector takes: one per segment.
    pub fn arity(&self) -> usize {
        self.segments.len()
    }
}

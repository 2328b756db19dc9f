//! Owned source text and its encoding check.
//!
//! The cursor reports end-of-input by comparing its position against the
//! source length, so no sentinel byte needs to be stored after the text.
//!
//! # Encoding Detection
//!
//! During construction the buffer records encoding issues:
//! - UTF-8 BOM
//! - Interior null bytes, which read like the end-of-input character
//!
//! Issues are data, not errors. Hosts decide whether to report them.

use crate::Cursor;

/// Owned source text the cursor reads from.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
    /// Length visible to the cursor. Saturates at `u32::MAX`.
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// Null byte (U+0000) inside the source content.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a buffer from source code.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated from the
    /// cursor's point of view: it reports end-of-input at byte `u32::MAX`.
    pub fn new(source: &str) -> Self {
        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source.as_bytes(), &mut encoding_issues);

        Self {
            text: source.to_owned(),
            source_len: visible_len(source.len()),
            encoding_issues,
        }
    }

    /// Returns the source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text, self.source_len)
    }

    /// Length of the source content visible to the cursor, in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Saturate a byte length to the cursor's `u32` offsets.
fn visible_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Detect BOM and interior null byte issues in source bytes.
fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    detect_bom(source, issues);
    detect_interior_nulls(source, issues);
}

/// UTF-16 BOMs cannot occur here: the source arrives as `&str`.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}

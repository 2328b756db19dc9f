//! Character cursor over source text.
//!
//! The cursor is the stream a token scanner reads from. It offers three
//! primitives: look at the current character, advance one character
//! (optionally marking it as trivia), and report end-of-input as the
//! [`EOF_CHAR`] sentinel. On top of those it tracks where the token being
//! built starts and supports checkpoints for backtracking.
//!
//! # Interior Null Bytes
//!
//! A NUL inside the source reads as [`EOF_CHAR`] just like the end of
//! input does. [`Cursor::is_eof`] tells them apart by comparing the position
//! against the source length, and [`Cursor::advance`] only refuses to move
//! at the real end of input.

use crate::Span;

/// Character reported by [`Cursor::lookahead`] once the input is exhausted.
///
/// Never whitespace, never an identifier character, never `:`.
pub const EOF_CHAR: char = '\0';

/// Saved cursor state, produced by [`Cursor::checkpoint`].
///
/// Restoring a checkpoint rolls back both the read position and the
/// token start, so a failed probe leaves no trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pos: u32,
    token_start: u32,
}

impl Checkpoint {
    /// Byte offset the cursor will return to.
    pub fn pos(self) -> u32 {
        self.pos
    }
}

/// Character cursor over source text.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a whole cursor can also serve as a snapshot.
///
/// # Invariant
///
/// `source_len <= text.len()`. `pos` and `token_start` always sit on
/// character boundaries with `token_start <= pos <= source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source text, for character decoding and slicing.
    text: &'a str,
    /// Current read position (byte index).
    pos: u32,
    /// Start of the token being built; trivia advances move it forward.
    token_start: u32,
    /// Bytes visible to the cursor; EOF at and past this offset.
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// # Contract
    ///
    /// `source_len` must not exceed `text.len()`. Guaranteed by
    /// `SourceBuffer::cursor()`, which saturates oversized sources.
    pub(crate) fn new(text: &'a str, source_len: u32) -> Self {
        debug_assert!(
            source_len as usize <= text.len(),
            "source length {source_len} exceeds text length {}",
            text.len()
        );
        Self {
            text,
            pos: 0,
            token_start: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF and on interior null bytes.
    #[inline]
    pub fn current(&self) -> u8 {
        if self.pos >= self.source_len {
            return 0;
        }
        self.text.as_bytes()[self.pos as usize]
    }

    /// Returns the current character without consuming it.
    ///
    /// Returns [`EOF_CHAR`] when the input is exhausted.
    #[inline]
    pub fn lookahead(&self) -> char {
        if self.pos >= self.source_len {
            return EOF_CHAR;
        }
        let b = self.current();
        if b.is_ascii() {
            return char::from(b);
        }
        self.text
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(EOF_CHAR)
    }

    /// Advance past the current character.
    ///
    /// When `skip` is `true` the character is trivia: the token start moves
    /// past it, so it never becomes part of the token span. Advancing at EOF
    /// does nothing, which keeps every scanning loop finite.
    #[inline]
    pub fn advance(&mut self, skip: bool) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
        if skip {
            self.token_start = self.pos;
        }
    }

    /// Advance as trivia while `pred` holds for the current character.
    #[inline]
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.lookahead()) {
            self.advance(true);
        }
    }

    /// Advance as token content while `pred` holds for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.lookahead()) {
            self.advance(false);
        }
    }

    /// Returns `true` if the cursor has reached the end of input.
    ///
    /// An interior null byte reads as `0x00` too but is not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Start a new token at the current position.
    #[inline]
    pub fn begin_token(&mut self) {
        self.token_start = self.pos;
    }

    /// Byte offset where the token being built starts.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// Span from the token start to the current position.
    #[inline]
    pub fn token_span(&self) -> Span {
        Span::new(self.token_start, self.pos)
    }

    /// Text from the token start to the current position.
    pub fn token_text(&self) -> &'a str {
        self.slice(self.token_start, self.pos)
    }

    /// Save the current position and token start.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            token_start: self.token_start,
        }
    }

    /// Roll back to a saved [`Checkpoint`].
    #[inline]
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(
            checkpoint.pos <= self.source_len,
            "checkpoint {} is past source length {}",
            checkpoint.pos,
            self.source_len
        );
        self.pos = checkpoint.pos;
        self.token_start = checkpoint.token_start;
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source on character boundaries.
    /// Offsets taken from this cursor always do. Out-of-contract ranges
    /// yield an empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.text
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }
}

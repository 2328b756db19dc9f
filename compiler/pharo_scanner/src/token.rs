//! External token kinds and scan results.
//!
//! The host grammar declares its external tokens in a fixed order; the
//! discriminant of each [`ExternalToken`] is its index in that order and
//! in the host's valid-symbol table.

use std::fmt;

use pharo_lexer_core::Span;

/// External token kinds recognized outside the static grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExternalToken {
    /// Keyword-message segment: `identifier:` not followed by `=`.
    Keyword = 0,
}

impl ExternalToken {
    /// Every external token, in grammar declaration order.
    pub const ALL: [ExternalToken; 1] = [ExternalToken::Keyword];

    /// Number of external tokens the host grammar declares.
    pub const COUNT: usize = Self::ALL.len();

    /// Index into the host's valid-symbol table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Grammar name of the token.
    pub const fn name(self) -> &'static str {
        match self {
            ExternalToken::Keyword => "keyword",
        }
    }
}

impl fmt::Display for ExternalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized token: its kind and the source bytes it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: ExternalToken,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: ExternalToken, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Outcome of one scan attempt.
///
/// `NoMatch` is an ordinary answer, not a failure: the host tries its
/// other token rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanResult {
    NoMatch,
    Match(Token),
}

impl ScanResult {
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, ScanResult::Match(_))
    }

    /// The recognized token, if any.
    #[inline]
    pub fn token(&self) -> Option<Token> {
        match self {
            ScanResult::Match(token) => Some(*token),
            ScanResult::NoMatch => None,
        }
    }
}

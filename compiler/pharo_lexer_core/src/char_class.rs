//! Character classification for trivia and identifiers.
//!
//! The end-of-input sentinel ([`EOF_CHAR`](crate::EOF_CHAR)) is never
//! trivia, never an identifier character, and never `:`, so scanners built
//! on these predicates stop at EOF without a separate check.

/// Which characters may form an identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdentifierSet {
    /// Unicode alphabetic start, alphanumeric continue, plus `_`.
    #[default]
    Unicode,
    /// `[A-Za-z_][A-Za-z0-9_]*`, matching the grammar's identifier regex.
    Ascii,
}

/// Whitespace that a scanner may discard before a token.
#[inline]
pub fn is_trivia(c: char) -> bool {
    c.is_whitespace()
}

/// Pharo allows `_` as an identifier prefix.
#[inline]
pub fn is_ident_start(c: char, set: IdentifierSet) -> bool {
    c == '_'
        || match set {
            IdentifierSet::Unicode => c.is_alphabetic(),
            IdentifierSet::Ascii => c.is_ascii_alphabetic(),
        }
}

#[inline]
pub fn is_ident_continue(c: char, set: IdentifierSet) -> bool {
    c == '_'
        || match set {
            IdentifierSet::Unicode => c.is_alphanumeric(),
            IdentifierSet::Ascii => c.is_ascii_alphanumeric(),
        }
}

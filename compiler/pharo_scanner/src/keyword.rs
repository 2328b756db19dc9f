//! Keyword-segment recognition.
//!
//! A keyword segment is an identifier immediately followed by `:`, as in
//! `at:` of `at:put:`. The static grammar cannot express it on its own:
//! deciding needs a look past the colon, since `x:=` is an assignment and
//! its `:` belongs to the `:=` operator.
//!
//! # States
//!
//! ```text
//! seeking-start --ident start--> scanning-identifier --':'--> checking-colon
//!      |                              |                         |       |
//!   other char                   other char                    '='    other
//!      v                              v                         v       v
//!   NoMatch                        NoMatch                   NoMatch  Match
//! ```
//!
//! Nothing survives between calls.

use pharo_lexer_core::char_class::{is_ident_continue, is_ident_start, is_trivia};
use pharo_lexer_core::Cursor;

use crate::{ExternalToken, ProbePolicy, ScanOptions, ScanResult, Token, ValidSymbols};

/// Recognizes keyword-message segments.
///
/// Holds only its [`ScanOptions`]; there is no per-scan state to carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeywordScanner {
    options: ScanOptions,
}

impl KeywordScanner {
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Try to read one keyword segment at the cursor.
    ///
    /// Returns immediately, without touching the cursor, when `valid` does
    /// not accept [`ExternalToken::Keyword`]. Otherwise leading whitespace
    /// is skipped as trivia and stays skipped whatever the outcome.
    ///
    /// On a match the cursor sits just past the colon and the token span
    /// starts at the first identifier character. On a failed probe the
    /// cursor position depends on [`ProbePolicy`].
    pub fn scan_keyword(&self, cursor: &mut Cursor<'_>, valid: ValidSymbols) -> ScanResult {
        if !valid.accepts(ExternalToken::Keyword) {
            return ScanResult::NoMatch;
        }

        cursor.begin_token();
        cursor.skip_while(is_trivia);

        let ids = self.options.identifiers;
        if !is_ident_start(cursor.lookahead(), ids) {
            return ScanResult::NoMatch;
        }

        let probe_start = cursor.checkpoint();
        cursor.advance(false);
        cursor.eat_while(|c| is_ident_continue(c, ids));

        if cursor.lookahead() == ':' {
            cursor.advance(false);
            if cursor.lookahead() != '=' {
                return ScanResult::Match(Token::new(ExternalToken::Keyword, cursor.token_span()));
            }
        }

        if self.options.probe == ProbePolicy::Restore {
            cursor.restore(probe_start);
        }
        ScanResult::NoMatch
    }
}

#[cfg(test)]
mod tests;

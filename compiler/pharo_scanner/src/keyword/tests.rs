use super::*;
use pharo_lexer_core::{IdentifierSet, SourceBuffer, Span};
use pretty_assertions::assert_eq;

fn restoring() -> KeywordScanner {
    KeywordScanner::default()
}

fn consuming() -> KeywordScanner {
    KeywordScanner::new(ScanOptions::default().with_probe(ProbePolicy::Consume))
}

/// Scan once from the start of `source`; returns the result and final position.
fn scan(scanner: KeywordScanner, source: &str, valid: ValidSymbols) -> (ScanResult, u32) {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    let result = scanner.scan_keyword(&mut cursor, valid);
    (result, cursor.pos())
}

fn keyword(start: u32, end: u32) -> ScanResult {
    ScanResult::Match(Token::new(ExternalToken::Keyword, Span::new(start, end)))
}

// === Cheap rejection ===

#[test]
fn rejects_without_consuming_when_keyword_not_valid() {
    for scanner in [restoring(), consuming()] {
        assert_eq!(
            scan(scanner, "foo:", ValidSymbols::empty()),
            (ScanResult::NoMatch, 0)
        );
        assert_eq!(
            scan(scanner, "   foo:", ValidSymbols::empty()),
            (ScanResult::NoMatch, 0)
        );
    }
}

// === Matches ===

#[test]
fn matches_first_segment_of_multi_part_selector() {
    assert_eq!(
        scan(restoring(), "at:put:", ValidSymbols::KEYWORD),
        (keyword(0, 3), 3)
    );
}

#[test]
fn leading_whitespace_is_not_part_of_span() {
    let buf = SourceBuffer::new("   key: value");
    let mut cursor = buf.cursor();
    let result = restoring().scan_keyword(&mut cursor, ValidSymbols::KEYWORD);
    assert_eq!(result, keyword(3, 7));
    assert_eq!(cursor.token_text(), "key:");
    assert_eq!(cursor.pos(), 7);
}

#[test]
fn mixed_whitespace_is_trivia() {
    assert_eq!(
        scan(restoring(), "\n\t \r\n ifTrue: [", ValidSymbols::KEYWORD),
        (keyword(6, 13), 13)
    );
}

#[test]
fn underscore_prefix_and_digits() {
    assert_eq!(
        scan(restoring(), "_private1:", ValidSymbols::KEYWORD),
        (keyword(0, 10), 10)
    );
    assert_eq!(scan(restoring(), "_:", ValidSymbols::KEYWORD), (keyword(0, 2), 2));
}

#[test]
fn colon_at_end_of_input_matches() {
    assert_eq!(scan(restoring(), "with:", ValidSymbols::KEYWORD), (keyword(0, 5), 5));
}

#[test]
fn colon_followed_by_space_then_equals_matches() {
    assert_eq!(scan(restoring(), "x: =", ValidSymbols::KEYWORD), (keyword(0, 2), 2));
}

#[test]
fn colon_followed_by_colon_matches() {
    // `a::` claims only the first colon
    assert_eq!(scan(restoring(), "a::", ValidSymbols::KEYWORD), (keyword(0, 2), 2));
}

#[test]
fn unicode_identifier_matches_with_unicode_set() {
    assert_eq!(
        scan(restoring(), "größe:", ValidSymbols::KEYWORD),
        (keyword(0, 8), 8)
    );
}

#[test]
fn unicode_identifier_rejected_with_ascii_set() {
    let scanner = KeywordScanner::new(ScanOptions::default().with_identifiers(IdentifierSet::Ascii));
    assert_eq!(
        scan(scanner, "größe:", ValidSymbols::KEYWORD),
        (ScanResult::NoMatch, 0)
    );
    assert_eq!(scan(scanner, "gr:", ValidSymbols::KEYWORD), (keyword(0, 3), 3));
}

// === Assignment disambiguation ===

#[test]
fn assignment_is_not_a_keyword() {
    assert_eq!(scan(restoring(), "x:=1", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 0));
}

#[test]
fn assignment_probe_consumes_colon_under_consume_policy() {
    assert_eq!(scan(consuming(), "x:=1", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 2));
}

#[test]
fn assignment_after_whitespace_keeps_trivia_skipped() {
    assert_eq!(
        scan(restoring(), "  sum := 1", ValidSymbols::KEYWORD),
        (ScanResult::NoMatch, 2)
    );
    assert_eq!(
        scan(restoring(), "  sum:= 1", ValidSymbols::KEYWORD),
        (ScanResult::NoMatch, 2)
    );
    assert_eq!(
        scan(consuming(), "  sum:= 1", ValidSymbols::KEYWORD),
        (ScanResult::NoMatch, 6)
    );
}

// === Rejections ===

#[test]
fn digit_start_is_rejected_without_consuming() {
    for scanner in [restoring(), consuming()] {
        assert_eq!(scan(scanner, "123:", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 0));
    }
}

#[test]
fn punctuation_start_is_rejected_after_trivia() {
    for scanner in [restoring(), consuming()] {
        assert_eq!(scan(scanner, "  #at:", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 2));
        assert_eq!(scan(scanner, ":=", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 0));
    }
}

#[test]
fn identifier_without_colon_is_rejected() {
    assert_eq!(scan(restoring(), "foo", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 0));
    assert_eq!(scan(consuming(), "foo", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 3));
}

#[test]
fn space_before_colon_is_rejected() {
    assert_eq!(scan(restoring(), "foo :", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 0));
    assert_eq!(scan(consuming(), "foo :", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 3));
}

#[test]
fn empty_and_whitespace_only_input() {
    assert_eq!(scan(restoring(), "", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 0));
    assert_eq!(scan(restoring(), " \n\t", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 3));
}

#[test]
fn interior_null_stops_identifier() {
    assert_eq!(scan(restoring(), "ab\0:", ValidSymbols::KEYWORD), (ScanResult::NoMatch, 0));
}

// === Statelessness ===

#[test]
fn repeated_scans_walk_a_selector() {
    let buf = SourceBuffer::new("at: 1 put: 2");
    let mut cursor = buf.cursor();
    let scanner = restoring();

    assert_eq!(scanner.scan_keyword(&mut cursor, ValidSymbols::KEYWORD), keyword(0, 3));
    // `1` is not a keyword; the host consumes it as a literal
    assert_eq!(scanner.scan_keyword(&mut cursor, ValidSymbols::KEYWORD), ScanResult::NoMatch);
    assert_eq!(cursor.pos(), 4);
    cursor.advance(false);
    assert_eq!(scanner.scan_keyword(&mut cursor, ValidSymbols::KEYWORD), keyword(6, 10));
}

#[test]
fn rejection_is_deterministic_after_any_prior_scan() {
    let buf = SourceBuffer::new("at:put:");
    let mut cursor = buf.cursor();
    let scanner = restoring();
    assert!(scanner.scan_keyword(&mut cursor, ValidSymbols::KEYWORD).is_match());
    for _ in 0..3 {
        assert_eq!(scanner.scan_keyword(&mut cursor, ValidSymbols::empty()), ScanResult::NoMatch);
        assert_eq!(cursor.pos(), 3);
    }
}

// === Property tests ===

mod proptest_keyword {
    use super::{consuming, restoring, scan, KeywordScanner};
    use crate::{ScanResult, ValidSymbols};
    use pharo_lexer_core::SourceBuffer;
    use proptest::prelude::*;

    fn any_scanner() -> impl Strategy<Value = KeywordScanner> {
        prop_oneof![Just(restoring()), Just(consuming())]
    }

    proptest! {
        #[test]
        fn ident_colon_matches_exactly(
            ws in "[ \t\n]{0,4}",
            ident in "[A-Za-z_][A-Za-z0-9_]{0,12}",
            rest in "([^=].*)?",
        ) {
            let source = format!("{ws}{ident}:{rest}");
            let (result, pos) = scan(restoring(), &source, ValidSymbols::KEYWORD);
            let token = result.token();
            prop_assert!(token.is_some(), "no match for {:?}", source);
            if let Some(token) = token {
                let start = ws.len();
                prop_assert_eq!(token.span.to_range(), start..start + ident.len() + 1);
                prop_assert_eq!(&source[token.span.to_range()], format!("{ident}:"));
                prop_assert_eq!(pos as usize, start + ident.len() + 1);
            }
        }

        #[test]
        fn assignment_never_matches(
            scanner in any_scanner(),
            ident in "[A-Za-z_][A-Za-z0-9_]{0,12}",
            rest in ".{0,8}",
        ) {
            let source = format!("{ident}:={rest}");
            let (result, _) = scan(scanner, &source, ValidSymbols::KEYWORD);
            prop_assert_eq!(result, ScanResult::NoMatch);
        }

        #[test]
        fn empty_valid_set_never_moves(scanner in any_scanner(), source in ".{0,32}") {
            let (result, pos) = scan(scanner, &source, ValidSymbols::empty());
            prop_assert_eq!(result, ScanResult::NoMatch);
            prop_assert_eq!(pos, 0);
        }

        #[test]
        fn match_ends_with_colon_not_followed_by_equals(
            scanner in any_scanner(),
            source in "[ a-z0-9_:=#]{0,24}",
        ) {
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            if let ScanResult::Match(token) = scanner.scan_keyword(&mut cursor, ValidSymbols::KEYWORD) {
                let text = &source[token.span.to_range()];
                prop_assert!(text.ends_with(':'));
                prop_assert!(!text.starts_with(' '));
                prop_assert_eq!(token.span.end, cursor.pos());
                prop_assert!(!source[token.span.end as usize..].starts_with('='));
            }
        }

        #[test]
        fn restore_policy_leaves_cursor_after_trivia_on_failure(source in "[ a-z0-9_:=#]{0,24}") {
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            let result = restoring().scan_keyword(&mut cursor, ValidSymbols::KEYWORD);
            if result == ScanResult::NoMatch {
                let trivia = source.len() - source.trim_start().len();
                prop_assert_eq!(cursor.pos() as usize, trivia);
            }
        }
    }
}

use super::*;
use crate::error::ScanErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: scan and panic on failure.
fn scan_ok(source: &str) -> Vec<Segment> {
    scan(source).expect("template should scan")
}

/// Helper: scan and return the error.
fn scan_err(source: &str) -> ScanError {
    scan(source).expect_err("template should fail to scan")
}

/// Helper: concatenated literal text of all literal segments, with
/// interpolation sources shown as `${...}` markers.
fn flatten(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg {
            Segment::Literal { text, .. } => out.push_str(text),
            Segment::Interpolation { source, .. } => {
                out.push_str("${");
                out.push_str(source);
                out.push('}');
            }
        }
    }
    out
}

// ─── Delimiters ────────────────────────────────────────────────

#[test]
fn empty_template() {
    assert_eq!(scan_ok("''''''"), vec![]);
    assert_eq!(scan_ok(r#""""""""#), vec![]);
}

#[test]
fn plain_body() {
    let segments = scan_ok("'''hello'''");
    assert_eq!(
        segments,
        vec![Segment::literal("hello", Span::new(3, 8))]
    );
}

#[test]
fn double_quote_delimiter() {
    let segments = scan_ok(r#""""hello""""#);
    assert_eq!(
        segments,
        vec![Segment::literal("hello", Span::new(3, 8))]
    );
}

#[test]
fn other_quote_char_is_literal() {
    let segments = scan_ok(r#"'''say "hi"'''"#);
    assert_eq!(
        segments,
        vec![Segment::literal(r#"say "hi""#, Span::new(3, 11))]
    );
}

#[test]
fn missing_opening_delimiter() {
    for source in ["", "x", "''x", "''", "```abc"] {
        let err = scan_err(source);
        assert_eq!(err.kind, ScanErrorKind::MissingOpeningDelimiter);
        assert_eq!(err.offset, 0);
    }
}

#[test]
fn unterminated_template_reports_stop_offset() {
    let err = scan_err("'''abc");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedTemplate);
    assert_eq!(err.offset, 6);

    // Three quotes alone are only the opening delimiter.
    let err = scan_err("'''");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedTemplate);
    assert_eq!(err.offset, 3);
}

#[test]
fn trailing_short_quote_run_is_not_a_terminator() {
    let err = scan_err("'''abc''");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedTemplate);
}

// ─── Quote-run escaping ────────────────────────────────────────

#[test]
fn four_quotes_at_end_keep_one() {
    // One literal quote immediately before the terminator is written
    // as four quotes.
    let segments = scan_ok("'''x''''");
    assert_eq!(segments, vec![Segment::literal("x'", Span::new(3, 5))]);
}

#[test]
fn five_quotes_at_end_keep_two() {
    let segments = scan_ok("'''x'''''");
    assert_eq!(segments, vec![Segment::literal("x''", Span::new(3, 6))]);
}

#[test]
fn one_or_two_quotes_mid_body_are_literal() {
    let segments = scan_ok("'''it's ok''''''");
    // Body is "it's ok" plus a final six-quote run: 3 kept + terminator.
    assert_eq!(
        segments,
        vec![Segment::literal("it's ok'''", Span::new(3, 13))]
    );
}

#[test]
fn four_quotes_mid_body_keep_one() {
    let segments = scan_ok("'''a''''b'''");
    assert_eq!(segments, vec![Segment::literal("a'b", Span::new(3, 9))]);
}

#[test]
fn three_quotes_mid_body_keep_none() {
    // A bare three-quote run that is not at end of source contributes
    // no characters; the real terminator is found later.
    let segments = scan_ok("'''a'''b'''");
    assert_eq!(segments, vec![Segment::literal("ab", Span::new(3, 8))]);
}

// ─── Interpolation ─────────────────────────────────────────────

#[test]
fn single_interpolation() {
    let segments = scan_ok("'''${name}'''");
    assert_eq!(
        segments,
        vec![Segment::interpolation("name", Span::new(3, 10))]
    );
}

#[test]
fn interpolation_between_literals() {
    let segments = scan_ok("'''Hello ${name}!'''");
    assert_eq!(
        segments,
        vec![
            Segment::literal("Hello ", Span::new(3, 9)),
            Segment::interpolation("name", Span::new(9, 16)),
            Segment::literal("!", Span::new(16, 17)),
        ]
    );
}

#[test]
fn adjacent_interpolations() {
    let segments = scan_ok("'''${a}${b}'''");
    assert_eq!(
        segments,
        vec![
            Segment::interpolation("a", Span::new(3, 7)),
            Segment::interpolation("b", Span::new(7, 11)),
        ]
    );
}

#[test]
fn interpolation_source_keeps_inner_whitespace() {
    let segments = scan_ok("'''${ title + ' ' }'''");
    assert_eq!(
        segments,
        vec![Segment::interpolation(" title + ' ' ", Span::new(3, 19))]
    );
}

#[test]
fn plain_dollar_is_literal() {
    let segments = scan_ok("'''$5 and $x'''");
    assert_eq!(
        segments,
        vec![Segment::literal("$5 and $x", Span::new(3, 12))]
    );
}

#[test]
fn lone_closing_brace_is_literal() {
    let segments = scan_ok("'''a}b'''");
    assert_eq!(segments, vec![Segment::literal("a}b", Span::new(3, 6))]);
}

#[test]
fn unterminated_interpolation() {
    let err = scan_err("'''${name");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedInterpolation);
    assert_eq!(err.offset, 9);
}

#[test]
fn interpolation_swallows_quote_runs() {
    // The first `}` closes the span; quote runs inside it are not
    // delimiter candidates.
    let err = scan_err("'''${a'''");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedInterpolation);
}

// ─── Escapes ───────────────────────────────────────────────────

#[test]
fn escaped_opener_is_literal() {
    let segments = scan_ok(r"'''\${abc}'''");
    assert_eq!(
        segments,
        vec![Segment::literal("${abc}", Span::new(3, 10))]
    );
}

#[test]
fn lone_backslash_is_literal() {
    let segments = scan_ok(r"'''a\b \$x'''");
    assert_eq!(
        segments,
        vec![Segment::literal(r"a\b \$x", Span::new(3, 10))]
    );
}

#[test]
fn line_continuation_joins_lines() {
    let segments = scan_ok("'''foo\\\nbar'''");
    assert_eq!(segments, vec![Segment::literal("foobar", Span::new(3, 11))]);
}

#[test]
fn crlf_line_continuation() {
    let segments = scan_ok("'''foo\\\r\nbar'''");
    assert_eq!(segments, vec![Segment::literal("foobar", Span::new(3, 12))]);
}

#[test]
fn continuation_only_body_yields_empty_literal() {
    let segments = scan_ok("'''\\\n'''");
    assert_eq!(segments, vec![Segment::literal("", Span::new(3, 5))]);
}

#[test]
fn plain_newlines_are_preserved() {
    let segments = scan_ok("'''a\nb\r\nc'''");
    assert_eq!(
        segments,
        vec![Segment::literal("a\nb\r\nc", Span::new(3, 9))]
    );
}

#[test]
fn multibyte_text_is_preserved() {
    let segments = scan_ok("'''héllo ${x} wörld'''");
    assert_eq!(flatten(&segments), "héllo ${x} wörld");
}

// ─── Span tiling ───────────────────────────────────────────────

/// Segment spans must tile the body: start at 3 (after the opening
/// delimiter), be contiguous, and end where the terminator's closing
/// three quotes begin.
fn assert_spans_tile(source: &str, segments: &[Segment]) {
    let mut expected_start = 3;
    for seg in segments {
        let span = seg.span();
        assert_eq!(
            span.start, expected_start,
            "gap before segment {seg:?} in {source:?}"
        );
        assert!(span.end >= span.start, "inverted span in {source:?}");
        expected_start = span.end;
    }
    let body_end = u32::try_from(source.len()).unwrap() - 3;
    assert_eq!(expected_start, body_end, "segments do not cover {source:?}");
}

#[test]
fn spans_tile_the_body() {
    let sources = [
        "''''''",
        "'''hello'''",
        "'''Hello ${name}!'''",
        "'''${a}${b}'''",
        "'''a''''b'''",
        "'''x''''",
        r"'''\${abc}'''",
        "'''foo\\\nbar'''",
        "'''a\nb\r\nc ${x} d'''",
    ];
    for source in sources {
        let segments = scan_ok(source);
        assert_spans_tile(source, &segments);
    }
}

proptest! {
    /// Bodies without quotes, backslashes, or dollar signs scan to a
    /// single literal equal to the body.
    #[test]
    fn plain_bodies_round_trip(body in "[a-zA-Z0-9 \n.,;:!<>/=-]{0,64}") {
        let source = format!("'''{body}'''");
        let segments = scan_ok(&source);
        assert_eq!(flatten(&segments), body);
        assert_spans_tile(&source, &segments);
    }

    /// Interpolation sources without closing braces survive scanning
    /// verbatim.
    #[test]
    fn interp_sources_round_trip(expr in "[a-zA-Z0-9_+. ']{1,24}") {
        let source = format!("'''${{{expr}}}'''");
        let segments = scan_ok(&source);
        prop_assert_eq!(segments.len(), 1);
        match &segments[0] {
            Segment::Interpolation { source: s, .. } => prop_assert_eq!(s, &expr),
            other => prop_assert!(false, "expected interpolation, got {:?}", other),
        }
    }

    /// The quote-run counting rule: n >= 3 quotes before the
    /// terminator keep n - 3.
    #[test]
    fn quote_runs_keep_excess(n in 3u32..10) {
        let quotes = "'".repeat(n as usize);
        let source = format!("'''x{quotes}'''");
        // The trailing run merges with the terminator: x + (n + 3) quotes.
        let segments = scan_ok(&source);
        let expected = format!("x{}", "'".repeat(n as usize));
        assert_eq!(flatten(&segments), expected);
    }
}

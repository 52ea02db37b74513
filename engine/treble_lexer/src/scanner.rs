//! Hand-written template scanner producing [`Segment`]s.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and builds
//! literal text incrementally: plain chunks are copied verbatim from
//! the source, escape sequences are resolved at their boundaries. It
//! tracks two positions inside the body:
//!
//! - `seg_start`: where the current literal segment's raw region began
//! - `chunk_start`: where the current unescaped plain-text run began
//!
//! On every interesting byte the pending chunk is appended to the
//! literal accumulator, the escape (or segment boundary) is resolved,
//! and scanning continues. Segment spans therefore tile the template
//! body exactly, while segment text carries the escape-normalized
//! content.

use treble_ir::{Segment, Span};

use crate::cursor::Cursor;
use crate::error::{
    missing_opening_delimiter, unterminated_interpolation, unterminated_template, ScanError,
};
use crate::source_buffer::SourceBuffer;

/// Scan a full template source (including its opening and closing
/// delimiters) into an ordered sequence of segments.
///
/// The delimiter quote character is inferred from the first byte of
/// the source; `'` and `"` are accepted.
pub fn scan(source: &str) -> Result<Vec<Segment>, ScanError> {
    let buffer = SourceBuffer::new(source);
    Scanner::new(source, buffer.cursor()).scan_template()
}

/// The scanner state machine.
///
/// Holds the original `&str` alongside the cursor so literal chunks
/// can be sliced back out as text. Chunk boundaries always sit on
/// ASCII delimiter bytes or at the ends of the source, so slicing
/// never splits a UTF-8 character.
struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    segments: Vec<Segment>,
    /// Escape-normalized text accumulated for the current literal.
    lit: String,
    /// Raw start of the current literal segment's region.
    seg_start: u32,
    /// Start of the pending verbatim chunk.
    chunk_start: u32,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, cursor: Cursor<'a>) -> Self {
        Self {
            source,
            cursor,
            segments: Vec::new(),
            lit: String::new(),
            seg_start: 0,
            chunk_start: 0,
        }
    }

    /// Scan the opening delimiter, then the body.
    fn scan_template(mut self) -> Result<Vec<Segment>, ScanError> {
        let quote = self.cursor.current();
        if !matches!(quote, b'\'' | b'"')
            || self.cursor.peek() != quote
            || self.cursor.peek2() != quote
        {
            return Err(missing_opening_delimiter(0));
        }
        self.cursor.advance_n(3);
        self.seg_start = self.cursor.pos();
        self.chunk_start = self.cursor.pos();
        self.scan_body(quote)
    }

    fn scan_body(mut self, quote: u8) -> Result<Vec<Segment>, ScanError> {
        loop {
            let b = self.cursor.skip_to_body_delim(quote);
            let at = self.cursor.pos();
            match b {
                0 => return Err(unterminated_template(at)),
                b'$' => self.dollar(at)?,
                b'\\' => self.backslash(at),
                _ if b == quote => {
                    if let Some(segments) = self.quote_run(quote, at) {
                        return Ok(segments);
                    }
                }
                _ => unreachable!("skip_to_body_delim returned unexpected byte"),
            }
        }
    }

    /// Handle `$`: either an interpolation opener or a plain dollar sign.
    fn dollar(&mut self, at: u32) -> Result<(), ScanError> {
        if self.cursor.peek() != b'{' {
            // Plain '$' stays in the current chunk.
            self.cursor.advance();
            return Ok(());
        }

        self.take_chunk(at);
        self.flush_literal(at);

        self.cursor.advance_n(2); // consume "${"
        let expr_start = self.cursor.pos();
        if self.cursor.skip_to_interp_close() == 0 {
            return Err(unterminated_interpolation(self.cursor.pos()));
        }
        let expr_end = self.cursor.pos();
        self.cursor.advance(); // consume '}'

        let end = self.cursor.pos();
        self.segments.push(Segment::interpolation(
            self.slice(expr_start, expr_end),
            Span::new(at, end),
        ));
        self.seg_start = end;
        self.chunk_start = end;
        Ok(())
    }

    /// Handle `\`: escaped opener, line continuation, or a literal
    /// backslash.
    fn backslash(&mut self, at: u32) {
        match (self.cursor.peek(), self.cursor.peek2()) {
            // `\${` emits the two characters `${` without opening an
            // interpolation.
            (b'$', b'{') => {
                self.take_chunk(at);
                self.lit.push_str("${");
                self.cursor.advance_n(3);
                self.chunk_start = self.cursor.pos();
            }
            // Line continuation: the backslash and the line break are
            // removed with no substitution.
            (b'\r', b'\n') => {
                self.take_chunk(at);
                self.cursor.advance_n(3);
                self.chunk_start = self.cursor.pos();
            }
            (b'\n' | b'\r', _) => {
                self.take_chunk(at);
                self.cursor.advance_n(2);
                self.chunk_start = self.cursor.pos();
            }
            // A lone backslash is literal and stays in the chunk.
            _ => self.cursor.advance(),
        }
    }

    /// Handle a run of delimiter quote characters.
    ///
    /// Counts the run length `n`. A run of `n >= 3` immediately
    /// followed by end of source is the terminator: its first `n - 3`
    /// quotes are escaped body content and the final three close the
    /// template. Elsewhere, a run of `n >= 3` emits `n - 3` literal
    /// quotes and a run of 1-2 quotes is plain literal text.
    ///
    /// Returns the finished segment list when the terminator was
    /// consumed, `None` to continue scanning.
    fn quote_run(&mut self, quote: u8, at: u32) -> Option<Vec<Segment>> {
        self.take_chunk(at);
        self.cursor.eat_while(|byte| byte == quote);
        let run_len = self.cursor.pos() - at;

        if run_len >= 3 && self.cursor.is_eof() {
            let kept = run_len - 3;
            self.push_quotes(quote, kept);
            self.flush_literal(at + kept);
            return Some(std::mem::take(&mut self.segments));
        }

        let kept = if run_len >= 3 { run_len - 3 } else { run_len };
        self.push_quotes(quote, kept);
        self.chunk_start = self.cursor.pos();
        None
    }

    /// Append the pending verbatim chunk `[chunk_start, upto)` to the
    /// literal accumulator.
    fn take_chunk(&mut self, upto: u32) {
        self.lit.push_str(self.slice(self.chunk_start, upto));
    }

    /// Flush the accumulated literal as a segment spanning
    /// `[seg_start, end)`. Regions of zero raw width produce no
    /// segment; regions that normalized to empty text (a lone line
    /// continuation) still do, keeping the span tiling exact.
    fn flush_literal(&mut self, end: u32) {
        debug_assert!(
            end > self.seg_start || self.lit.is_empty(),
            "accumulated literal text without a raw region to span"
        );
        if end > self.seg_start {
            let text = std::mem::take(&mut self.lit);
            self.segments
                .push(Segment::literal(text, Span::new(self.seg_start, end)));
        }
        self.seg_start = end;
    }

    fn push_quotes(&mut self, quote: u8, count: u32) {
        for _ in 0..count {
            self.lit.push(char::from(quote));
        }
    }

    fn slice(&self, start: u32, end: u32) -> &'a str {
        &self.source[start as usize..end as usize]
    }
}

#[cfg(test)]
mod tests;

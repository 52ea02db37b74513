//! Treble Lexer - scanner for triple-quoted template sources.
//!
//! Turns raw template source (including its opening and closing
//! delimiters) into an ordered sequence of [`Segment`]s:
//!
//! - literal text, with delimiter escapes and line continuations
//!   already applied
//! - interpolation sources, the text between `${` and the first `}`
//!
//! The scanner is an explicit finite-state machine with one to two
//! bytes of lookahead over a sentinel-terminated buffer. The hot path
//! (skipping ordinary literal text) is memchr-accelerated.
//!
//! # Template format
//!
//! - Delimiter: exactly three consecutive identical quote characters
//!   (`'` or `"`), inferred from the first byte of the source.
//! - A run of `n >= 3` delimiter quotes inside the body emits `n - 3`
//!   literal quotes; the run is the terminator only when it is
//!   immediately followed by end of source.
//! - `\${` emits the literal text `${` without opening an
//!   interpolation. A backslash immediately before a line break
//!   removes both. Any other backslash is literal.
//!
//! Malformed input (missing opening delimiter, end of source inside
//! the body or inside an interpolation) fails with [`ScanError`]
//! carrying the byte offset where scanning stopped.

mod cursor;
mod error;
mod scanner;
mod source_buffer;

pub use cursor::Cursor;
pub use error::{
    missing_opening_delimiter, unterminated_interpolation, unterminated_template, ScanError,
    ScanErrorKind,
};
pub use scanner::scan;
pub use source_buffer::SourceBuffer;

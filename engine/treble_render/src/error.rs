//! The public render error.

use thiserror::Error;
use treble_eval::EvalError;
use treble_ir::Span;
use treble_lexer::ScanError;

/// Failure modes of [`Template::render`](crate::Template::render).
///
/// Either the template source itself is malformed, or one of its
/// interpolations failed to parse or evaluate. All failures surface
/// synchronously; rendering never produces partial output.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The template source is malformed (bad or missing delimiter,
    /// unterminated interpolation span).
    #[error("malformed template: {0}")]
    Malformed(#[from] ScanError),
    /// An interpolation failed; the span locates the `${...}` region
    /// in the template source.
    #[error("interpolation at {span}: {source}")]
    Eval {
        span: Span,
        #[source]
        source: EvalError,
    },
}

//! Typed scan errors.
//!
//! Every scan failure is a malformed template: the error carries the
//! kind and the byte offset where scanning stopped. Scan errors are
//! not recoverable; rendering aborts.

use std::fmt;

/// Kind of malformed-template failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// The source does not begin with a run of three identical quote
    /// characters.
    MissingOpeningDelimiter,
    /// End of source reached while scanning literal text, with no
    /// terminating three-quote run.
    UnterminatedTemplate,
    /// End of source reached inside a `${...}` interpolation span.
    UnterminatedInterpolation,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOpeningDelimiter => {
                write!(f, "expected opening three-quote delimiter")
            }
            Self::UnterminatedTemplate => write!(f, "unterminated template"),
            Self::UnterminatedInterpolation => write!(f, "unterminated interpolation"),
        }
    }
}

/// Scan failure with the byte offset where scanning stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanError {
    /// Structured failure category.
    pub kind: ScanErrorKind,
    /// Byte offset into the template source where scanning stopped.
    pub offset: u32,
}

impl ScanError {
    fn new(kind: ScanErrorKind, offset: u32) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.kind, self.offset)
    }
}

impl std::error::Error for ScanError {}

/// The source does not begin with a three-quote delimiter.
#[cold]
pub fn missing_opening_delimiter(offset: u32) -> ScanError {
    ScanError::new(ScanErrorKind::MissingOpeningDelimiter, offset)
}

/// End of source reached without a terminating three-quote run.
#[cold]
pub fn unterminated_template(offset: u32) -> ScanError {
    ScanError::new(ScanErrorKind::UnterminatedTemplate, offset)
}

/// End of source reached inside an interpolation span.
#[cold]
pub fn unterminated_interpolation(offset: u32) -> ScanError {
    ScanError::new(ScanErrorKind::UnterminatedInterpolation, offset)
}

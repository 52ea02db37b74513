//! Templates and the render entry point.

use treble_eval::{evaluate_source, Environment};
use treble_ir::Segment;
use treble_lexer::{scan, ScanError};

use crate::error::RenderError;

/// An immutable triple-quoted template.
///
/// Holds the raw source, delimiters included. A template is parsed on
/// each render call; re-scanning is cheap and idempotent, and the
/// template itself carries no mutable state, so one instance can be
/// shared across threads and rendered concurrently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wrap raw template source, delimiters included.
    ///
    /// The source is not validated here; scan failures surface from
    /// [`render`](Self::render) or [`segments`](Self::segments).
    pub fn new(source: impl Into<String>) -> Self {
        Template {
            source: source.into(),
        }
    }

    /// The raw source, delimiters included.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scan the template into segments.
    ///
    /// Exposed so callers rendering one template many times can cache
    /// the segment list; [`render`](Self::render) itself re-scans per
    /// call.
    pub fn segments(&self) -> Result<Vec<Segment>, ScanError> {
        scan(&self.source)
    }

    /// Render the template against a binding environment.
    ///
    /// Drives the scanner once, evaluates each interpolation in
    /// order, and concatenates all segment outputs.
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = self.source.len()))]
    pub fn render(&self, env: &Environment) -> Result<String, RenderError> {
        let segments = self.segments()?;
        let mut out = String::with_capacity(self.source.len());
        for segment in &segments {
            match segment {
                Segment::Literal { text, .. } => out.push_str(text),
                Segment::Interpolation { source, span } => {
                    let value = evaluate_source(source, env)
                        .map_err(|err| RenderError::Eval {
                            span: *span,
                            source: err,
                        })?;
                    out.push_str(&value.to_string());
                }
            }
        }
        tracing::trace!(
            segments = segments.len(),
            rendered_len = out.len(),
            "template rendered"
        );
        Ok(out)
    }
}

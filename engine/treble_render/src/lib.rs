//! Treble Render - the public face of the treble template engine.
//!
//! A [`Template`] wraps raw triple-quoted source. Rendering drives the
//! pipeline:
//!
//! 1. the scanner splits the body into literal and interpolation
//!    segments (`treble_lexer`),
//! 2. each interpolation source is parsed and evaluated against the
//!    caller's [`Environment`] (`treble_eval`),
//! 3. all segment outputs are concatenated in order.
//!
//! Rendering is a pure function of template and bindings: no I/O, no
//! shared mutable state, and either a complete string or a
//! [`RenderError`], never partial output.
//!
//! ```
//! use treble_render::{Environment, Template, Value};
//!
//! let template = Template::new("'''Hello ${name}!'''");
//! let mut env = Environment::new();
//! env.define("name", Value::string("world"));
//! assert_eq!(template.render(&env).unwrap(), "Hello world!");
//! ```

mod error;
mod template;

pub use error::RenderError;
pub use template::Template;

// Re-export the pipeline types callers need alongside `Template`.
pub use treble_eval::{Environment, EvalError, EvalErrorKind, Value};
pub use treble_ir::{Segment, Span};
pub use treble_lexer::{ScanError, ScanErrorKind};

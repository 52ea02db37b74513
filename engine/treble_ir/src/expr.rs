//! Interpolation expression AST.

/// Parsed form of one interpolation source.
///
/// The grammar is deliberately closed: identifier lookup, property
/// access, zero-argument method calls from a fixed set, quoted string
/// constants, and left-to-right concatenation. Nothing else is
/// representable, so nothing else can be evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// A binding name, resolved against the render environment.
    Ident(String),
    /// A quoted string constant.
    StrLit(String),
    /// Field access on a record value: `user.name`.
    Property { recv: Box<Expr>, name: String },
    /// Zero-argument method call: `title.toUpperCase()`.
    MethodCall { recv: Box<Expr>, name: String },
    /// Left-to-right concatenation: `a + b + c`.
    ///
    /// Always holds two or more operands; a single operand is
    /// represented by the operand itself.
    Concat(Vec<Expr>),
}

impl Expr {
    /// Identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// String constant expression.
    pub fn str_lit(value: impl Into<String>) -> Self {
        Expr::StrLit(value.into())
    }

    /// Property access expression.
    pub fn property(recv: Expr, name: impl Into<String>) -> Self {
        Expr::Property {
            recv: Box::new(recv),
            name: name.into(),
        }
    }

    /// Zero-argument method call expression.
    pub fn method_call(recv: Expr, name: impl Into<String>) -> Self {
        Expr::MethodCall {
            recv: Box::new(recv),
            name: name.into(),
        }
    }
}

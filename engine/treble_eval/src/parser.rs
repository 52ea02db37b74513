//! Recursive-descent parser for interpolation sources.
//!
//! Grammar (left-to-right, concatenation is the only operator):
//!
//! ```text
//! expr    := term ( '+' term )*
//! term    := string | postfix
//! postfix := ident ( '.' ident '(' ')' | '.' ident )*
//! string  := '\'' chars '\'' | '"' chars '"'
//! ident   := [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! Whitespace is allowed around operators and at the ends of the
//! source. Member access chains are written tight (`a.b.trim()`).
//! Offsets in syntax errors are byte positions within the
//! interpolation source, not within the enclosing template.

use treble_ir::Expr;

use crate::errors::{invalid_syntax, EvalError};

/// Parse one interpolation source into an expression.
///
/// The source is the text between `${` and `}`, exactly as the lexer
/// produced it.
pub fn parse_expression(source: &str) -> Result<Expr, EvalError> {
    let mut parser = Parser { src: source, pos: 0 };
    parser.skip_ws();
    if parser.at_end() {
        return Err(invalid_syntax("empty interpolation", parser.offset()));
    }
    let expr = parser.expr()?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(parser.unexpected_char());
    }
    Ok(expr)
}

struct Parser<'src> {
    src: &'src str,
    pos: usize,
}

impl Parser<'_> {
    // ─── Grammar productions ───────────────────────────────────

    fn expr(&mut self) -> Result<Expr, EvalError> {
        let first = self.term()?;
        let mut operands = vec![first];
        loop {
            self.skip_ws();
            if self.current() != b'+' {
                break;
            }
            self.pos += 1;
            self.skip_ws();
            operands.push(self.term()?);
        }
        if operands.len() == 1 {
            // Single operand: the term itself, not a concatenation.
            Ok(operands.remove(0))
        } else {
            Ok(Expr::Concat(operands))
        }
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        match self.current() {
            b'\'' | b'"' => self.string_lit(),
            b if is_ident_start(b) => self.postfix(),
            0 => Err(invalid_syntax("expected expression", self.offset())),
            _ => Err(self.unexpected_char()),
        }
    }

    /// An identifier followed by any number of member accesses, each
    /// either a zero-argument call or a property.
    fn postfix(&mut self) -> Result<Expr, EvalError> {
        let mut expr = Expr::Ident(self.ident());
        while self.current() == b'.' {
            self.pos += 1;
            if !is_ident_start(self.current()) {
                return Err(invalid_syntax("expected member name after `.`", self.offset()));
            }
            let member = self.ident();
            if self.current() == b'(' {
                self.pos += 1;
                if self.current() != b')' {
                    return Err(invalid_syntax(
                        "method calls take no arguments",
                        self.offset(),
                    ));
                }
                self.pos += 1;
                expr = Expr::method_call(expr, member);
            } else {
                expr = Expr::property(expr, member);
            }
        }
        Ok(expr)
    }

    /// A quoted string constant. The closing quote must match the
    /// opener; the only escapes are `\'`, `\"`, and `\\`.
    fn string_lit(&mut self) -> Result<Expr, EvalError> {
        let quote = self.current();
        self.pos += 1;
        let mut text = String::new();
        loop {
            match self.current() {
                0 => {
                    return Err(invalid_syntax("unterminated string literal", self.offset()));
                }
                b'\\' => match self.peek() {
                    b'\'' | b'"' | b'\\' => {
                        text.push(char::from(self.peek()));
                        self.pos += 2;
                    }
                    _ => {
                        return Err(invalid_syntax(
                            "unsupported escape in string literal",
                            self.offset(),
                        ));
                    }
                },
                b if b == quote => {
                    self.pos += 1;
                    return Ok(Expr::StrLit(text));
                }
                _ => {
                    // Copy one full character, however many bytes wide.
                    let ch = self.current_char();
                    text.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while is_ident_continue(self.current()) {
            self.pos += 1;
        }
        self.src[start..self.pos].to_string()
    }

    // ─── Cursor helpers ────────────────────────────────────────

    /// Byte at the current position, or 0 at end of source.
    fn current(&self) -> u8 {
        self.src.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Byte one ahead of current, or 0 past end of source.
    fn peek(&self) -> u8 {
        self.src.as_bytes().get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Full character at the current position.
    ///
    /// Only called when `current()` is nonzero, so a character exists.
    fn current_char(&self) -> char {
        self.src[self.pos..].chars().next().unwrap_or('\u{FFFD}')
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_ws(&mut self) {
        while matches!(self.current(), b' ' | b'\t' | b'\n' | b'\r') {
            self.pos += 1;
        }
    }

    fn offset(&self) -> u32 {
        u32::try_from(self.pos).unwrap_or(u32::MAX)
    }

    fn unexpected_char(&self) -> EvalError {
        invalid_syntax(
            format!("unexpected character `{}`", self.current_char()),
            self.offset(),
        )
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

pub mod binary;
pub mod call;
pub mod error;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod token;
pub mod unary;

use deriv_error::ErrorKind;
use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value.
///
/// This function can also catch fatal errors and immediately short-circuit the parsing
/// process.
///
/// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
/// value is returned. Otherwise, the stream is left unchanged and the error of the last
/// attempted parsing function is returned.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                err => err,
            }
        )+
    }};
}

/// A high-level parser for arithmetic expressions. This is the type to use to parse an arbitrary
/// piece of source code into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    ///
    /// Fails if the source contains a character that is not part of any token.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
        })
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Sets the cursor of this parser to the position of another parser, typically one cloned
    /// from this parser to parse ahead.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;

        // trailing whitespace is fine; anything else is not
        while let Some(token) = self.tokens.get(self.cursor) {
            if token.is_whitespace() {
                self.cursor += 1;
            } else {
                return Err(self.error(kind::ExpectedEof));
            }
        }

        Ok(value)
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binary::Binary;
    use call::{Call, FuncKind};
    use expr::Expr;
    use literal::{Literal, LitNum, LitSym};
    use paren::Paren;
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
    use unary::Unary;

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum {
            value: 16.0,
            span: 0..2,
        })));
    }

    #[test]
    fn literal_float() {
        let mut parser = Parser::new("3.14").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum {
            value: 3.14,
            span: 0..4,
        })));
    }

    #[test]
    fn literal_symbol() {
        let mut parser = Parser::new("pi").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Symbol(LitSym {
            name: "pi".to_string(),
            span: 0..2,
        })));
    }

    #[test]
    fn binary_left_associativity() {
        let mut parser = Parser::new("3 * x * 5").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 0..1,
                }))),
                op: BinOp {
                    kind: BinOpKind::Mul,
                    span: 2..3,
                },
                rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 4..5,
                }))),
                span: 0..5,
            })),
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 6..7,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 5.0,
                span: 8..9,
            }))),
            span: 0..9,
        }));
    }

    #[test]
    fn binary_mixed_precedence() {
        let mut parser = Parser::new("1 + 2 * 3").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 1.0,
                span: 0..1,
            }))),
            op: BinOp {
                kind: BinOpKind::Add,
                span: 2..3,
            },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 2.0,
                    span: 4..5,
                }))),
                op: BinOp {
                    kind: BinOpKind::Mul,
                    span: 6..7,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 8..9,
                }))),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn pow_left_associativity() {
        let mut parser = Parser::new("x ^ 2 ^ 3").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 0..1,
                }))),
                op: BinOp {
                    kind: BinOpKind::Pow,
                    span: 2..3,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 2.0,
                    span: 4..5,
                }))),
                span: 0..5,
            })),
            op: BinOp {
                kind: BinOpKind::Pow,
                span: 6..7,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 3.0,
                span: 8..9,
            }))),
            span: 0..9,
        }));
    }

    #[test]
    fn unary_right_associativity() {
        let mut parser = Parser::new("- - x").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Unary(Unary {
                operand: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 4..5,
                }))),
                op: UnaryOp {
                    kind: UnaryOpKind::Neg,
                    span: 2..3,
                },
                span: 2..5,
            })),
            op: UnaryOp {
                kind: UnaryOpKind::Neg,
                span: 0..1,
            },
            span: 0..5,
        }));
    }

    #[test]
    fn unary_binds_tighter_than_pow() {
        let mut parser = Parser::new("-x^2").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Unary(Unary {
                operand: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 1..2,
                }))),
                op: UnaryOp {
                    kind: UnaryOpKind::Neg,
                    span: 0..1,
                },
                span: 0..2,
            })),
            op: BinOp {
                kind: BinOpKind::Pow,
                span: 2..3,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 2.0,
                span: 3..4,
            }))),
            span: 0..4,
        }));
    }

    #[test]
    fn function_call() {
        let mut parser = Parser::new("sin(x)").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Call(Call {
            func: FuncKind::Sin,
            arg: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 4..5,
            }))),
            span: 0..6,
        }));
    }

    #[test]
    fn nested_function_call() {
        let mut parser = Parser::new("ln(cos(x) + 1)").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Call(Call {
            func: FuncKind::Ln,
            arg: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Call(Call {
                    func: FuncKind::Cos,
                    arg: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                        name: "x".to_string(),
                        span: 7..8,
                    }))),
                    span: 3..9,
                })),
                op: BinOp {
                    kind: BinOpKind::Add,
                    span: 10..11,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 1.0,
                    span: 12..13,
                }))),
                span: 3..13,
            })),
            span: 0..14,
        }));
    }

    #[test]
    fn function_requires_parenthesis() {
        let mut parser = Parser::new("sin x").unwrap();
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.fatal);
        assert!(err.kind.as_any().downcast_ref::<kind::UnexpectedToken>().is_some());
    }

    #[test]
    fn parenthesized() {
        let mut parser = Parser::new("(1 + 2) * x").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Paren(Paren {
                expr: Box::new(Expr::Binary(Binary {
                    lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 1.0,
                        span: 1..2,
                    }))),
                    op: BinOp {
                        kind: BinOpKind::Add,
                        span: 3..4,
                    },
                    rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 2.0,
                        span: 5..6,
                    }))),
                    span: 1..6,
                })),
                span: 0..7,
            })),
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 8..9,
            },
            rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 10..11,
            }))),
            span: 0..11,
        }));
    }

    #[test]
    fn unclosed_opening_parenthesis() {
        let mut parser = Parser::new("(1 + 2").unwrap();
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(err.spans, vec![0..1]);
        assert_eq!(
            err.kind.as_any().downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: true }),
        );
    }

    #[test]
    fn stray_closing_parenthesis() {
        let mut parser = Parser::new(") + 1").unwrap();
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(
            err.kind.as_any().downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: false }),
        );
    }

    #[test]
    fn trailing_tokens_rejected() {
        let mut parser = Parser::new("1 + 2 3").unwrap();
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert_eq!(err.spans, vec![6..7]);
        assert!(err.kind.as_any().downcast_ref::<kind::ExpectedEof>().is_some());
    }

    #[test]
    fn trailing_whitespace_accepted() {
        let mut parser = Parser::new("  1 + 2  ").unwrap();
        assert!(parser.try_parse_full::<Expr>().is_ok());
    }

    #[test]
    fn empty_input() {
        let mut parser = Parser::new("").unwrap();
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<kind::UnexpectedEof>().is_some());
    }

    #[test]
    fn unrecognized_character() {
        let err = Parser::new("1 # 2").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        assert!(err.kind.as_any().downcast_ref::<kind::UnrecognizedCharacter>().is_some());
    }
}

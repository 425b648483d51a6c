use std::ops::Range;
use crate::tokenizer::TokenKind;
use super::{
    error::{kind, Error},
    expr::Expr,
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed set of functions that can be called.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuncKind {
    Sin,
    Cos,
    Ln,
    Exp,
}

/// A function call, such as `sin(x)`.
///
/// Function names are reserved words; the tokenizer produces a dedicated token for each of them,
/// so they can never be parsed as variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function to call.
    pub func: FuncKind,

    /// The argument to the function.
    pub arg: Box<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let func = match token.kind {
            TokenKind::Sin => FuncKind::Sin,
            TokenKind::Cos => FuncKind::Cos,
            TokenKind::Ln => FuncKind::Ln,
            TokenKind::Exp => FuncKind::Exp,
            _ => return Err(Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                expected: &[TokenKind::Sin, TokenKind::Cos, TokenKind::Ln, TokenKind::Exp],
                found: token.kind,
            })),
        };

        // a function token must be immediately followed by a parenthesized argument
        let open_paren = input.try_parse::<OpenParen>().map_err(|mut err| {
            err.fatal = true;
            err
        })?;
        let arg = input.try_parse::<Expr>()?;
        let close_paren = input.try_parse::<CloseParen>().map_err(|_| {
            Error::new_fatal(vec![open_paren.span.clone()], kind::UnclosedParenthesis { opening: true })
        })?;

        Ok(Self {
            func,
            arg: Box::new(arg),
            span: token.span.start..close_paren.span.end,
        })
    }
}

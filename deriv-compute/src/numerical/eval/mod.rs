//! The [`Eval`] trait, implemented for every node of the parse tree.

mod binary;
mod call;
mod literal;
mod unary;

use crate::numerical::{ctxt::Ctxt, error::Error};
use deriv_parser::parser::expr::Expr;

/// Any AST node that can be evaluated to a numeric value.
pub trait Eval {
    /// Evaluate the node under the given context, producing a value or an error.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.expr.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}

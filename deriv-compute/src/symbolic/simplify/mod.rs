//! Algebraic simplification of symbolic expressions.
//!
//! The simplifier makes a single bottom-up pass: children are simplified first, then a fixed
//! list of rules is tried at the current node, in priority order. The output of a rule is never
//! re-examined, so the result is not a normal form; `(x + x) + x` simplifies to `(2 * x) + x`.

pub mod rules;

use crate::numerical::error::Error;
use super::expr::Expr;

/// Simplifies the given expression with a single bottom-up pass.
///
/// Fails with [`DivisionByZero`](crate::numerical::error::kind::DivisionByZero) if constant
/// folding encounters a division by exactly zero.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => Ok(expr.clone()),
        Expr::Unary(op, operand) => {
            // unary nodes recurse into their operand, but have no rules of their own
            Ok(Expr::Unary(*op, Box::new(simplify(operand)?)))
        },
        Expr::Binary(op, lhs, rhs) => {
            let lhs = simplify(lhs)?;
            let rhs = simplify(rhs)?;

            if let Some(folded) = rules::fold_constants(*op, &lhs, &rhs)? {
                return Ok(folded);
            }
            if let Some(combined) = rules::combine_same_variable(*op, &lhs, &rhs) {
                return Ok(combined);
            }
            if let Some(eliminated) = rules::eliminate_identity(*op, &lhs, &rhs) {
                return Ok(eliminated);
            }

            Ok(Expr::Binary(*op, Box::new(lhs), Box::new(rhs)))
        },
    }
}

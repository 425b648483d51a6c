//! The rewrite rules applied by the simplifier, in priority order.

use crate::numerical::error::{kind, Error};
use crate::symbolic::expr::{BinaryOp, Expr};

/// Folds a binary operation whose operands are both constants into a single constant.
///
/// Division by exactly zero is an error here, the same kind that evaluation reports.
pub fn fold_constants(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Result<Option<Expr>, Error> {
    let (Expr::Constant(a), Expr::Constant(b)) = (lhs, rhs) else {
        return Ok(None);
    };

    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if *b == 0.0 {
                return Err(Error::new(vec![], kind::DivisionByZero));
            }
            a / b
        },
        BinaryOp::Pow => a.powf(*b),
    };

    Ok(Some(Expr::Constant(value)))
}

/// Combines `x op x` for a variable `x` into a simpler form.
pub fn combine_same_variable(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    let (Expr::Variable(a), Expr::Variable(b)) = (lhs, rhs) else {
        return None;
    };
    if a != b {
        return None;
    }

    match op {
        BinaryOp::Add => Some(Expr::Constant(2.0) * lhs.clone()),
        BinaryOp::Sub => Some(Expr::Constant(0.0)),
        BinaryOp::Mul => Some(lhs.clone().pow(Expr::Constant(2.0))),
        BinaryOp::Div => Some(Expr::Constant(1.0)),
        BinaryOp::Pow => None,
    }
}

/// Eliminates identity and annihilator operands.
pub fn eliminate_identity(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    let lhs_is = |value: f64| *lhs == Expr::Constant(value);
    let rhs_is = |value: f64| *rhs == Expr::Constant(value);

    match op {
        BinaryOp::Add => {
            if lhs_is(0.0) {
                Some(rhs.clone())
            } else if rhs_is(0.0) {
                Some(lhs.clone())
            } else {
                None
            }
        },
        BinaryOp::Sub => {
            if rhs_is(0.0) {
                Some(lhs.clone())
            } else if lhs_is(0.0) {
                Some(-rhs.clone())
            } else {
                None
            }
        },
        BinaryOp::Mul => {
            if lhs_is(0.0) || rhs_is(0.0) {
                Some(Expr::Constant(0.0))
            } else if lhs_is(1.0) {
                Some(rhs.clone())
            } else if rhs_is(1.0) {
                Some(lhs.clone())
            } else {
                None
            }
        },
        BinaryOp::Div => {
            if lhs_is(0.0) {
                Some(Expr::Constant(0.0))
            } else if rhs_is(1.0) {
                Some(lhs.clone())
            } else {
                None
            }
        },
        BinaryOp::Pow => {
            if rhs_is(0.0) {
                Some(Expr::Constant(1.0))
            } else if rhs_is(1.0) {
                Some(lhs.clone())
            } else if lhs_is(0.0) {
                Some(Expr::Constant(0.0))
            } else if lhs_is(1.0) {
                Some(Expr::Constant(1.0))
            } else {
                None
            }
        },
    }
}

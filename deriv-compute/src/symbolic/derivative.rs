//! Symbolic differentiation.

use super::expr::{BinaryOp, Expr, UnaryOp};

/// Produces the derivative of the given expression with respect to the variable `var`.
///
/// The resulting tree is correct but not tidy; pass it through
/// [`simplify`](crate::symbolic::simplify::simplify) to clean it up.
pub fn derivative(expr: &Expr, var: &str) -> Expr {
    match expr {
        Expr::Constant(_) => Expr::Constant(0.0),
        Expr::Variable(name) => {
            if name == var {
                Expr::Constant(1.0)
            } else {
                Expr::Constant(0.0)
            }
        },
        Expr::Unary(op, operand) => {
            // every function rule carries the chain-rule factor d(operand)
            let d_operand = derivative(operand, var);
            let operand = operand.as_ref().clone();
            match op {
                UnaryOp::Neg => -d_operand,
                UnaryOp::Sin => operand.cos() * d_operand,
                UnaryOp::Cos => -(operand.sin() * d_operand),
                UnaryOp::Ln => d_operand / operand,
                UnaryOp::Exp => operand.exp() * d_operand,
            }
        },
        Expr::Binary(op, lhs, rhs) => {
            let (a, b) = (lhs.as_ref(), rhs.as_ref());
            match op {
                BinaryOp::Add => derivative(a, var) + derivative(b, var),
                BinaryOp::Sub => derivative(a, var) - derivative(b, var),
                BinaryOp::Mul => {
                    derivative(a, var) * b.clone() + a.clone() * derivative(b, var)
                },
                BinaryOp::Div => {
                    (derivative(a, var) * b.clone() - a.clone() * derivative(b, var))
                        / b.clone().pow(Expr::Constant(2.0))
                },
                BinaryOp::Pow => pow_rule(a, b, var),
            }
        },
    }
}

/// The derivative of `a ^ b`, split by which operands mention `var`.
///
/// The split is decided by scanning each whole operand subtree, not just its root node, so
/// cases like `(x + 1) ^ 2` take the power rule and `2 ^ (x * 3)` the exponential rule.
fn pow_rule(a: &Expr, b: &Expr, var: &str) -> Expr {
    let base_has_var = a.contains_variable(var);
    let exponent_has_var = b.contains_variable(var);

    match (base_has_var, exponent_has_var) {
        // the whole node is constant with respect to `var`
        (false, false) => Expr::Constant(0.0),

        // power rule: d(a^b) = b * a^(b - 1) * d(a)
        (true, false) => {
            b.clone() * a.clone().pow(b.clone() - Expr::Constant(1.0)) * derivative(a, var)
        },

        // exponential rule: d(a^b) = a^b * d(b) * ln(a)
        (false, true) => a.clone().pow(b.clone()) * derivative(b, var) * a.clone().ln(),

        // generalized power rule: d(a^b) = a^b * (d(b) * ln(a) + b * d(a) / a)
        (true, true) => {
            a.clone().pow(b.clone())
                * (derivative(b, var) * a.clone().ln()
                    + b.clone() * derivative(a, var) / a.clone())
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use deriv_parser::parser::{expr::Expr as AstExpr, Parser};

    /// Parses the source and evaluates it at the given value of `x`.
    fn eval_x(source: &str, x: f64) -> f64 {
        let mut parser = Parser::new(source).unwrap();
        let ast = parser.try_parse_full::<AstExpr>().unwrap();

        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", x);
        ast.eval(&ctxt).unwrap()
    }

    /// Approximates the derivative of the expression at `x` with a central finite difference.
    fn finite_difference(source: &str, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (eval_x(source, x + DX) - eval_x(source, x - DX)) / (2.0 * DX)
    }

    /// Differentiates `source` symbolically with respect to `x`, renders the result, reparses
    /// it, and compares its value against a finite-difference approximation at each point.
    fn test_derivative(source: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let mut parser = Parser::new(source).unwrap();
        let ast = parser.try_parse_full::<AstExpr>().unwrap();
        let rendered = derivative(&Expr::from(ast), "x").to_string();

        for point in points {
            let symbolic = eval_x(&rendered, point);
            let numeric = finite_difference(source, point);
            assert!(
                (symbolic - numeric).abs() < TOL,
                "for `{source}` at x={point}: symbolic derivative {symbolic}, \
                 finite difference {numeric}",
            );
        }
    }

    #[test]
    fn power_rule() {
        test_derivative("x^2 + x + 1", [0.0, 1.0, 2.0, 5.0, 8.0]);
    }

    #[test]
    fn power_rule_with_compound_base() {
        test_derivative("(x + 1) ^ 3", [0.0, 1.0, 2.0]);
    }

    #[test]
    fn product_rule() {
        test_derivative("x * sin(x)", [0.0, 0.5, 1.0, 2.0]);
    }

    #[test]
    fn quotient_rule() {
        test_derivative("(x + 1) / (x^2 + 1)", [0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn chain_rule() {
        test_derivative("sin(x^2)", [0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn cosine() {
        test_derivative("cos(2 * x)", [0.0, 0.5, 1.0]);
    }

    #[test]
    fn logarithm() {
        test_derivative("ln(x^2 + 1)", [0.0, 1.0, 2.0]);
    }

    #[test]
    fn exponential() {
        test_derivative("exp(2 * x)", [0.0, 0.5, 1.0]);
    }

    #[test]
    fn exponent_contains_variable() {
        test_derivative("2 ^ x", [0.0, 1.0, 2.0]);
    }

    #[test]
    fn generalized_power() {
        test_derivative("x ^ x", [0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn negation() {
        test_derivative("-x^2 + x", [0.0, 1.0, 2.0]);
    }

    #[test]
    fn variable_rule() {
        assert_eq!(derivative(&Expr::var("x"), "x"), Expr::Constant(1.0));
        assert_eq!(derivative(&Expr::var("y"), "x"), Expr::Constant(0.0));
    }

    #[test]
    fn constant_rule() {
        assert_eq!(derivative(&Expr::Constant(42.0), "x"), Expr::Constant(0.0));
    }

    #[test]
    fn sine_shape() {
        // d(sin x) = cos(x) * d(x), unsimplified
        assert_eq!(
            derivative(&Expr::var("x").sin(), "x"),
            Expr::var("x").cos() * Expr::Constant(1.0),
        );
    }

    #[test]
    fn power_free_of_variable_is_constant() {
        let expr = Expr::var("y").pow(Expr::Constant(3.0));
        assert_eq!(derivative(&expr, "x"), Expr::Constant(0.0));
    }

    #[test]
    fn derivative_does_not_consume_input() {
        let expr = Expr::var("x").pow(Expr::Constant(2.0));
        let _ = derivative(&expr, "x");
        assert_eq!(expr, Expr::var("x").pow(Expr::Constant(2.0)));
    }
}

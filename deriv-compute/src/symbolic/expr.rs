use deriv_parser::parser::{
    call::FuncKind,
    expr::Expr as AstExpr,
    literal::Literal,
    token::op::{BinOpKind, UnaryOpKind},
};
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A unary operation on a symbolic expression.
///
/// Unlike the parser, which distinguishes operators from function calls, the symbolic tree
/// treats the single-argument functions as unary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Sin,
    Cos,
    Ln,
    Exp,
}

/// A binary operation on a symbolic expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        };
        write!(f, "{}", symbol)
    }
}

/// A span-less symbolic expression tree.
///
/// This is the value that the symbolic algorithms (differentiation, simplification,
/// substitution) transform. The tree is immutable and owns its children; every transformation
/// returns a new tree. Parenthesis nodes from the parser's AST do not survive the conversion,
/// since grouping is implied by the tree structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Constant(f64),

    /// A reference to a variable.
    Variable(String),

    /// A unary operation applied to an expression.
    Unary(UnaryOp, Box<Expr>),

    /// A binary operation applied to two expressions.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a variable expression with the given name.
    pub fn var(name: &str) -> Expr {
        Expr::Variable(name.to_string())
    }

    /// Raises this expression to the given exponent.
    pub fn pow(self, exponent: Expr) -> Expr {
        Expr::Binary(BinaryOp::Pow, Box::new(self), Box::new(exponent))
    }

    /// Takes the sine of this expression.
    pub fn sin(self) -> Expr {
        Expr::Unary(UnaryOp::Sin, Box::new(self))
    }

    /// Takes the cosine of this expression.
    pub fn cos(self) -> Expr {
        Expr::Unary(UnaryOp::Cos, Box::new(self))
    }

    /// Takes the natural logarithm of this expression.
    pub fn ln(self) -> Expr {
        Expr::Unary(UnaryOp::Ln, Box::new(self))
    }

    /// Raises `e` to this expression.
    pub fn exp(self) -> Expr {
        Expr::Unary(UnaryOp::Exp, Box::new(self))
    }

    /// Returns true if the variable with the given name appears anywhere in this expression.
    ///
    /// The whole tree is scanned, not just the root node.
    pub fn contains_variable(&self, var: &str) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Variable(name) => name == var,
            Expr::Unary(_, operand) => operand.contains_variable(var),
            Expr::Binary(_, lhs, rhs) => {
                lhs.contains_variable(var) || rhs.contains_variable(var)
            },
        }
    }

    /// Returns a new expression with every occurrence of the variable with the given name
    /// replaced by a constant.
    pub fn substitute(&self, var: &str, value: f64) -> Expr {
        match self {
            Expr::Constant(_) => self.clone(),
            Expr::Variable(name) => {
                if name == var {
                    Expr::Constant(value)
                } else {
                    self.clone()
                }
            },
            Expr::Unary(op, operand) => {
                Expr::Unary(*op, Box::new(operand.substitute(var, value)))
            },
            Expr::Binary(op, lhs, rhs) => Expr::Binary(
                *op,
                Box::new(lhs.substitute(var, value)),
                Box::new(rhs.substitute(var, value)),
            ),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Expr::Constant(num.value),
            AstExpr::Literal(Literal::Symbol(sym)) => Expr::Variable(sym.name),
            AstExpr::Paren(paren) => (*paren.expr).into(),
            AstExpr::Call(call) => {
                let op = match call.func {
                    FuncKind::Sin => UnaryOp::Sin,
                    FuncKind::Cos => UnaryOp::Cos,
                    FuncKind::Ln => UnaryOp::Ln,
                    FuncKind::Exp => UnaryOp::Exp,
                };
                Expr::Unary(op, Box::new((*call.arg).into()))
            },
            AstExpr::Unary(unary) => {
                let op = match unary.op.kind {
                    UnaryOpKind::Neg => UnaryOp::Neg,
                };
                Expr::Unary(op, Box::new((*unary.operand).into()))
            },
            AstExpr::Binary(binary) => {
                let op = match binary.op.kind {
                    BinOpKind::Add => BinaryOp::Add,
                    BinOpKind::Sub => BinaryOp::Sub,
                    BinOpKind::Mul => BinaryOp::Mul,
                    BinOpKind::Div => BinaryOp::Div,
                    BinOpKind::Pow => BinaryOp::Pow,
                };
                Expr::Binary(op, Box::new((*binary.lhs).into()), Box::new((*binary.rhs).into()))
            },
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Add, Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Sub, Box::new(self), Box::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Mul, Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Div, Box::new(self), Box::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Unary(UnaryOp::Neg, Box::new(self))
    }
}

impl Display for Expr {
    /// Renders the expression to canonical text.
    ///
    /// Every binary node is parenthesized, so the output parses back to a tree that evaluates
    /// identically; no precedence reasoning is needed to read or reparse it. Constants use
    /// `f64`'s own formatting, so integral values print with no fractional part.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Unary(op, operand) => match op {
                UnaryOp::Neg => write!(f, "-{}", operand),
                UnaryOp::Sin => write!(f, "sin({})", operand),
                UnaryOp::Cos => write!(f, "cos({})", operand),
                UnaryOp::Ln => write!(f, "ln({})", operand),
                UnaryOp::Exp => write!(f, "exp({})", operand),
            },
            Expr::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use deriv_parser::parser::Parser;

    fn parse(source: &str) -> Expr {
        let mut parser = Parser::new(source).unwrap();
        Expr::from(parser.try_parse_full::<AstExpr>().unwrap())
    }

    #[test]
    fn conversion_drops_parens_and_spans() {
        assert_eq!(
            parse("-(x + 1) * sin(x)"),
            -(Expr::var("x") + Expr::Constant(1.0)) * Expr::var("x").sin(),
        );
    }

    #[test]
    fn conversion_maps_functions_to_unary_ops() {
        assert_eq!(parse("ln(exp(x))"), Expr::var("x").exp().ln());
    }

    #[test]
    fn contains_variable_scans_deep() {
        let expr = parse("1 + sin(y * (x ^ 2))");
        assert!(expr.contains_variable("x"));
        assert!(expr.contains_variable("y"));
        assert!(!expr.contains_variable("z"));
    }

    #[test]
    fn substitute_replaces_every_occurrence() {
        let expr = parse("x * x + y");
        assert_eq!(
            expr.substitute("x", 3.0),
            Expr::Constant(3.0) * Expr::Constant(3.0) + Expr::var("y"),
        );

        // the original is untouched
        assert!(expr.contains_variable("x"));
    }

    #[test]
    fn substitute_matches_binding() {
        use crate::numerical::{ctxt::Ctxt, eval::Eval};

        let source = "x^2 + 3 * x";
        let mut parser = Parser::new(source).unwrap();
        let ast = parser.try_parse_full::<AstExpr>().unwrap();

        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 2.0);
        let bound = ast.eval(&ctxt).unwrap();

        // substituting first, then evaluating with nothing bound, gives the same value
        let substituted = Expr::from(ast).substitute("x", 2.0).to_string();
        let mut parser = Parser::new(&substituted).unwrap();
        let reparsed = parser.try_parse_full::<AstExpr>().unwrap();
        assert_eq!(reparsed.eval(&Ctxt::new()).unwrap(), bound);
    }

    #[test]
    fn render_parenthesizes_binary_nodes() {
        assert_eq!(parse("x ^ 2").to_string(), "(x ^ 2)");
        assert_eq!(parse("1 + 2 * 3").to_string(), "(1 + (2 * 3))");
        assert_eq!(parse("-x").to_string(), "-x");
        assert_eq!(parse("cos(x / 2)").to_string(), "cos((x / 2))");
    }

    #[test]
    fn render_reparses_to_the_same_tree() {
        for source in ["x ^ 2 ^ 3", "-(x + 1) * sin(x)", "1 - 2 - 3", "x / y / z"] {
            let expr = parse(source);
            assert_eq!(parse(&expr.to_string()), expr, "render of `{source}` changed shape");
        }
    }

    #[test]
    fn render_constants_without_fraction() {
        assert_eq!(Expr::Constant(10.0).to_string(), "10");
        assert_eq!(Expr::Constant(0.5).to_string(), "0.5");
        assert_eq!((Expr::Constant(2.0) * Expr::var("x")).to_string(), "(2 * x)");
    }
}

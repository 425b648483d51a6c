//! Symbolic manipulation of expressions.
//!
//! The central type is [`Expr`], a span-less expression tree built from the parser's AST via
//! `From`. [`derivative`] differentiates a tree with respect to a named variable, [`simplify`]
//! tidies a tree with a single bottom-up rewrite pass, and [`Expr::substitute`] replaces a
//! variable with a constant. Rendering is the `Display` implementation on [`Expr`].

pub mod derivative;
pub mod expr;
pub mod simplify;

pub use derivative::derivative;
pub use expr::Expr;
pub use simplify::simplify;

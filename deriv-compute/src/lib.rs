//! Evaluation and symbolic manipulation of parsed arithmetic expressions.
//!
//! The [`numerical`] module evaluates a parse tree produced by `deriv-parser` to an `f64` under a
//! set of variable bindings. The [`symbolic`] module converts the parse tree into a span-less
//! expression tree that can be differentiated, simplified, substituted into, and rendered back to
//! text.

pub mod numerical;
pub mod symbolic;

//! Numerical evaluation of parsed expressions.

pub mod ctxt;
pub mod error;
pub mod eval;

//! A tokenizer and parser for arithmetic expressions.
//!
//! The parser produces a span-carrying abstract syntax tree that can be evaluated numerically or
//! converted into a symbolic expression tree for manipulation (see the `deriv-compute` crate).

pub mod parser;
pub mod tokenizer;

//! Error types for evaluation and simplification.

pub mod kind;

pub use deriv_error::Error;

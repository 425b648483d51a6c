//! Error types for the parser.

pub mod kind;

pub use deriv_error::Error;

//! The specific kinds of errors that can occur while evaluating or simplifying an expression.

use ariadne::Fmt;
use deriv_attrs::ErrorKind;
use deriv_error::{ErrorKind, EXPR};

/// An expression refers to a variable that is not bound in the evaluation context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the variable `{}` is not defined", name),
    labels = ["this variable"],
    help = if suggestions.is_empty() {
        format!("bind it on the command line with `{}`", format!("{}=<value>", name).fg(EXPR))
    } else {
        format!(
            "did you mean: {}?",
            suggestions.iter().map(|s| format!("`{}`", s.fg(EXPR))).collect::<Vec<_>>().join(", "),
        )
    },
)]
pub struct UndefinedVariable {
    /// The name of the variable.
    pub name: String,

    /// Names of bound variables similar to the undefined one.
    pub suggestions: Vec<String>,
}

/// The right-hand side of a division evaluates to exactly zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by zero",
    labels = ["this expression evaluates to zero"],
)]
pub struct DivisionByZero;

/// The argument to `ln` evaluates to zero or a negative number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "logarithm argument is out of domain",
    labels = [format!("this expression evaluates to {}", value)],
    help = format!("`{}` is only defined for positive arguments", "ln".fg(EXPR)),
)]
pub struct LogarithmOutOfDomain {
    /// The value the argument evaluated to.
    pub value: f64,
}

use deriv_error::Error;

/// An error raised while handling a command-line invocation.
#[derive(Debug)]
pub enum CliError {
    /// The arguments themselves are malformed; the message explains how.
    Usage(String),

    /// Working with the expression failed. The input is kept so the error can point into it.
    Source { input: String, error: Error },
}

impl CliError {
    /// Creates a [`CliError::Source`] from the input that produced the error.
    pub fn source(input: &str, error: Error) -> Self {
        Self::Source { input: input.to_string(), error }
    }

    /// Prints this error to stderr.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Usage(message) => eprintln!("{}", message),
            Self::Source { input, error } => {
                error.report_to_stderr("input", input).unwrap();
            },
        }
    }
}

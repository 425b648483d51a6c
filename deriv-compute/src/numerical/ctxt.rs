use levenshtein::levenshtein;
use std::collections::HashMap;

/// A context to use when evaluating an expression, containing the variables that can be used
/// within the expression.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns all variables in the context with a name similar to the given name, sorted
    /// alphabetically.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

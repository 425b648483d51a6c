use crate::numerical::{ctxt::Ctxt, error::{kind, Error}, eval::Eval};
use deriv_parser::parser::literal::Literal;

impl Eval for Literal {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Literal::Number(num) => Ok(num.value),
            Literal::Symbol(sym) => ctxt.get_var(&sym.name).ok_or_else(|| {
                Error::new(vec![sym.span.clone()], kind::UndefinedVariable {
                    name: sym.name.clone(),
                    suggestions: ctxt.get_similar_vars(&sym.name)
                        .into_iter()
                        .map(String::from)
                        .collect(),
                })
            }),
        }
    }
}

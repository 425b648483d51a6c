use crate::numerical::{ctxt::Ctxt, error::{kind, Error}, eval::Eval};
use deriv_parser::parser::call::{Call, FuncKind};

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let arg = self.arg.eval(ctxt)?;
        match self.func {
            FuncKind::Sin => Ok(arg.sin()),
            FuncKind::Cos => Ok(arg.cos()),
            FuncKind::Ln => {
                if arg <= 0.0 {
                    return Err(Error::new(
                        vec![self.arg.span()],
                        kind::LogarithmOutOfDomain { value: arg },
                    ));
                }
                Ok(arg.ln())
            },
            FuncKind::Exp => Ok(arg.exp()),
        }
    }
}

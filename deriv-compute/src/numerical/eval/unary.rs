use crate::numerical::{ctxt::Ctxt, error::Error, eval::Eval};
use deriv_parser::parser::{token::op::UnaryOpKind, unary::Unary};

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;
        match self.op.kind {
            UnaryOpKind::Neg => Ok(-operand),
        }
    }
}

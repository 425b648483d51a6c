use crate::numerical::{ctxt::Ctxt, error::{kind, Error}, eval::Eval};
use deriv_parser::parser::{binary::Binary, token::op::BinOpKind};

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;
        match self.op.kind {
            BinOpKind::Add => Ok(left + right),
            BinOpKind::Sub => Ok(left - right),
            BinOpKind::Mul => Ok(left * right),
            BinOpKind::Div => {
                if right == 0.0 {
                    return Err(Error::new(vec![self.rhs.span()], kind::DivisionByZero));
                }
                Ok(left / right)
            },
            BinOpKind::Pow => Ok(left.powf(right)),
        }
    }
}

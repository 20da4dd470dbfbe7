use crate::{
    ast::{InfixOperator, Node},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Constant,
    },
};

impl Evaluator<'_> {
    /// Evaluates an infix operation.
    ///
    /// The operator decides the evaluation order: `&&` evaluates its right
    /// side only when the left side is `true`, every other operator evaluates
    /// both sides and applies the constant operation. The boolean outcome is
    /// returned as `True` or `False`.
    ///
    /// # Errors
    /// Propagates operand evaluation errors and the errors of the constant
    /// operation.
    pub fn eval_infix(&self, op: InfixOperator, lhs: &Node, rhs: &Node) -> EvalResult<Constant> {
        let result = match op {
            InfixOperator::And => self.eval_and(lhs, rhs)?,
            _ => {
                let left = self.evaluate(lhs)?;
                let right = self.evaluate(rhs)?;
                Self::apply(op, &left, &right)?
            },
        };

        Ok(Constant::from(result))
    }
}

use crate::{
    ast::{Node, PrefixOperator},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Constant,
    },
};

impl Evaluator<'_> {
    /// Evaluates a prefix operation.
    ///
    /// `Not` yields `False` if the operand evaluates to `true` and `True`
    /// otherwise, so `!missing_variable` is `True`.
    ///
    /// # Errors
    /// Propagates the errors of [`Evaluator::is_true`].
    pub fn eval_prefix(&self, op: PrefixOperator, node: &Node) -> EvalResult<Constant> {
        match op {
            PrefixOperator::Not => Ok(Constant::from(!self.is_true(node)?)),
        }
    }
}

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Constant,
    },
};

impl Evaluator<'_> {
    /// Evaluates `lhs && rhs` lazily.
    ///
    /// If `lhs` is anything but `True` the result is `false` and `rhs` is
    /// never evaluated, which lets guards such as `a != nil && a.count > 0`
    /// protect the right side. Otherwise the result is whether `rhs` equals
    /// `True`, the same test the root of an expression gets.
    ///
    /// # Errors
    /// Propagates operand errors, and `RuntimeError::TypesMismatch` if the
    /// right side is evaluated to a number, string or array.
    pub fn eval_and(&self, lhs: &Node, rhs: &Node) -> EvalResult<bool> {
        if self.evaluate(lhs)? != Constant::True {
            return Ok(false);
        }

        self.is_true(rhs)
    }
}

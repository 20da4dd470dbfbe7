use crate::{
    ast::InfixOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Constant,
    },
};

impl Evaluator<'_> {
    /// Applies an infix operator to two evaluated constants.
    ///
    /// # Example
    /// ```
    /// use phrase::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Constant},
    /// };
    ///
    /// let a = Constant::Number("3".to_string());
    /// let b = Constant::Number("5".to_string());
    ///
    /// assert_eq!(Evaluator::apply(InfixOperator::Less, &a, &b), Ok(true));
    /// assert_eq!(Evaluator::apply(InfixOperator::Equal, &a, &Constant::Nil), Ok(false));
    /// ```
    ///
    /// # Errors
    /// `RuntimeError::TypesMismatch` for incomparable operands and
    /// `RuntimeError::TypesNotLogical` for non-logical operands of `&&`/`||`.
    pub fn apply(op: InfixOperator, left: &Constant, right: &Constant) -> EvalResult<bool> {
        match op {
            InfixOperator::And => left.and(right),
            InfixOperator::Or => left.or(right),
            InfixOperator::Equal => left.equals(right),
            InfixOperator::NotEqual => left.not_equals(right),
            InfixOperator::Greater => left.greater_than(right),
            InfixOperator::GreaterEqual => left.greater_equal(right),
            InfixOperator::Less => left.less_than(right),
            InfixOperator::LessEqual => left.less_equal(right),
        }
    }
}

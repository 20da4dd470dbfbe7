use crate::{
    ast::{Node, PostfixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Constant,
    },
};

impl Evaluator<'_> {
    /// Evaluates a postfix operation.
    ///
    /// `Count` requires its operand to be a variable holding an array in the
    /// context and yields the number of elements.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if the variable is not in the context.
    /// - `RuntimeError::TypesMismatch` if the operand is not a variable or its
    ///   value is not an array.
    /// - `RuntimeError::InvalidVariableType` if the value cannot be cast.
    pub fn eval_postfix(&self, op: PostfixOperator, node: &Node) -> EvalResult<Constant> {
        match op {
            PostfixOperator::Count => {
                let Node::Variable(name) = node else {
                    return Err(RuntimeError::TypesMismatch);
                };
                let value = self.context()
                                .get(name)
                                .ok_or_else(|| RuntimeError::UnknownVariable(name.clone()))?;

                match Constant::try_from(value)? {
                    Constant::Array(values) => Ok(Constant::Number(values.len().to_string())),
                    _ => Err(RuntimeError::TypesMismatch),
                }
            },
        }
    }
}

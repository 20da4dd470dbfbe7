use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Constant},
};

impl Constant {
    /// Returns the boolean held by a logical constant.
    ///
    /// # Errors
    /// `RuntimeError::TypesNotLogical` for anything but `True` and `False`.
    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::True => Ok(true),
            Self::False => Ok(false),
            _ => Err(RuntimeError::TypesNotLogical),
        }
    }

    /// Evaluates `self && other` over two logical constants.
    ///
    /// # Errors
    /// `RuntimeError::TypesNotLogical` if either side is not logical.
    pub fn and(&self, other: &Self) -> EvalResult<bool> {
        let (left, right) = (self.as_bool()?, other.as_bool()?);
        Ok(left && right)
    }

    /// Evaluates `self || other` over two logical constants.
    ///
    /// # Errors
    /// `RuntimeError::TypesNotLogical` if either side is not logical.
    pub fn or(&self, other: &Self) -> EvalResult<bool> {
        let (left, right) = (self.as_bool()?, other.as_bool()?);
        Ok(left || right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables() {
        use Constant::{False, True};

        assert_eq!(True.and(&True), Ok(true));
        assert_eq!(True.and(&False), Ok(false));
        assert_eq!(False.and(&True), Ok(false));
        assert_eq!(False.and(&False), Ok(false));

        assert_eq!(True.or(&True), Ok(true));
        assert_eq!(True.or(&False), Ok(true));
        assert_eq!(False.or(&True), Ok(true));
        assert_eq!(False.or(&False), Ok(false));
    }

    #[test]
    fn non_logical_operands_are_rejected() {
        let number = Constant::Number("1".to_string());
        assert_eq!(Constant::True.and(&number), Err(RuntimeError::TypesNotLogical));
        assert_eq!(number.or(&Constant::False), Err(RuntimeError::TypesNotLogical));
        assert_eq!(Constant::Nil.or(&Constant::True), Err(RuntimeError::TypesNotLogical));
    }
}

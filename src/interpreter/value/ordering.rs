use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Constant},
};

impl Constant {
    /// Evaluates `self < other`.
    ///
    /// Only number/number (by numeric value) and string/string (lexicographic)
    /// pairs are ordered.
    ///
    /// # Errors
    /// `RuntimeError::TypesMismatch` for any other pairing.
    pub fn less_than(&self, other: &Self) -> EvalResult<bool> {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => {
                Ok(Self::parse_number(left)? < Self::parse_number(right)?)
            },
            (Self::String(left), Self::String(right)) => Ok(left < right),
            _ => Err(RuntimeError::TypesMismatch),
        }
    }

    /// Evaluates `self <= other` as `self < other || self == other`.
    ///
    /// # Errors
    /// Same as [`Constant::less_than`].
    pub fn less_equal(&self, other: &Self) -> EvalResult<bool> {
        Ok(self.less_than(other)? || self.equals(other)?)
    }

    /// Evaluates `self > other` as `!(self < other) && !(self == other)`.
    ///
    /// # Errors
    /// Same as [`Constant::less_than`].
    pub fn greater_than(&self, other: &Self) -> EvalResult<bool> {
        Ok(!self.less_than(other)? && !self.equals(other)?)
    }

    /// Evaluates `self >= other` as `!(self < other)`.
    ///
    /// # Errors
    /// Same as [`Constant::less_than`].
    pub fn greater_equal(&self, other: &Self) -> EvalResult<bool> {
        Ok(!self.less_than(other)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(raw: &str) -> Constant {
        Constant::Number(raw.to_string())
    }

    #[test]
    fn numbers_order_numerically() {
        assert_eq!(number("9").less_than(&number("10")), Ok(true));
        assert_eq!(number("2").greater_than(&number("1")), Ok(true));
        assert_eq!(number("2").greater_than(&number("2")), Ok(false));
        assert_eq!(number("2").greater_equal(&number("2.0")), Ok(true));
        assert_eq!(number("2").less_equal(&number("2")), Ok(true));
        assert_eq!(number("-1.5").less_than(&number("-1")), Ok(true));
    }

    #[test]
    fn strings_order_lexicographically() {
        let apple = Constant::String("apple".to_string());
        let pear = Constant::String("pear".to_string());
        assert_eq!(apple.less_than(&pear), Ok(true));
        assert_eq!(pear.greater_equal(&apple), Ok(true));
    }

    #[test]
    fn other_pairings_are_rejected() {
        let text = Constant::String("1".to_string());
        assert_eq!(number("1").less_than(&text), Err(RuntimeError::TypesMismatch));
        assert_eq!(Constant::True.greater_than(&Constant::False), Err(RuntimeError::TypesMismatch));
        assert_eq!(Constant::Nil.less_equal(&Constant::Nil), Err(RuntimeError::TypesMismatch));
        assert_eq!(Constant::Array(vec![]).greater_equal(&Constant::Array(vec![])),
                   Err(RuntimeError::TypesMismatch));
    }
}

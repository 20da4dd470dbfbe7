use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Constant},
};

impl Constant {
    /// Evaluates `self == other`.
    ///
    /// - `Nil` equals only `Nil`, and any value compared with `Nil` is simply
    ///   unequal.
    /// - `True` and `False` equal only themselves.
    /// - Numbers compare by numeric value, strings by content.
    /// - Arrays are equal when they have the same length and pairwise equal
    ///   elements in the same order.
    ///
    /// # Errors
    /// `RuntimeError::TypesMismatch` when two non-`Nil` values of different
    /// kinds meet, including inside arrays.
    ///
    /// # Example
    /// ```
    /// use phrase::interpreter::value::core::Constant;
    ///
    /// let one = Constant::Number("1".to_string());
    /// assert!(one.equals(&Constant::Number("1.0".to_string())).unwrap());
    /// assert!(!one.equals(&Constant::Nil).unwrap());
    /// assert!(one.equals(&Constant::String("1".to_string())).is_err());
    /// ```
    pub fn equals(&self, other: &Self) -> EvalResult<bool> {
        match (self, other) {
            (Self::Nil, Self::Nil) | (Self::True, Self::True) | (Self::False, Self::False) => {
                Ok(true)
            },
            (Self::Nil, _) | (_, Self::Nil) | (Self::True, Self::False) | (Self::False, Self::True) => {
                Ok(false)
            },
            (Self::Number(left), Self::Number(right)) => {
                Ok(Self::parse_number(left)? == Self::parse_number(right)?)
            },
            (Self::String(left), Self::String(right)) => Ok(left == right),
            (Self::Array(left), Self::Array(right)) => {
                if left.len() != right.len() {
                    return Ok(false);
                }
                for (left, right) in left.iter().zip(right) {
                    if !left.equals(right)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            },
            _ => Err(RuntimeError::TypesMismatch),
        }
    }

    /// Evaluates `self != other`, the negation of [`Constant::equals`].
    ///
    /// # Errors
    /// Same as [`Constant::equals`].
    pub fn not_equals(&self, other: &Self) -> EvalResult<bool> {
        Ok(!self.equals(other)?)
    }
}

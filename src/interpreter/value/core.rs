use std::fmt;

use ordered_float::OrderedFloat;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a value an expression evaluates to.
///
/// Numbers keep the decimal text they were written or rendered with; they
/// are only parsed when compared. `True`, `False` and `Nil` carry no payload.
///
/// The derived `PartialEq` is structural and is what AST equality relies on.
/// The language's own `==` is [`Constant::equals`], which compares numbers by
/// value and rejects mismatched types.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// Boolean truth.
    True,
    /// Boolean falsehood.
    False,
    /// The value of a variable missing from the context.
    Nil,
    /// A number, stored as its decimal text.
    Number(String),
    /// A string.
    String(String),
    /// An ordered sequence of constants.
    Array(Vec<Self>),
}

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl Constant {
    /// Returns `true` for `True` and `False`.
    #[must_use]
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Parses the decimal text of a number constant.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidNumber` if `raw` is not a decimal number.
    ///
    /// # Example
    /// ```
    /// use ordered_float::OrderedFloat;
    /// use phrase::interpreter::value::core::Constant;
    ///
    /// assert_eq!(Constant::parse_number("1.5").unwrap(), OrderedFloat(1.5));
    /// assert!(Constant::parse_number("abc").is_err());
    /// ```
    pub fn parse_number(raw: &str) -> EvalResult<OrderedFloat<f64>> {
        raw.trim()
           .parse::<f64>()
           .map(OrderedFloat)
           .map_err(|_| RuntimeError::InvalidNumber(raw.to_string()))
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Nil => write!(f, "nil"),
            Self::Number(raw) => write!(f, "{raw}"),
            Self::String(text) => write!(f, "'{text}'"),
            Self::Array(values) => {
                write!(f, "[")?;

                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The two operands of an operator have incompatible types.
    #[error("Types mismatch.")]
    TypesMismatch,
    /// A logical operator received an operand that is not `true` or `false`.
    #[error("Types are not logical.")]
    TypesNotLogical,
    /// A variable required by the expression is missing from the context.
    #[error("Unknown variable '{0}'.")]
    UnknownVariable(
        /// The name of the variable.
        String,
    ),
    /// A context value has a type the language cannot represent.
    #[error("Invalid variable type: {0}.")]
    InvalidVariableType(
        /// The rejected value.
        serde_json::Value,
    ),
    /// A number constant does not hold decimal text.
    #[error("Invalid number '{0}'.")]
    InvalidNumber(
        /// The raw text of the constant.
        String,
    ),
}

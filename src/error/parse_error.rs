use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// The expression string has zero length.
    #[error("Expression is empty.")]
    ExpressionIsEmpty,
    /// An infix operator was the last token, so its right operand is missing.
    #[error("Infix operator is missing its second parameter.")]
    InfixMissingSecondaryParameter,
    /// A quoted string or bracketed array was never closed.
    #[error("Missing closing quote or bracket.")]
    MissingClosingQuote,
    /// A token fits none of the grammar rules.
    #[error("Invalid token: {0}.")]
    InvalidToken(
        /// The offending token.
        String,
    ),
    /// A token made of operator characters is not a known operator.
    #[error("Unknown operator: {0}.")]
    UnknownOperator(
        /// The operator as written.
        String,
    ),
    /// The token stream did not reduce to exactly one expression.
    #[error("Invalid expression.")]
    InvalidExpression,
    /// The expression nests deeper than the parser accepts.
    #[error("Expression nests deeper than {0} levels.")]
    NestingTooDeep(
        /// The accepted depth.
        usize,
    ),
}

/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression. Parse errors include empty input, unterminated literals,
/// unknown operators and tokens that fit no grammar rule.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a compiled
/// expression against a context, such as type mismatches between operands or
/// context values the language cannot represent.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of a compile-and-evaluate round trip.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The expression could not be compiled.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The compiled expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Conversion of context values into constants.
///
/// Strings, numbers and arrays of those are accepted; any other host value is
/// rejected with `RuntimeError::InvalidVariableType`.
pub mod cast;
/// Equality between constants (`==`, `!=`).
pub mod equality;
/// Logical connectives over `true` and `false` (`&&`, `||`).
pub mod logic;
/// Ordering between numbers and between strings (`<`, `<=`, `>`, `>=`).
pub mod ordering;

pub mod core;

/// Infix operator evaluation logic.
///
/// Handles comparisons and the logical connectives, including the
/// short-circuiting of `&&`.
pub mod binary;

/// Prefix operator evaluation logic.
///
/// Implements logical NOT.
pub mod unary;

/// Postfix operator evaluation logic.
///
/// Implements the `.count` accessor on array variables.
pub mod postfix;

/// Core evaluation logic.
///
/// Contains the tree walk, variable resolution and the truthiness test used
/// for the final result.
pub mod core;

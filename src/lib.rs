//! # phrase
//!
//! phrase is a tiny embeddable expression language for feature flags, rule
//! engines and other conditional logic driven by runtime data. A single-line
//! boolean expression is compiled once into a tree and then evaluated against
//! any number of contexts.
//!
//! ```
//! use phrase::{Expression, interpreter::context::Context};
//!
//! let expression = Expression::compile("plan == 'pro' || seats.count > 10").unwrap();
//! let context = Context::from_json(r#"{ "plan": "free", "seats": [1, 2, 3] }"#).unwrap();
//!
//! assert!(!expression.evaluate_with(&context).unwrap());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and the operator enums that represent
/// an expression as a tree. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines prefix, infix and postfix operator nodes and their leaves.
/// - Decides whether a node is already logical while chains are parsed.
/// - Renders trees back to text for debugging.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while compiling or
/// evaluating an expression. No error is fatal to the host: each one aborts
/// only the current compile or evaluate call.
pub mod error;
/// The compiled expression facade.
///
/// Ties a parsed tree to a replaceable context and exposes `compile` and
/// `evaluate`.
pub mod expression;
/// Orchestrates the compile and evaluate pipeline.
///
/// This module ties together lexing, parsing, evaluation, the context and
/// value representations.
///
/// # Responsibilities
/// - Coordinates lexer, parser, evaluator and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::Error;
pub use expression::Expression;

use crate::interpreter::context::Context;

/// Compiles `source` and evaluates it against `context` in one step.
///
/// Prefer [`Expression::compile`] when the same expression is evaluated
/// repeatedly.
///
/// # Errors
/// Returns an error if compiling or evaluating fails.
///
/// # Examples
/// ```
/// use phrase::{evaluate, interpreter::context::Context};
///
/// let context: Context = [("a", vec![1, 2, 3])].into_iter().collect();
/// assert!(evaluate("a != nil && a.count == 3", &context).unwrap());
///
/// // Comparing a number with a string is an error.
/// assert!(evaluate("1 == 'x'", &context).is_err());
/// ```
pub fn evaluate(source: &str, context: &Context) -> Result<bool, Error> {
    Ok(Expression::compile(source)?.evaluate_with(context)?)
}

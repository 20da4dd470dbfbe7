use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        context::Context,
        evaluator::core::{EvalResult, Evaluator},
        parser::core::{ParseResult, parse},
    },
};

/// A compiled expression together with the context it is evaluated against.
///
/// The tree is built once by [`Expression::compile`] and never changes; the
/// context may be replaced or mutated between evaluations.
///
/// # Example
/// ```
/// use phrase::{Expression, interpreter::context::Context};
///
/// let mut expression = Expression::compile("tags != nil && tags.count >= 2").unwrap();
/// assert!(!expression.evaluate().unwrap());
///
/// expression.context_mut().insert("tags", vec!["beta", "eu"]);
/// assert!(expression.evaluate().unwrap());
///
/// let other: Context = [("tags", vec!["beta"])].into_iter().collect();
/// assert!(!expression.evaluate_with(&other).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    ast:     Option<Node>,
    context: Context,
}

impl Expression {
    /// Parses `source` into an expression with an empty context.
    ///
    /// A source made only of spaces compiles to an expression without a
    /// tree; see [`Expression::ast`].
    ///
    /// # Errors
    /// - `ParseError::ExpressionIsEmpty` if `source` has zero length.
    /// - Any other `ParseError` raised while parsing.
    #[tracing::instrument(level = "debug", skip_all, fields(source = %source))]
    pub fn compile(source: &str) -> ParseResult<Self> {
        let ast = parse(source)?;
        if let Some(ast) = &ast {
            debug!(%ast, "compiled expression");
        }

        Ok(Self { ast,
                  context: Context::new() })
    }

    /// Replaces the context, builder style.
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Replaces the evaluation context.
    pub fn set_context(&mut self, context: Context) {
        self.context = context;
    }

    /// Returns the evaluation context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Returns the evaluation context for in-place changes.
    pub const fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Returns the compiled tree, or `None` if the source held no tokens.
    #[must_use]
    pub const fn ast(&self) -> Option<&Node> {
        self.ast.as_ref()
    }

    /// Evaluates the expression against its own context.
    ///
    /// # Errors
    /// Any `RuntimeError` raised during evaluation.
    pub fn evaluate(&self) -> EvalResult<bool> {
        self.evaluate_with(&self.context)
    }

    /// Evaluates the expression against `context`.
    ///
    /// The result is `true` only if the tree evaluates to `true`. An
    /// expression without a tree evaluates to `false`.
    ///
    /// # Errors
    /// Any `RuntimeError` raised during evaluation, including
    /// `RuntimeError::TypesMismatch` when the tree evaluates to a number,
    /// string or array.
    #[tracing::instrument(level = "debug", skip_all, fields(variables = context.len()))]
    pub fn evaluate_with(&self, context: &Context) -> EvalResult<bool> {
        let Some(ast) = &self.ast else {
            return Ok(false);
        };

        let result = Evaluator::new(context).is_true(ast)?;
        debug!(result, "evaluated expression");
        Ok(result)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ast {
            Some(ast) => write!(f, "{ast}"),
            None => Ok(()),
        }
    }
}

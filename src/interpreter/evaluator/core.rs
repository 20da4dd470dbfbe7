use tracing::trace;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{context::Context, value::core::Constant},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks a compiled tree against a borrowed context.
///
/// The evaluator never mutates the context, so evaluating the same tree twice
/// with the same context always gives the same result.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    context: &'a Context,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator reading variables from `context`.
    #[must_use]
    pub const fn new(context: &'a Context) -> Self {
        Self { context }
    }

    /// Returns the context variables are resolved from.
    #[must_use]
    pub const fn context(&self) -> &'a Context {
        self.context
    }

    /// Evaluates a node and returns the resulting constant.
    ///
    /// This is the main entry point of the tree walk and dispatches on the
    /// node variant: constants evaluate to themselves, variables are resolved
    /// from the context and operator nodes go to their dedicated handlers.
    ///
    /// # Example
    /// ```
    /// use phrase::{
    ///     ast::{InfixOperator, Node},
    ///     interpreter::{context::Context, evaluator::core::Evaluator, value::core::Constant},
    /// };
    ///
    /// let context: Context = [("a", 2)].into_iter().collect();
    /// let node = Node::infix(InfixOperator::Greater,
    ///                        Node::Variable("a".to_string()),
    ///                        Node::Constant(Constant::Number("1".to_string())));
    ///
    /// assert_eq!(Evaluator::new(&context).evaluate(&node).unwrap(), Constant::True);
    /// ```
    pub fn evaluate(&self, node: &Node) -> EvalResult<Constant> {
        match node {
            Node::Prefix { op, node } => self.eval_prefix(*op, node),
            Node::Infix { op, lhs, rhs } => self.eval_infix(*op, lhs, rhs),
            Node::Postfix { op, node } => self.eval_postfix(*op, node),
            Node::Constant(constant) => Ok(constant.clone()),
            Node::Variable(name) => self.eval_variable(name),
        }
    }

    /// Evaluates a node and tests the result for equality with `true`.
    ///
    /// `Nil` and `False` are not true; numbers, strings and arrays cannot be
    /// compared with a boolean and fail.
    ///
    /// # Errors
    /// Propagates evaluation errors, and `RuntimeError::TypesMismatch` if the
    /// node evaluates to a number, string or array.
    pub fn is_true(&self, node: &Node) -> EvalResult<bool> {
        self.evaluate(node)?.equals(&Constant::True)
    }

    /// Resolves a variable; a name missing from the context is `Nil`.
    fn eval_variable(&self, name: &str) -> EvalResult<Constant> {
        let Some(value) = self.context.get(name) else {
            trace!(name, "variable not in context");
            return Ok(Constant::Nil);
        };

        trace!(name, %value, "resolved variable");
        Constant::try_from(value)
    }
}

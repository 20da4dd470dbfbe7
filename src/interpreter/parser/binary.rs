use tracing::debug;

use crate::{
    ast::{InfixOperator, Node},
    error::ParseError,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser {
    /// Parses an infix operator whose left operand is on top of the stack.
    ///
    /// The next token is parsed as the right operand. For `&&` and `||` the
    /// right operand is then extended greedily: while it is not logical yet
    /// (see [`Node::is_not_logical`]) and tokens remain, it is pushed back and
    /// the following token is parsed on top of it. This is what makes
    ///
    /// ```text
    /// a != nil && a.count == 3
    /// ```
    ///
    /// parse as `(a != nil) && (a.count == 3)` even though operators bind
    /// strictly left to right. Comparison operators never continue.
    ///
    /// # Errors
    /// - `ParseError::InfixMissingSecondaryParameter` if no token follows the
    ///   operator.
    /// - `ParseError::InvalidExpression` if there is no left operand.
    /// - `ParseError::NestingTooDeep` if the new node nests too deeply.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self, op: InfixOperator) -> ParseResult<()> {
        let token = self.next_token()
                        .ok_or(ParseError::InfixMissingSecondaryParameter)?;
        self.parse_token(token)?;

        let (mut rhs, mut rhs_depth) = self.pop()?;
        let (lhs, lhs_depth) = self.pop()?;

        if op.is_logical() {
            while rhs.is_not_logical()
                  && let Some(token) = self.next_token()
            {
                debug!(%op, %rhs, %token, "continuing logical operand");
                self.push(rhs, rhs_depth)?;
                self.parse_token(token)?;
                (rhs, rhs_depth) = self.pop()?;
            }
        }

        self.push(Node::infix(op, lhs, rhs), lhs_depth.max(rhs_depth) + 1)
    }
}

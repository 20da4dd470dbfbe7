use crate::{
    ast::{Node, PostfixOperator},
    error::ParseError,
    interpreter::parser::{
        core::{ParseResult, Parser},
        utils::is_variable_name,
    },
};

impl Parser {
    /// Parses a variable name or a key path.
    ///
    /// Only one key path form exists: a variable followed by the `count`
    /// accessor (`items.count`). Deeper paths are rejected rather than read
    /// partially.
    ///
    /// # Errors
    /// `ParseError::InvalidToken` if `word` is neither a variable name nor a
    /// `name.count` path.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self, word: &str) -> ParseResult<()> {
        if is_variable_name(word) {
            self.push_leaf(Node::Variable(word.to_string()));
            return Ok(());
        }

        let segments: Vec<&str> = word.split('.').collect();
        match segments.as_slice() {
            [name, "count"] if is_variable_name(name) => {
                let node = Node::postfix(PostfixOperator::Count, Node::Variable((*name).to_string()));
                self.push(node, 2)
            },
            _ => Err(ParseError::InvalidToken(word.to_string())),
        }
    }
}

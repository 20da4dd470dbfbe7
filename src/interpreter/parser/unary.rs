use crate::{
    ast::{Node, PrefixOperator},
    interpreter::parser::core::{ParseResult, Parser, check_depth},
};

impl Parser {
    /// Parses a run of `!` prefixes glued to their operand, e.g. `!true`,
    /// `!!a` or `!a.count`.
    ///
    /// The operand after the last `!` is parsed once and then wrapped in one
    /// `Not` node per `!`. The lexeme as a whole is not made only of operator
    /// characters, so the operand is never empty.
    ///
    /// # Errors
    /// - Any error raised while parsing the operand.
    /// - `ParseError::NestingTooDeep` if the wrapped tree nests too deeply.
    pub(in crate::interpreter::parser) fn parse_not(&mut self, word: &str) -> ParseResult<()> {
        let operand = word.trim_start_matches('!');
        let count = word.len() - operand.len();

        match operand.parse::<bool>() {
            Ok(value) => self.push_leaf(Node::Constant(value.into())),
            Err(_) => self.parse_word(operand)?,
        }

        let (mut node, depth) = self.pop()?;
        let depth = check_depth(depth + count)?;
        for _ in 0..count {
            node = Node::prefix(PrefixOperator::Not, node);
        }

        self.push(node, depth)
    }
}

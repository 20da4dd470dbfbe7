use tracing::trace;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::utils::{is_number, is_operator_like},
        value::core::Constant,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest tree, and the deepest chain of nested token rules, the parser
/// accepts.
///
/// Evaluating, printing and dropping a tree recurse once per level, so a
/// compiled tree never nests deeper than this.
pub const MAX_DEPTH: usize = 256;

/// Parses an expression string into its tree.
///
/// Returns `Ok(None)` when the source is not empty but holds no tokens, e.g.
/// a string of spaces.
///
/// # Errors
/// Returns the first `ParseError` met while tokenizing or parsing.
///
/// # Example
/// ```
/// use phrase::{ast::Node, interpreter::parser::core::parse};
///
/// let tree = parse("a.count >= 2").unwrap().unwrap();
/// assert_eq!(tree.to_string(), "(a.count >= 2)");
///
/// assert_eq!(parse("   ").unwrap(), None);
/// assert!(parse("").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Option<Node>> {
    Parser::new(Lexer::new(source)?).parse()
}

/// Single-pass stack machine turning tokens into a tree.
///
/// Tokens are pulled from the lexer one at a time. Literals and variables
/// push a node; operators pop their operands and push the combined node. Some
/// rules pull extra tokens themselves: infix operators take their right
/// operand, and string or array literals take the pieces the lexer split off.
///
/// Each stack entry carries the depth of its tree so that nesting is bounded
/// by [`MAX_DEPTH`] while the tree is built.
#[derive(Debug)]
pub struct Parser {
    lexer:   Lexer,
    stack:   Vec<(Node, usize)>,
    nesting: usize,
}

impl Parser {
    /// Creates a parser consuming `lexer`.
    #[must_use]
    pub const fn new(lexer: Lexer) -> Self {
        Self { lexer,
               stack: Vec::new(),
               nesting: 0 }
    }

    /// Consumes every token and returns the single remaining node.
    ///
    /// # Errors
    /// - Any error raised by a token rule.
    /// - `ParseError::InvalidExpression` if the tokens do not reduce to
    ///   exactly one node.
    /// - `ParseError::NestingTooDeep` if the tree would nest deeper than
    ///   [`MAX_DEPTH`].
    pub fn parse(mut self) -> ParseResult<Option<Node>> {
        if self.lexer.is_at_end() {
            return Ok(None);
        }

        while let Some(token) = self.lexer.next() {
            self.parse_token(token)?;
        }

        let (root, _) = self.pop()?;
        if !self.stack.is_empty() {
            return Err(ParseError::InvalidExpression);
        }

        Ok(Some(root))
    }

    /// Parses one token, leaving its node on top of the stack.
    ///
    /// Rules that need an operand call back into this method, so it also
    /// bounds how deeply rules nest.
    pub(in crate::interpreter::parser) fn parse_token(&mut self, token: Token) -> ParseResult<()> {
        trace!(%token, stack = self.stack.len(), "parsing token");

        if self.nesting >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep(MAX_DEPTH));
        }

        self.nesting += 1;
        let result = match token {
            Token::Bool(value) => {
                self.push_leaf(Node::Constant(Constant::from(value)));
                Ok(())
            },
            Token::Operator(op) => self.parse_infix(op),
            Token::Word(word) => self.parse_word(&word),
        };
        self.nesting -= 1;

        result
    }

    /// Parses a lexeme that is neither a boolean nor a known operator.
    pub(in crate::interpreter::parser) fn parse_word(&mut self, word: &str) -> ParseResult<()> {
        if is_operator_like(word) {
            return Err(ParseError::UnknownOperator(word.to_string()));
        }

        if word.starts_with('!') {
            self.parse_not(word)
        } else if is_number(word) {
            self.push_leaf(Node::Constant(Constant::Number(word.to_string())));
            Ok(())
        } else if let Some(rest) = word.strip_prefix('\'') {
            let text = self.take_until(rest, '\'')?;
            self.push_leaf(Node::Constant(Constant::String(text)));
            Ok(())
        } else if let Some(rest) = word.strip_prefix('[') {
            let content = self.take_until(rest, ']')?;
            let array = Self::parse_array(&content)?;
            self.push_leaf(Node::Constant(array));
            Ok(())
        } else {
            self.parse_identifier(word)
        }
    }

    /// Pulls the next token from the lexer.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> Option<Token> {
        self.lexer.next()
    }

    pub(in crate::interpreter::parser) fn push_leaf(&mut self, node: Node) {
        self.stack.push((node, 1));
    }

    /// Pushes `node`, whose tree is `depth` levels deep.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` if `depth` exceeds [`MAX_DEPTH`].
    pub(in crate::interpreter::parser) fn push(&mut self, node: Node, depth: usize) -> ParseResult<()> {
        let depth = check_depth(depth)?;
        self.stack.push((node, depth));
        Ok(())
    }

    /// Pops the top node together with its depth.
    ///
    /// # Errors
    /// `ParseError::InvalidExpression` if the stack is empty, e.g. for an
    /// operator without a left operand.
    pub(in crate::interpreter::parser) fn pop(&mut self) -> ParseResult<(Node, usize)> {
        self.stack.pop().ok_or(ParseError::InvalidExpression)
    }
}

/// Returns `depth` if a tree that deep is accepted.
///
/// # Errors
/// `ParseError::NestingTooDeep` if `depth` exceeds [`MAX_DEPTH`].
pub(in crate::interpreter::parser) const fn check_depth(depth: usize) -> ParseResult<usize> {
    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep(MAX_DEPTH));
    }
    Ok(depth)
}

use std::fmt;

use logos::Logos;

use crate::{ast::InfixOperator, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// A token is one space-separated lexeme of the lower-cased expression.
/// Booleans and the eight infix operators are recognised here; everything
/// else (numbers, quoted strings, arrays, variables and key paths) is a
/// [`Token::Word`] that the parser interprets.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r" +")]
pub enum Token {
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// One of `&&`, `||`, `==`, `!=`, `>`, `>=`, `<`, `<=`.
    #[token("&&", parse_operator)]
    #[token("||", parse_operator)]
    #[token("==", parse_operator)]
    #[token("!=", parse_operator)]
    #[token(">", parse_operator)]
    #[token(">=", parse_operator)]
    #[token("<", parse_operator)]
    #[token("<=", parse_operator)]
    Operator(InfixOperator),
    /// Any other run of non-space characters.
    ///
    /// Ranked below the literal tokens, so `>` is an operator while `>=>` is
    /// a word.
    #[regex(r"[^ ]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Word(word) => write!(f, "{word}"),
        }
    }
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parses an infix operator from the current token slice.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<InfixOperator> {
    lex.slice().parse().ok()
}

/// Pull-based cursor over the tokens of one expression.
///
/// The whole source is tokenized up front; [`Iterator::next`] then hands out
/// one token at a time, and [`Lexer::peek`] looks at the next one without
/// consuming it.
#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    index:  usize,
}

impl Lexer {
    /// Lower-cases `source` and splits it into tokens.
    ///
    /// A source made only of spaces yields a lexer that is already at its end.
    ///
    /// # Errors
    /// `ParseError::ExpressionIsEmpty` if `source` has zero length.
    pub fn new(source: &str) -> ParseResult<Self> {
        if source.is_empty() {
            return Err(ParseError::ExpressionIsEmpty);
        }

        // Every run of non-space characters is at least a `Word`, so logos
        // never reports an error here.
        let source = source.to_lowercase();
        let tokens = Token::lexer(&source).filter_map(Result::ok).collect();

        Ok(Self { tokens, index: 0 })
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.index).cloned()?;
        self.index += 1;
        Some(token)
    }
}

use crate::{
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            utils::is_number,
        },
        value::core::Constant,
    },
};

impl Parser {
    /// Collects the body of a literal that may span several tokens.
    ///
    /// `first` is the current lexeme without its opening character. While the
    /// collected text does not end with `terminator`, the next token is
    /// appended, separated by the single space the lexer removed. The
    /// terminator itself is stripped from the result.
    ///
    /// # Errors
    /// `ParseError::MissingClosingQuote` if the tokens run out first.
    pub(in crate::interpreter::parser) fn take_until(&mut self, first: &str, terminator: char) -> ParseResult<String> {
        let mut content = first.to_string();

        while !content.ends_with(terminator) {
            let token = self.next_token().ok_or(ParseError::MissingClosingQuote)?;
            content.push(' ');
            content.push_str(&token.to_string());
        }

        content.pop();
        Ok(content)
    }

    /// Parses the body of an array literal.
    ///
    /// The body is split on `,`; each trimmed element must be a quoted string
    /// or a number. A blank body is the empty array.
    ///
    /// Grammar: `array := "[" (element ("," element)*)? "]"`,
    /// `element := "'" text "'" | number`.
    ///
    /// # Errors
    /// `ParseError::InvalidToken` for an element that is neither.
    pub(in crate::interpreter::parser) fn parse_array(content: &str) -> ParseResult<Constant> {
        if content.trim().is_empty() {
            return Ok(Constant::Array(Vec::new()));
        }

        content.split(',')
               .map(|element| parse_array_element(element.trim()))
               .collect::<ParseResult<Vec<_>>>()
               .map(Constant::Array)
    }
}

fn parse_array_element(element: &str) -> ParseResult<Constant> {
    if let Some(text) = element.strip_prefix('\'')
                               .and_then(|rest| rest.strip_suffix('\''))
    {
        return Ok(Constant::String(text.to_string()));
    }

    if is_number(element) {
        return Ok(Constant::Number(element.to_string()));
    }

    Err(ParseError::InvalidToken(element.to_string()))
}

/// Core parsing state and token dispatch.
///
/// Holds the `Parser` stack machine, the entry point that turns an
/// expression string into a tree and the per-token dispatch.
pub mod core;

/// Infix operator parsing.
///
/// Builds binary nodes and implements the greedy continuation rule that
/// chains `&&` and `||` without precedence levels.
pub mod binary;

/// Prefix operator parsing.
///
/// Handles the `!` prefix glued to the token it negates.
pub mod unary;

/// Literal parsing.
///
/// Reassembles quoted strings and array literals the lexer split on spaces.
pub mod literal;

/// Variable and key path parsing.
///
/// Handles bare variable names and the `name.count` accessor.
pub mod identifier;

/// Lexeme classification helpers shared by the parser.
pub mod utils;

/// The context module holds the values variables resolve to.
///
/// A context maps case-sensitive variable names to host values. It is owned
/// by the caller and only ever read during evaluation.
pub mod context;
/// The evaluator module walks a compiled tree and computes its result.
///
/// The evaluator resolves variables from the context, applies prefix, infix
/// and postfix operators and produces a single constant.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Short-circuits `&&` so the right side may depend on the left.
/// - Reports runtime errors such as type mismatches.
pub mod evaluator;
/// The lexer module tokenizes an expression string.
///
/// The lexer lower-cases the source, splits it on runs of spaces and
/// classifies each lexeme as a boolean, an operator or a plain word. Literals
/// that contain spaces arrive in pieces and are put back together by the
/// parser.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into AST nodes on an explicit value stack.
/// - Reassembles quoted strings and array literals split by the lexer.
/// - Chains logical operators with the greedy continuation rule.
pub mod parser;
/// The value module defines the constants expressions evaluate to.
///
/// This module declares the `Constant` type together with its equality,
/// ordering and logical operators, and the conversion of context values into
/// constants.
pub mod value;

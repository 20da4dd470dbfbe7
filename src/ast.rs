use std::{fmt, str::FromStr};

use crate::{
    error::ParseError,
    interpreter::{context::Context, evaluator::core::Evaluator, value::core::Constant},
};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every node exclusively owns its children, so a compiled expression is a
/// plain tree. Equality is structural: two nodes are equal when they have the
/// same variant, the same operator and pairwise equal children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An operator applied to the node that follows it, e.g. `!a`.
    Prefix {
        /// The prefix operator.
        op:   PrefixOperator,
        /// The operand.
        node: Box<Self>,
    },
    /// An operator between two nodes, e.g. `a == 1`.
    Infix {
        /// The infix operator.
        op:  InfixOperator,
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// An accessor applied to the node before it, e.g. `a.count`.
    Postfix {
        /// The postfix operator.
        op:   PostfixOperator,
        /// The operand.
        node: Box<Self>,
    },
    /// A literal value.
    Constant(Constant),
    /// Reference to a context value by name.
    Variable(String),
}

impl Node {
    /// Builds a prefix node.
    #[must_use]
    pub fn prefix(op: PrefixOperator, node: Self) -> Self {
        Self::Prefix { op,
                       node: Box::new(node) }
    }

    /// Builds an infix node.
    #[must_use]
    pub fn infix(op: InfixOperator, lhs: Self, rhs: Self) -> Self {
        Self::Infix { op,
                      lhs: Box::new(lhs),
                      rhs: Box::new(rhs) }
    }

    /// Builds a postfix node.
    #[must_use]
    pub fn postfix(op: PostfixOperator, node: Self) -> Self {
        Self::Postfix { op,
                        node: Box::new(node) }
    }

    /// Returns `true` if the node cannot yet be used as the operand of a
    /// logical operator.
    ///
    /// The parser uses this as a syntactic lookahead while building `&&` and
    /// `||` nodes: a right operand that is not logical yet (a number, a
    /// string, a variable, a `.count` accessor) absorbs the following tokens.
    ///
    /// Variables are probed against an empty context, not against the one the
    /// expression is later evaluated with, so they are never logical here.
    ///
    /// # Example
    /// ```
    /// use phrase::{ast::Node, interpreter::value::core::Constant};
    ///
    /// assert!(Node::Variable("a".to_string()).is_not_logical());
    /// assert!(Node::Constant(Constant::Number("3".to_string())).is_not_logical());
    /// assert!(!Node::Constant(Constant::True).is_not_logical());
    /// ```
    #[must_use]
    pub fn is_not_logical(&self) -> bool {
        match self {
            Self::Constant(constant) => !constant.is_logical(),
            Self::Variable(_) => {
                let probe = Context::new();
                !Evaluator::new(&probe).evaluate(self)
                                       .is_ok_and(|constant| constant.is_logical())
            },
            Self::Prefix { op, .. } => !op.is_logical(),
            Self::Postfix { .. } => true,
            Self::Infix { .. } => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix { op, node } => write!(f, "{op}{node}"),
            Self::Infix { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
            Self::Postfix { op, node } => write!(f, "{node}.{op}"),
            Self::Constant(constant) => write!(f, "{constant}"),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// Represents an operator written before its operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!a`).
    Not,
}

impl PrefixOperator {
    /// Whether the operator always produces `true` or `false`.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::Not)
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators are logical connectives and comparisons; the language has
/// no arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
}

impl InfixOperator {
    /// Returns `true` for `&&` and `||`, the operators that take part in the
    /// greedy continuation rule.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
        }
    }
}

impl FromStr for InfixOperator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "&&" => Ok(Self::And),
            "||" => Ok(Self::Or),
            "==" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            ">" => Ok(Self::Greater),
            ">=" => Ok(Self::GreaterEqual),
            "<" => Ok(Self::Less),
            "<=" => Ok(Self::LessEqual),
            _ => Err(ParseError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents an accessor written after its operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixOperator {
    /// Number of elements of an array variable (`a.count`).
    Count,
}

impl fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
        }
    }
}

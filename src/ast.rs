use std::fmt;

use crate::interpreter::lexer::{Position, Token};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Binding power of the operator. Higher binds tighter.
    ///
    /// `+` and `-` share the lowest tier, `*` and `/` the one above it. All
    /// operators are left-associative.
    ///
    /// # Example
    /// ```
    /// use linecalc::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Maps a token to the operator it denotes, if any.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Parenthesized groups have no node of their own: the parser returns the
/// inner expression directly, since grouping only affects how the tree is
/// shaped. Every `BinaryOp` owns both of its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value:    i64,
        /// Where the literal appears.
        position: Position,
    },
    /// A binary operation between two sub-expressions.
    BinaryOp {
        /// The left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// The right operand.
        right:    Box<Self>,
        /// Where the operator appears.
        position: Position,
    },
}

impl Expr {
    /// Where the expression's root appears: the literal itself, or the
    /// operator of a binary operation.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Number of nodes on the longest path from this node to a leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Renders the expression fully parenthesized, so that the tree shape is
/// visible: `8 - 3 - 2` is shown as `((8 - 3) - 2)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

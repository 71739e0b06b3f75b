use crate::op::{BinOpKind, UnaryOpKind};
use logos::Logos;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The raw lexical classes recognized by the tokenizer.
///
/// `+` and `-` are lexed as [`TokenKind::Add`] and [`TokenKind::Sub`] regardless of position;
/// whether they are unary or binary is decided afterwards, when the [`TokenKind`]s are resolved
/// into [`Token`]s.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r\f]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Name,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]*\.[0-9]+")]
    Float,

    #[regex(r".", priority = 0)]
    Symbol,
}

/// The value of a resolved token.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenValue {
    /// An integer literal, such as `42`.
    Int(i64),

    /// A decimal literal, such as `3.14` or `.5`.
    Float(f64),

    /// A variable name, such as `x` or `a0`.
    Name(String),

    OpenParen,
    CloseParen,

    /// An operator between two operands.
    BinOp(BinOpKind),

    /// A sign applied to the operand after it.
    UnaryOp(UnaryOpKind),
}

impl TokenValue {
    /// Returns true if this token ends an operand, meaning a `+` or `-` after it is binary.
    pub fn ends_operand(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_) | Self::Name(_) | Self::CloseParen)
    }
}

/// A token produced by the tokenizer, along with the region of the input it was read from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The value of the token.
    pub value: TokenValue,
}

impl Token {
    /// Creates a new token.
    pub fn new(span: Range<usize>, value: TokenValue) -> Self {
        Self { span, value }
    }
}

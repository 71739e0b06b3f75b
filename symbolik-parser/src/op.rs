//! The operator table shared by the assembler and the renderer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term = 2,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor = 3,

    /// Precedence of unary plus (`+`) and unary minus (`-`).
    Unary = 9,
}

impl Precedence {
    /// Returns the numeric value of the precedence.
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// The associativity of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The operation is left-associative, such as `a - b - c = (a - b) - c`.
    Left,

    /// The operation is right-associative, such as `--a = -(-a)`.
    Right,

    /// The grouping of repeated applications does not matter, such as `a + b + c`.
    Both,
}

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Plus,
    Neg,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation.
    pub fn precedence(self) -> Precedence {
        Precedence::Unary
    }

    /// Returns the associativity of the unary operation.
    pub fn associativity(self) -> Associativity {
        Associativity::Right
    }

    /// Returns the symbol of the unary operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
        }
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Add | Self::Mul => Associativity::Both,
            Self::Sub | Self::Div => Associativity::Left,
        }
    }

    /// Returns the symbol of the binary operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns the unary form of this operator, if it has one.
    pub fn to_unary(self) -> Option<UnaryOpKind> {
        match self {
            Self::Add => Some(UnaryOpKind::Plus),
            Self::Sub => Some(UnaryOpKind::Neg),
            Self::Mul | Self::Div => None,
        }
    }
}

/// Either kind of operator, as it waits on the assembler's operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Unary(UnaryOpKind),
    Binary(BinOpKind),
}

impl OpKind {
    /// Returns the precedence of the operator.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Unary(op) => op.precedence(),
            Self::Binary(op) => op.precedence(),
        }
    }

    /// Returns the associativity of the operator.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Unary(op) => op.associativity(),
            Self::Binary(op) => op.associativity(),
        }
    }

    /// Returns the symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Unary(op) => op.symbol(),
            Self::Binary(op) => op.symbol(),
        }
    }

    /// Returns true if an operator `other` already waiting on the stack must be applied before
    /// `self` is pushed.
    ///
    /// Left-grouping operators yield to operators of greater or equal precedence, right-grouping
    /// operators only to operators of strictly greater precedence.
    pub fn yields_to(self, other: OpKind) -> bool {
        let (precedence, other_precedence) = (self.precedence(), other.precedence());
        match self.associativity() {
            Associativity::Left | Associativity::Both => precedence <= other_precedence,
            Associativity::Right => precedence < other_precedence,
        }
    }
}

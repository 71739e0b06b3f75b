//! Error kinds raised while tokenizing and assembling an expression.
//!
//! Every kind derives [`ErrorKind`], so it can be wrapped in an [`Error`] along with the spans of
//! the input it was raised for, and rendered as a report by the shell.

use ariadne::Fmt;
use symbolik_attrs::ErrorKind;
use symbolik_error::EXPR;

pub use symbolik_error::Error;

/// No lexical class matches the text at this position.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid token",
    labels = [format!("I could not understand the text starting here: `{}`", self.remaining)],
    help = "expressions may only contain numbers, names, `+`, `-`, `*`, `/`, and parentheses",
)]
pub struct InvalidToken {
    /// The unmatched remainder of the input, starting at the failing position.
    pub remaining: String,
}

/// An integer literal does not fit in a signed 64-bit integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "integer literal out of range",
    labels = ["this integer is too large"],
    help = format!("write `{}` as a decimal instead", format!("{}.0", self.literal).fg(EXPR)),
)]
pub struct IntegerOutOfRange {
    /// The text of the literal.
    pub literal: String,
}

/// A parenthesis has no matching partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "mismatched parenthesis",
    labels = [if self.opening { "this parenthesis is never closed" } else { "this parenthesis was never opened" }],
    help = if self.opening {
        format!("add a closing {} somewhere after this", "`)`".fg(EXPR))
    } else {
        format!("add an opening {} somewhere before this, or remove it", "`(`".fg(EXPR))
    },
)]
pub struct MismatchedParenthesis {
    /// True if the unmatched parenthesis is an opening parenthesis.
    pub opening: bool,
}

/// A pair of parentheses contains no expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// Which operand(s) an operator is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// A binary operator has neither operand.
    Both,

    /// A binary operator has no left-hand operand.
    Left,

    /// A binary operator has no right-hand operand.
    Right,

    /// A unary operator has no operand.
    Operand,
}

impl Missing {
    /// Describes the missing operand(s).
    pub fn describe(self) -> &'static str {
        match self {
            Self::Both => "without operands",
            Self::Left => "with no left hand operand",
            Self::Right => "with no right hand operand",
            Self::Operand => "without an operand",
        }
    }
}

/// An operator is applied without the operands it requires.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("operator `{}` used {}", self.op, self.missing.describe()),
    labels = ["this operator"],
    help = format!("add an {} next to the operator, or remove it", "expression".fg(EXPR)),
)]
pub struct MissingOperand {
    /// The symbol of the operator.
    pub op: &'static str,

    /// The operand(s) that are missing.
    pub missing: Missing,
}

/// Assembly finished with more than one expression left over.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "result is not a single expression",
    labels = ["this expression", "is not joined to this one"],
    help = format!("join the expressions with an operator, such as {}", "`*`".fg(EXPR)),
)]
pub struct NotSingleExpression;

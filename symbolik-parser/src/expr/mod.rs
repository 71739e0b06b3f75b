//! The expression tree produced by the assembler and rewritten by the simplifier.
//!
//! An [`Expr`] is an immutable value: every transformation builds a new tree rather than mutating
//! an existing one. Each node exclusively owns its children.
//!
//! # Flattening
//!
//! [`Expr::Sum`] and [`Expr::Product`] are n-ary. The smart constructors [`Expr::sum`] and
//! [`Expr::product`] merge directly nested nodes of the same kind into their parent, so that
//! `x + (y + z)` is a single [`Expr::Sum`] with _three_ terms. They also drop [`Expr::Empty`]
//! placeholders, and collapse a node with zero or one term into [`Expr::Empty`] or the single term.
//!
//! # Equality
//!
//! The [`PartialEq`] implementation is structural: two sums are equal only if they have equal terms
//! in the same order. `x + y` and `y + x` are **not** equal.

mod fmt;
mod iter;
mod ops;

use crate::op::{BinOpKind, Precedence, UnaryOpKind};
pub use iter::ExprIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An algebraic expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// The identity placeholder, used internally by folds. The result of parsing empty input.
    Empty,

    /// An integer, such as `2` or `144`.
    Integer(i64),

    /// A decimal number, such as `3.14` or `0.5`.
    Decimal(f64),

    /// A variable, such as `x` or `y`.
    Variable(String),

    /// Arithmetic negation of the operand.
    Negation(Box<Expr>),

    /// Two or more terms added together.
    Sum(Vec<Expr>),

    /// Two or more factors multiplied together.
    Product(Vec<Expr>),

    /// The left expression divided by the right expression.
    Division(Box<Expr>, Box<Expr>),

    /// An expression wrapped in parentheses. Only used while rendering.
    Parentheses(Box<Expr>),
}

impl Expr {
    /// Creates an [`Expr::Integer`].
    pub fn int(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Creates an [`Expr::Decimal`].
    pub fn decimal(value: f64) -> Self {
        Self::Decimal(value)
    }

    /// Creates an [`Expr::Variable`].
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates an [`Expr::Negation`] of the given expression.
    pub fn neg(operand: Self) -> Self {
        Self::Negation(Box::new(operand))
    }

    /// Creates an [`Expr::Division`].
    pub fn div(left: Self, right: Self) -> Self {
        Self::Division(Box::new(left), Box::new(right))
    }

    /// Creates an [`Expr::Parentheses`] wrapping the given expression.
    pub fn paren(inner: Self) -> Self {
        Self::Parentheses(Box::new(inner))
    }

    /// Adds the given terms together, flattening directly nested sums.
    ///
    /// [`Expr::Empty`] terms are dropped. If no terms remain, [`Expr::Empty`] is returned; if one
    /// term remains, that term is returned as-is.
    pub fn sum(terms: impl IntoIterator<Item = Self>) -> Self {
        let mut out = Vec::new();
        for term in terms {
            match term {
                Self::Empty => (),
                Self::Sum(inner) => out.extend(inner),
                term => out.push(term),
            }
        }
        Self::Sum(out).downgrade()
    }

    /// Multiplies the given factors together, flattening directly nested products.
    ///
    /// [`Expr::Empty`] factors are dropped. If no factors remain, [`Expr::Empty`] is returned; if
    /// one factor remains, that factor is returned as-is.
    pub fn product(factors: impl IntoIterator<Item = Self>) -> Self {
        let mut out = Vec::new();
        for factor in factors {
            match factor {
                Self::Empty => (),
                Self::Product(inner) => out.extend(inner),
                factor => out.push(factor),
            }
        }
        Self::Product(out).downgrade()
    }

    /// Builds the expression for a binary operator applied to two operands.
    ///
    /// Subtraction is represented as the sum of the left operand and the negated right operand.
    pub fn binary(op: BinOpKind, left: Self, right: Self) -> Self {
        match op {
            BinOpKind::Add => Self::sum([left, right]),
            BinOpKind::Sub => Self::sum([left, Self::neg(right)]),
            BinOpKind::Mul => Self::product([left, right]),
            BinOpKind::Div => Self::div(left, right),
        }
    }

    /// Builds the expression for a unary operator applied to an operand.
    pub fn unary(op: UnaryOpKind, operand: Self) -> Self {
        match op {
            UnaryOpKind::Plus => operand,
            UnaryOpKind::Neg => Self::neg(operand),
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// A [`Expr::Sum`] or [`Expr::Product`] with zero terms becomes [`Expr::Empty`], and one with a
    /// single term becomes that term.
    pub fn downgrade(self) -> Self {
        match self {
            Self::Sum(mut terms) | Self::Product(mut terms) if terms.len() <= 1 => {
                terms.pop().unwrap_or(Self::Empty)
            },
            expr => expr,
        }
    }

    /// Returns true if the expression is an [`Expr::Integer`] or [`Expr::Decimal`].
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Decimal(_))
    }

    /// Returns true if the expression is the constant zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Decimal(d) => *d == 0.0,
            _ => false,
        }
    }

    /// Returns true if the expression is the constant one.
    pub fn is_one(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 1,
            Self::Decimal(d) => *d == 1.0,
            _ => false,
        }
    }

    /// Returns true if the expression is a constant less than zero.
    pub fn is_negative_constant(&self) -> bool {
        match self {
            Self::Integer(n) => *n < 0,
            Self::Decimal(d) => *d < 0.0,
            _ => false,
        }
    }

    /// If the expression is a constant, returns its value as an [`f64`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the terms of a [`Expr::Sum`], or the expression itself as the only term.
    pub fn terms(&self) -> &[Self] {
        match self {
            Self::Sum(terms) => terms,
            expr => std::slice::from_ref(expr),
        }
    }

    /// Returns the factors of a [`Expr::Product`], or the expression itself as the only factor.
    pub fn factors(&self) -> &[Self] {
        match self {
            Self::Product(factors) => factors,
            expr => std::slice::from_ref(expr),
        }
    }

    /// Returns the precedence of the operator at the root of the expression, or [`None`] for
    /// leaves, which never need parentheses.
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Sum(_) => Some(BinOpKind::Add.precedence()),
            Self::Product(_) | Self::Division(..) => Some(BinOpKind::Mul.precedence()),
            Self::Negation(_) => Some(UnaryOpKind::Neg.precedence()),
            Self::Empty
                | Self::Integer(_)
                | Self::Decimal(_)
                | Self::Variable(_)
                | Self::Parentheses(_) => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the names of the distinct variables in the expression, in the order they are first
    /// encountered.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.post_order_iter().filter_map(Self::as_variable) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Renders the expression as infix text, equivalent to its [`Display`](std::fmt::Display)
    /// output.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

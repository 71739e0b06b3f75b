//! Tree-level `+` and `*`, which fold constants eagerly.

use super::Expr;
use std::ops::{Add, Mul};

/// Adds two expressions.
///
/// - [`Expr::Empty`] is the identity.
/// - Two [`Expr::Integer`]s fold to an [`Expr::Integer`], or to an [`Expr::Decimal`] if the result
///   overflows.
/// - Any other pair of constants folds to an [`Expr::Decimal`].
/// - Otherwise, the expressions are joined with [`Expr::sum`].
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Expr::Empty, expr) | (expr, Expr::Empty) => expr,
            (Expr::Integer(lhs), Expr::Integer(rhs)) => lhs.checked_add(rhs)
                .map(Expr::Integer)
                .unwrap_or_else(|| Expr::Decimal(lhs as f64 + rhs as f64)),
            (lhs, rhs) => match (lhs.as_f64(), rhs.as_f64()) {
                (Some(a), Some(b)) => Expr::Decimal(a + b),
                _ => Expr::sum([lhs, rhs]),
            },
        }
    }
}

/// Multiplies two expressions, following the same rules as [`Add`], with [`Expr::product`] joining
/// non-constant operands.
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Expr::Empty, expr) | (expr, Expr::Empty) => expr,
            (Expr::Integer(lhs), Expr::Integer(rhs)) => lhs.checked_mul(rhs)
                .map(Expr::Integer)
                .unwrap_or_else(|| Expr::Decimal(lhs as f64 * rhs as f64)),
            (lhs, rhs) => match (lhs.as_f64(), rhs.as_f64()) {
                (Some(a), Some(b)) => Expr::Decimal(a * b),
                _ => Expr::product([lhs, rhs]),
            },
        }
    }
}

//! The rewriting passes used by the simplifier.
//!
//! Each pass is a function that takes an expression and returns a new expression with the same
//! value. A pass that has nothing to rewrite returns a tree equal to its input.

pub mod collect;
pub mod combine;
pub mod divide;
pub mod expand;
pub mod flatten;
pub mod normalize;

use symbolik_parser::expr::Expr;

/// Rebuilds the expression with `f` applied to each direct child. The structure of the expression
/// itself is kept as-is; nested sums and products are not merged.
pub(crate) fn map_children(expr: &Expr, mut f: impl FnMut(&Expr) -> Expr) -> Expr {
    match expr {
        Expr::Sum(terms) => Expr::Sum(terms.iter().map(&mut f).collect()),
        Expr::Product(factors) => Expr::Product(factors.iter().map(&mut f).collect()),
        Expr::Negation(operand) => Expr::neg(f(operand)),
        Expr::Division(lhs, rhs) => {
            let lhs = f(lhs);
            Expr::div(lhs, f(rhs))
        },
        Expr::Parentheses(inner) => Expr::paren(f(inner)),
        Expr::Empty | Expr::Integer(_) | Expr::Decimal(_) | Expr::Variable(_) => expr.clone(),
    }
}

/// Splits a sum into its terms. [`Expr::Empty`] has no terms.
pub(crate) fn into_terms(expr: Expr) -> Vec<Expr> {
    match expr {
        Expr::Empty => Vec::new(),
        Expr::Sum(terms) => terms,
        expr => vec![expr],
    }
}

/// Splits a product into its factors. [`Expr::Empty`] has no factors.
pub(crate) fn into_factors(expr: Expr) -> Vec<Expr> {
    match expr {
        Expr::Empty => Vec::new(),
        Expr::Product(factors) => factors,
        expr => vec![expr],
    }
}

//! Folding of constant terms and factors.

use std::ops::{Add, Mul};
use symbolik_parser::expr::Expr;
use super::{divide, into_factors, into_terms};

/// Partitions the given terms into a single folded constant and the remaining non-constant terms,
/// which keep their order.
///
/// The constant is [`Expr::Empty`] if there are no constant terms.
fn fold_constants(terms: Vec<Expr>, fold: impl Fn(Expr, Expr) -> Expr) -> (Expr, Vec<Expr>) {
    let mut constant = Expr::Empty;
    let mut others = Vec::with_capacity(terms.len());
    for term in terms {
        if term.is_constant() {
            constant = fold(constant, term);
        } else {
            others.push(term);
        }
    }
    (constant, others)
}

/// Recursively folds the constants of every sum and product into a single constant, placed in
/// front of the remaining terms, and reduces divisions of constants.
///
/// - A constant sum of `0` is dropped if other terms remain.
/// - A constant product of `0` turns the whole product into `0`.
/// - A constant product of `1` is dropped if other factors remain.
pub fn combine(expr: &Expr) -> Expr {
    match expr {
        Expr::Sum(terms) => {
            let terms = into_terms(Expr::sum(terms.iter().map(combine)));
            let (constant, others) = fold_constants(terms, Expr::add);
            if constant.is_zero() && !others.is_empty() {
                Expr::sum(others)
            } else {
                Expr::sum(std::iter::once(constant).chain(others))
            }
        },
        Expr::Product(factors) => {
            let factors = into_factors(Expr::product(factors.iter().map(combine)));
            let (constant, others) = fold_constants(factors, Expr::mul);
            if constant.is_zero() {
                Expr::Integer(0)
            } else if constant.is_one() && !others.is_empty() {
                Expr::product(others)
            } else {
                Expr::product(std::iter::once(constant).chain(others))
            }
        },
        Expr::Division(lhs, rhs) => {
            let (lhs, rhs) = (combine(lhs), combine(rhs));
            divide::reduce(&lhs, &rhs).unwrap_or_else(|| Expr::div(lhs, rhs))
        },
        Expr::Negation(operand) => match combine(operand) {
            Expr::Integer(n) => n.checked_neg()
                .map(Expr::Integer)
                .unwrap_or_else(|| Expr::Decimal(-(n as f64))),
            Expr::Decimal(d) => Expr::Decimal(-d),
            operand => Expr::neg(operand),
        },
        Expr::Parentheses(inner) => combine(inner),
        Expr::Empty | Expr::Integer(_) | Expr::Decimal(_) | Expr::Variable(_) => expr.clone(),
    }
}

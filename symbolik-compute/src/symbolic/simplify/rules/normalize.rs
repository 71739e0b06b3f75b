//! Rewrites negations as products.

use symbolik_parser::expr::Expr;
use super::map_children;

/// Recursively rewrites every `-a` as `-1*a`, and removes rendering-only parentheses.
///
/// Negations are semantically a product with `-1`, but storing them that way lets the other passes
/// treat the `-1` like any other constant factor.
pub fn normalize(expr: &Expr) -> Expr {
    match expr {
        Expr::Negation(operand) => Expr::product([Expr::Integer(-1), normalize(operand)]),
        Expr::Parentheses(inner) => normalize(inner),
        expr => map_children(expr, normalize),
    }
}

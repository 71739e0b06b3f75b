//! Merges nested sums and products.

use symbolik_parser::expr::Expr;
use super::map_children;

/// Recursively merges each sum nested directly in a sum, and each product nested directly in a
/// product, into its parent. Terms keep their order.
pub fn flatten(expr: &Expr) -> Expr {
    match expr {
        Expr::Sum(terms) => Expr::sum(terms.iter().map(flatten)),
        Expr::Product(factors) => Expr::product(factors.iter().map(flatten)),
        expr => map_children(expr, flatten),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_sum() {
        let expr = Expr::Sum(vec![
            Expr::int(2),
            Expr::Sum(vec![Expr::var("x"), Expr::var("y")]),
        ]);
        assert_eq!(
            flatten(&expr),
            Expr::Sum(vec![Expr::int(2), Expr::var("x"), Expr::var("y")]),
        );
    }

    #[test]
    fn deeply_nested_product() {
        let expr = Expr::Product(vec![
            Expr::Product(vec![
                Expr::var("x"),
                Expr::Product(vec![Expr::var("y"), Expr::var("z")]),
            ]),
            Expr::int(2),
        ]);
        assert_eq!(
            flatten(&expr),
            Expr::Product(vec![Expr::var("x"), Expr::var("y"), Expr::var("z"), Expr::int(2)]),
        );
    }

    #[test]
    fn different_kinds_are_kept() {
        let expr = Expr::Product(vec![
            Expr::Sum(vec![Expr::var("x"), Expr::var("y")]),
            Expr::var("z"),
        ]);
        assert_eq!(flatten(&expr), expr);
    }
}

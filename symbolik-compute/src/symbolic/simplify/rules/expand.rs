//! Expansion of products over sums.

use symbolik_parser::expr::Expr;
use super::map_children;

/// Recursively distributes every product over the sums among its factors.
///
/// `(a+b)*(c+d)` expands to `a*c + a*d + b*c + b*d`. Negations are rewritten as products with `-1`
/// first, so `-(a+b)` expands to `-1*a + -1*b`.
pub fn expand(expr: &Expr) -> Expr {
    match expr {
        Expr::Negation(operand) => expand(&Expr::product([Expr::Integer(-1), (**operand).clone()])),
        Expr::Product(factors) => {
            let mut terms = vec![Expr::Empty];
            for factor in factors.iter().map(expand) {
                terms = terms.iter()
                    .flat_map(|term| {
                        factor.terms()
                            .iter()
                            .map(move |factor_term| Expr::product([term.clone(), factor_term.clone()]))
                    })
                    .collect();
            }
            Expr::sum(terms)
        },
        Expr::Sum(terms) => Expr::sum(terms.iter().map(expand)),
        Expr::Parentheses(inner) => expand(inner),
        expr => map_children(expr, expand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn var(name: &str) -> Expr {
        Expr::var(name)
    }

    #[test]
    fn single_sum_factor() {
        // 2 * (2 + x)
        let expr = Expr::Product(vec![Expr::int(2), Expr::Sum(vec![Expr::int(2), var("x")])]);
        assert_eq!(
            expand(&expr),
            Expr::Sum(vec![
                Expr::Product(vec![Expr::int(2), Expr::int(2)]),
                Expr::Product(vec![Expr::int(2), var("x")]),
            ]),
        );
    }

    #[test]
    fn two_sum_factors() {
        let expr = Expr::Product(vec![
            Expr::Sum(vec![var("a"), var("b")]),
            Expr::Sum(vec![var("c"), var("d")]),
        ]);
        assert_eq!(expand(&expr).text(), "a * c + a * d + b * c + b * d");
    }

    #[test]
    fn negated_sum() {
        let expr = Expr::neg(Expr::Sum(vec![var("a"), var("b")]));
        assert_eq!(
            expand(&expr),
            Expr::Sum(vec![
                Expr::Product(vec![Expr::int(-1), var("a")]),
                Expr::Product(vec![Expr::int(-1), var("b")]),
            ]),
        );
    }

    #[test]
    fn nested_product_inside_sum_factor() {
        // x * (y * (1 + z))
        let expr = Expr::Product(vec![
            var("x"),
            Expr::Product(vec![var("y"), Expr::Sum(vec![Expr::int(1), var("z")])]),
        ]);
        assert_eq!(expand(&expr).text(), "x * y * 1 + x * y * z");
    }

    #[test]
    fn division_sides_are_expanded() {
        let expr = Expr::div(
            Expr::Product(vec![var("x"), Expr::Sum(vec![var("y"), var("z")])]),
            var("w"),
        );
        assert_eq!(expand(&expr).text(), "(x * y + x * z) / w");
    }
}

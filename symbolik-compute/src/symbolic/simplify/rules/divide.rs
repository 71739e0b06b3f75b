//! Numeric reduction of divisions.

use crate::primitive::is_divisible;
use symbolik_parser::expr::Expr;

/// Reduces the division of two constants, if the result can be represented exactly.
///
/// - `Integer / Integer` reduces to an [`Expr::Integer`] only if the division is exact, so `4/2`
///   becomes `2` but `3/2` is left as it is.
/// - Any other pair of constants reduces to an [`Expr::Decimal`], unless the divisor is zero.
///
/// Returns `None` if the division cannot be reduced.
pub fn reduce(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    match (lhs, rhs) {
        (Expr::Integer(a), Expr::Integer(b)) => {
            if !is_divisible(*a, *b) {
                return None;
            }
            Some(a.checked_div(*b)
                .map(Expr::Integer)
                .unwrap_or_else(|| Expr::Decimal(*a as f64 / *b as f64)))
        },
        (lhs, rhs) => {
            let (a, b) = (lhs.as_f64()?, rhs.as_f64()?);
            if b == 0.0 {
                None
            } else {
                Some(Expr::Decimal(a / b))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_integer_division() {
        assert_eq!(reduce(&Expr::int(4), &Expr::int(2)), Some(Expr::int(2)));
        assert_eq!(reduce(&Expr::int(-9), &Expr::int(3)), Some(Expr::int(-3)));
        assert_eq!(reduce(&Expr::int(9), &Expr::int(-3)), Some(Expr::int(-3)));
        assert_eq!(reduce(&Expr::int(0), &Expr::int(7)), Some(Expr::int(0)));
    }

    #[test]
    fn inexact_integer_division() {
        assert_eq!(reduce(&Expr::int(3), &Expr::int(2)), None);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(reduce(&Expr::int(3), &Expr::int(0)), None);
        assert_eq!(reduce(&Expr::decimal(3.0), &Expr::int(0)), None);
        assert_eq!(reduce(&Expr::int(3), &Expr::decimal(0.0)), None);
    }

    #[test]
    fn decimal_division() {
        assert_eq!(reduce(&Expr::decimal(1.5), &Expr::decimal(0.5)), Some(Expr::decimal(3.0)));
        assert_eq!(reduce(&Expr::int(3), &Expr::decimal(2.0)), Some(Expr::decimal(1.5)));
    }

    #[test]
    fn symbolic_division() {
        assert_eq!(reduce(&Expr::var("x"), &Expr::int(2)), None);
    }
}

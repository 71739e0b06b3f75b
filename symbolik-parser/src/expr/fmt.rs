//! Rendering of expressions as infix text.
//!
//! Children are only parenthesized when they bind less tightly than their parent, and terms of a
//! sum are joined with `-` rather than `+` when they are negated. The output can always be parsed
//! back into an expression with the same value.

use super::Expr;
use crate::op::Precedence;
use std::fmt::{self, Display, Formatter};

/// Writes the expression, wrapped in parentheses if `paren` is true.
fn write_wrapped(f: &mut Formatter, expr: &Expr, paren: bool) -> fmt::Result {
    if paren {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Returns true if the expression binds less tightly than an operator of the given precedence.
fn binds_looser(expr: &Expr, precedence: Precedence) -> bool {
    expr.precedence().map_or(false, |own| own < precedence)
}

/// Writes a decimal, always with a fractional part.
fn write_decimal(f: &mut Formatter, value: f64) -> fmt::Result {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        write!(f, "{}.0", text)
    } else {
        write!(f, "{}", text)
    }
}

/// Writes an integer.
///
/// The magnitude of `i64::MIN` is not a valid integer literal, so it is written as a decimal.
fn write_integer(f: &mut Formatter, value: i64) -> fmt::Result {
    if value == i64::MIN {
        write_decimal(f, value as f64)
    } else {
        write!(f, "{}", value)
    }
}

/// Writes the absolute value of a constant.
fn write_abs(f: &mut Formatter, constant: &Expr) -> fmt::Result {
    match constant {
        Expr::Integer(i64::MIN) => write_decimal(f, -(i64::MIN as f64)),
        Expr::Integer(n) => write!(f, "{}", n.unsigned_abs()),
        Expr::Decimal(d) => write_decimal(f, d.abs()),
        expr => write!(f, "{}", expr),
    }
}

/// Writes the factors of a product joined with `*`.
fn write_factors(f: &mut Formatter, factors: &[Expr]) -> fmt::Result {
    for (i, factor) in factors.iter().enumerate() {
        if i > 0 {
            write!(f, " * ")?;
        }
        write_wrapped(f, factor, binds_looser(factor, Precedence::Factor))?;
    }
    Ok(())
}

/// Writes a non-leading term of a sum, along with the sign that joins it to the previous term.
fn write_term(f: &mut Formatter, term: &Expr) -> fmt::Result {
    match term {
        Expr::Empty => Ok(()),
        Expr::Negation(operand) => {
            write!(f, " - ")?;
            write_wrapped(f, operand, binds_looser(operand, Precedence::Factor))
        },
        Expr::Integer(_) | Expr::Decimal(_) if term.is_negative_constant() => {
            write!(f, " - ")?;
            write_abs(f, term)
        },
        Expr::Product(factors) if factors.first().map_or(false, Expr::is_negative_constant) => {
            write!(f, " - ")?;
            let (coefficient, rest) = factors.split_at(1);
            match (&coefficient[0], rest) {
                (Expr::Integer(-1), []) => write!(f, "1"),
                (Expr::Integer(-1), rest) => write_factors(f, rest),
                (coefficient, []) => write_abs(f, coefficient),
                (coefficient, rest) => {
                    write_abs(f, coefficient)?;
                    write!(f, " * ")?;
                    write_factors(f, rest)
                },
            }
        },
        term => write!(f, " + {}", term),
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Integer(n) => write_integer(f, *n),
            Self::Decimal(d) => write_decimal(f, *d),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Negation(operand) => {
                write!(f, "-")?;
                write_wrapped(f, operand, binds_looser(operand, Precedence::Unary))
            },
            Self::Sum(terms) => {
                let mut iter = terms.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{}", first)?;
                }
                for term in iter {
                    write_term(f, term)?;
                }
                Ok(())
            },
            Self::Product(factors) => match factors.split_first() {
                Some((Self::Integer(-1), rest)) if !rest.is_empty() => {
                    write!(f, "-")?;
                    write_factors(f, rest)
                },
                _ => write_factors(f, factors),
            },
            Self::Division(lhs, rhs) => {
                write_wrapped(f, lhs, binds_looser(lhs, Precedence::Factor))?;
                write!(f, " / ")?;
                // division is not associative, so an equal precedence on the right also needs
                // parentheses
                let paren = rhs.precedence().map_or(false, |own| own <= Precedence::Factor);
                write_wrapped(f, rhs, paren)
            },
            Self::Parentheses(inner) => write!(f, "({})", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn x() -> Expr {
        Expr::var("x")
    }

    fn y() -> Expr {
        Expr::var("y")
    }

    #[test]
    fn negated_term() {
        assert_eq!(Expr::Sum(vec![Expr::int(5), Expr::neg(x())]).text(), "5 - x");
    }

    #[test]
    fn negative_integer_term() {
        assert_eq!(Expr::Sum(vec![Expr::int(5), Expr::int(-2)]).text(), "5 - 2");
    }

    #[test]
    fn sum_inside_product() {
        let expr = Expr::Product(vec![Expr::Sum(vec![x(), Expr::int(-2)]), Expr::int(2)]);
        assert_eq!(expr.text(), "(x - 2) * 2");
    }

    #[test]
    fn negated_sum_term() {
        let expr = Expr::Sum(vec![
            Expr::int(1),
            Expr::neg(Expr::Sum(vec![x(), Expr::neg(x())])),
        ]);
        assert_eq!(expr.text(), "1 - (x - x)");
    }

    #[test]
    fn negated_product_term() {
        let expr = Expr::Sum(vec![
            Expr::Product(vec![x(), y()]),
            Expr::neg(Expr::Product(vec![Expr::Sum(vec![x(), Expr::neg(x())]), x(), y()])),
        ]);
        assert_eq!(expr.text(), "x * y - (x - x) * x * y");
    }

    #[test]
    fn leading_negative_one() {
        let expr = Expr::Product(vec![Expr::int(-1), x()]);
        assert_eq!(expr.text(), "-x");
        let expr = Expr::Product(vec![Expr::int(-1), Expr::Sum(vec![x(), y()])]);
        assert_eq!(expr.text(), "-(x + y)");
    }

    #[test]
    fn negative_coefficient_term() {
        let expr = Expr::Sum(vec![
            Expr::int(12),
            Expr::Product(vec![Expr::int(-6), x()]),
            Expr::Product(vec![Expr::int(-1), y()]),
        ]);
        assert_eq!(expr.text(), "12 - 6 * x - y");
    }

    #[test]
    fn negative_decimal_term() {
        let expr = Expr::Sum(vec![x(), Expr::decimal(-2.5)]);
        assert_eq!(expr.text(), "x - 2.5");
    }

    #[test]
    fn decimals_keep_fraction() {
        assert_eq!(Expr::decimal(4.0).text(), "4.0");
        assert_eq!(Expr::decimal(0.55).text(), "0.55");
    }

    #[test]
    fn division_parentheses() {
        let expr = Expr::div(Expr::Sum(vec![x(), y()]), Expr::Product(vec![x(), y()]));
        assert_eq!(expr.text(), "(x + y) / (x * y)");
        let expr = Expr::div(Expr::Product(vec![x(), y()]), x());
        assert_eq!(expr.text(), "x * y / x");
        let expr = Expr::div(x(), Expr::div(y(), x()));
        assert_eq!(expr.text(), "x / (y / x)");
    }

    #[test]
    fn negation_of_operator() {
        assert_eq!(Expr::neg(Expr::Product(vec![x(), y()])).text(), "-(x * y)");
        assert_eq!(Expr::neg(Expr::neg(x())).text(), "--x");
    }

    #[test]
    fn smallest_integer_is_written_as_decimal() {
        assert_eq!(Expr::int(i64::MIN).text(), "-9223372036854775808.0");
        assert_eq!(Expr::Sum(vec![x(), Expr::int(i64::MIN)]).text(), "x - 9223372036854775808.0");
        assert_eq!(Expr::Product(vec![x(), Expr::int(i64::MIN)]).text(), "x * -9223372036854775808.0");
        assert_eq!(Expr::int(i64::MIN + 1).text(), "-9223372036854775807");
    }
}

use std::collections::HashMap;
use symbolik_parser::expr::Expr;

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Returns the context with the given variable added.
    pub fn with_var(mut self, name: &str, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Evaluates the expression.
    ///
    /// Returns [`None`] if the expression contains a variable that is not in the context, or is
    /// [`Expr::Empty`]. Division by zero follows floating-point rules.
    pub fn eval(&self, expr: &Expr) -> Option<f64> {
        match expr {
            Expr::Empty => None,
            Expr::Integer(n) => Some(*n as f64),
            Expr::Decimal(d) => Some(*d),
            Expr::Variable(name) => self.get_var(name),
            Expr::Negation(operand) => self.eval(operand).map(|value| -value),
            Expr::Sum(terms) => terms.iter().try_fold(0.0, |acc, term| Some(acc + self.eval(term)?)),
            Expr::Product(factors) => {
                factors.iter().try_fold(1.0, |acc, factor| Some(acc * self.eval(factor)?))
            },
            Expr::Division(lhs, rhs) => Some(self.eval(lhs)? / self.eval(rhs)?),
            Expr::Parentheses(inner) => self.eval(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::{
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use symbolik_parser::parse;

    #[test]
    fn constants() {
        let ctxt = Ctxt::new();
        assert_eq!(ctxt.eval(&parse("1 + 2 * 3").unwrap()), Some(7.0));
        assert_float_relative_eq!(ctxt.eval(&parse("1 / 3").unwrap()).unwrap(), 1.0 / 3.0);
        assert_eq!(ctxt.eval(&parse("-(2 - 5)").unwrap()), Some(3.0));
    }

    #[test]
    fn variables() {
        let ctxt = Ctxt::new().with_var("x", 2.5).with_var("y", -1.0);
        assert_eq!(ctxt.eval(&parse("x * y - x").unwrap()), Some(-5.0));
        assert_eq!(ctxt.get_var("x"), Some(2.5));
    }

    #[test]
    fn unbound_variable() {
        let ctxt = Ctxt::new().with_var("x", 1.0);
        assert_eq!(ctxt.eval(&parse("x + z").unwrap()), None);
    }

    #[test]
    fn empty() {
        assert_eq!(Ctxt::new().eval(&Expr::Empty), None);
    }
}

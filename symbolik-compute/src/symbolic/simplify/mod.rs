//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a canonical
//! form with the lowest complexity it can find. It does this in two phases:
//!
//! 1. The expression is canonicalized: negations become products with `-1`, nested sums and
//!    products are flattened, and constants are folded. The result is always accepted.
//! 2. The expression is repeatedly expanded, then its common factors are collected and its
//!    constants folded again. The rewritten expression replaces the current one only if it is
//!    strictly less complex; otherwise simplification stops.
//!
//! Complexity is an informal, arbitrary metric that is used to determine whether one expression is
//! simpler than another. The default complexity heuristic used is [`default_complexity`] (click
//! for more information). However, this can be overridden by providing a custom complexity
//! function to the [`simplify_with`] function.
//!
//! Because a rewrite is only accepted when it strictly lowers the complexity, simplification always
//! terminates, and simplifying an already simplified expression returns it unchanged.

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use rules::{
    collect::collect_with,
    combine::combine,
    expand::expand,
    flatten::flatten,
    normalize::normalize,
};
use step::Step;
use symbolik_parser::expr::Expr;
use tracing::{debug, trace};

/// The default complexity heuristic function.
///
/// This function computes complexity using these simple rules:
///
/// - `complexity(constant) = 1`
/// - `complexity(variable) = 2`
/// - `complexity(-a) = 1 + complexity(a)`
/// - `complexity(sum) = sum(complexity(terms)) + 2 * (terms - 1)`
/// - `complexity(product) = sum(complexity(factors)) + (factors - 1)`
/// - `complexity(a / b) = complexity(a) + complexity(b) + 1`
/// - `complexity(empty) = 0`
pub fn default_complexity(expr: &Expr) -> usize {
    let mut complexity = 0;
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        complexity += match expr {
            Expr::Empty => 0,
            Expr::Integer(_) | Expr::Decimal(_) => 1,
            Expr::Variable(_) => 2,
            Expr::Negation(operand) => {
                stack.push(operand);
                1
            },
            Expr::Sum(terms) => {
                stack.extend(terms.iter());
                2 * terms.len().saturating_sub(1)
            },
            Expr::Product(factors) => {
                stack.extend(factors.iter());
                factors.len().saturating_sub(1)
            },
            Expr::Division(lhs, rhs) => {
                stack.push(lhs);
                stack.push(rhs);
                1
            },
            Expr::Parentheses(inner) => {
                stack.push(inner);
                0
            },
        };
    }
    complexity
}

/// Runs a single pass over the expression, recording `step` if the pass changed it.
fn run_pass(expr: Expr, step: Step, pass: impl FnOnce(&Expr) -> Expr, steps: &mut Vec<Step>) -> Expr {
    let out = pass(&expr);
    if out != expr {
        trace!(?step, %out, "pass changed expression");
        steps.push(step);
    }
    out
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with<F>(
    expr: &Expr,
    complexity: F,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr
where
    F: Copy + Fn(&Expr) -> usize,
{
    let mut steps = Vec::new();
    let mut current = run_pass(expr.clone(), Step::NegationToProduct, normalize, &mut steps);
    current = run_pass(current, Step::Flatten, flatten, &mut steps);
    current = run_pass(current, Step::CombineTerms, combine, &mut steps);
    for step in steps.drain(..) {
        step_collector.push(step);
    }

    let mut current_complexity = complexity(&current);
    trace!(%current, current_complexity, "canonical form");

    loop {
        let mut candidate = run_pass(current.clone(), Step::DistributiveProperty, expand, &mut steps);
        candidate = run_pass(candidate, Step::CombineTerms, combine, &mut steps);
        candidate = run_pass(
            candidate,
            Step::CollectFactors,
            |expr| collect_with(expr, complexity),
            &mut steps,
        );
        candidate = run_pass(candidate, Step::CombineTerms, combine, &mut steps);

        let candidate_complexity = complexity(&candidate);
        if candidate_complexity >= current_complexity {
            trace!(%candidate, candidate_complexity, current_complexity, "rejected rewrite");
            break;
        }

        debug!(
            from = %current,
            to = %candidate,
            before = current_complexity,
            after = candidate_complexity,
            "accepted rewrite"
        );
        for step in steps.drain(..) {
            step_collector.push(step);
        }
        current = candidate;
        current_complexity = candidate_complexity;
    }

    current
}

/// Simplify the given expression, using the default complexity heuristic function.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify_with(expr, default_complexity, &mut ())
}

/// Simplify the given expression, using the given complexity heuristic function.
///
/// The complexity heuristic function should return a number that represents the complexity of the
/// given expression. The lower the number, the simpler the expression.
pub fn simplify_with<F>(expr: &Expr, complexity: F) -> Expr
where
    F: Copy + Fn(&Expr) -> usize,
{
    inner_simplify_with(expr, complexity, &mut ())
}

/// Simplify the given expression, using the default complexity heuristic function. The passes that
/// changed the expression are also collected and returned, in the order they ran. This is useful
/// for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, default_complexity, &mut steps);
    (expr, steps)
}

//! Extraction of common factors from sums.
//!
//! For a sum, every distinct non-constant factor of its terms is a candidate. For each candidate,
//! the terms containing it are found, along with the smallest number of times it appears in any of
//! those terms. Candidates contained in exactly the same terms are extracted together as a single
//! composite factor, so `a*b*c + a*b*d` is factored as `a*b*(c + d)` rather than by `a` and `b`
//! separately.
//!
//! Each group produces one factorization `factor*operand + remainder`, where `remainder` holds the
//! terms not containing the factor. The factorization with the lowest complexity wins, and its
//! operand and remainder are collected recursively; the sum itself is kept if no factorization is
//! simpler.

use symbolik_parser::expr::Expr;
use super::{combine::combine, map_children, normalize::normalize};
use tracing::trace;

/// A candidate factor, along with the terms of the sum that contain it.
#[derive(Debug)]
struct Candidate<'a> {
    /// The factor.
    factor: &'a Expr,

    /// The smallest number of times the factor appears in any of the terms containing it.
    multiplicity: usize,

    /// Indices of the terms containing the factor.
    containing: Vec<usize>,
}

/// One way to factor a sum, as `factor*operand + remainder`.
#[derive(Debug, Clone, PartialEq)]
pub struct Factorization {
    /// The extracted factor.
    pub factor: Expr,

    /// The sum of what is left of each term containing the factor, after the factor is removed.
    pub operand: Expr,

    /// The sum of the terms that do not contain the factor.
    pub remainder: Expr,
}

impl Factorization {
    /// Rebuilds the expression represented by this factorization.
    pub fn into_expr(self) -> Expr {
        Expr::sum([Expr::product([self.factor, self.operand]), self.remainder])
    }
}

/// Finds the distinct non-constant factors of the given terms, in encounter order, and the terms
/// that contain each.
fn find_candidates<'a>(factor_lists: &[&'a [Expr]]) -> Vec<Candidate<'a>> {
    let mut candidates: Vec<Candidate> = Vec::new();
    for factors in factor_lists {
        for factor in factors.iter().filter(|factor| !factor.is_constant()) {
            if candidates.iter().any(|candidate| candidate.factor == factor) {
                continue;
            }

            let mut containing = Vec::new();
            let mut multiplicity = usize::MAX;
            for (i, term_factors) in factor_lists.iter().enumerate() {
                let count = term_factors.iter().filter(|other| *other == factor).count();
                if count > 0 {
                    containing.push(i);
                    multiplicity = multiplicity.min(count);
                }
            }

            candidates.push(Candidate { factor, multiplicity, containing });
        }
    }
    candidates
}

/// Removes `count` occurrences of `factor` from the list of factors.
fn remove_factor(factors: &mut Vec<Expr>, factor: &Expr, count: usize) {
    for _ in 0..count {
        if let Some(idx) = factors.iter().position(|other| other == factor) {
            factors.remove(idx);
        }
    }
}

/// Returns every factorization of the sum with the given terms, one per group of candidate factors
/// contained in the same terms. Groups contained in fewer than two terms are skipped.
pub fn factorizations(terms: &[Expr]) -> Vec<Factorization> {
    let factor_lists = terms.iter().map(Expr::factors).collect::<Vec<_>>();
    let candidates = find_candidates(&factor_lists);

    // group candidates contained in the same terms, keeping the order the groups first appear in
    let mut groups: Vec<Vec<&Candidate>> = Vec::new();
    for candidate in candidates.iter().filter(|candidate| candidate.containing.len() >= 2) {
        match groups.iter_mut().find(|group| group[0].containing == candidate.containing) {
            Some(group) => group.push(candidate),
            None => groups.push(vec![candidate]),
        }
    }

    groups.into_iter()
        .map(|group| {
            let containing = &group[0].containing;
            let factor = Expr::product(group.iter().flat_map(|candidate| {
                std::iter::repeat(candidate.factor.clone()).take(candidate.multiplicity)
            }));

            let operand = Expr::sum(containing.iter().map(|&i| {
                let mut factors = factor_lists[i].to_vec();
                for candidate in &group {
                    remove_factor(&mut factors, candidate.factor, candidate.multiplicity);
                }
                if factors.is_empty() {
                    Expr::Integer(1)
                } else {
                    Expr::product(factors)
                }
            }));

            let remainder = Expr::sum(
                terms.iter()
                    .enumerate()
                    .filter(|(i, _)| !containing.contains(i))
                    .map(|(_, term)| term.clone()),
            );

            Factorization { factor, operand, remainder }
        })
        .collect()
}

/// Recursively extracts common factors from every sum in the expression, using the given
/// complexity heuristic to choose between factorizations.
///
/// Factorizations are compared by their combined form only. The operand and remainder of the
/// chosen factorization are then collected in turn, so each sum is split at most once per level.
pub fn collect_with<F>(expr: &Expr, complexity: F) -> Expr
where
    F: Copy + Fn(&Expr) -> usize,
{
    let collected = map_children(expr, |child| collect_with(child, complexity));
    let terms = match &collected {
        Expr::Sum(terms) => terms.iter().map(normalize).collect::<Vec<_>>(),
        _ => return collected,
    };

    let mut best_complexity = complexity(&collected);
    let mut best = None;

    for factorization in factorizations(&terms) {
        let candidate = combine(&factorization.clone().into_expr());
        let candidate_complexity = complexity(&candidate);
        trace!(%candidate, candidate_complexity, best_complexity, "considering factorization");
        if candidate_complexity < best_complexity {
            best_complexity = candidate_complexity;
            best = Some((factorization, candidate));
        }
    }

    let Some((factorization, candidate)) = best else {
        return collected;
    };

    let refined = combine(&Factorization {
        operand: collect_with(&factorization.operand, complexity),
        remainder: collect_with(&factorization.remainder, complexity),
        ..factorization
    }.into_expr());
    if complexity(&refined) <= best_complexity {
        refined
    } else {
        candidate
    }
}

/// Recursively extracts common factors from every sum in the expression, using the default
/// complexity heuristic.
pub fn collect(expr: &Expr) -> Expr {
    collect_with(expr, crate::symbolic::simplify::default_complexity)
}

//! Randomized checks over generated expression trees.

use rand::{rngs::StdRng, Rng, SeedableRng};
use symbolik_compute::{numerical::Ctxt, symbolic::simplify};
use symbolik_parser::{expr::Expr, parse};

const CASES: usize = 300;
const DEPTH: usize = 3;

/// Generates a random leaf.
fn leaf(rng: &mut StdRng) -> Expr {
    match rng.gen_range(0..4) {
        0 => Expr::int(rng.gen_range(-4..=4)),
        1 => Expr::decimal([0.5, 1.5, 2.25][rng.gen_range(0..3)]),
        2 => Expr::var("x"),
        _ => Expr::var("y"),
    }
}

/// Generates a random divisor that can never evaluate to zero.
fn divisor(rng: &mut StdRng) -> Expr {
    match rng.gen_range(0..3) {
        0 => Expr::int(rng.gen_range(1..=4)),
        1 => Expr::var("x"),
        _ => Expr::var("y"),
    }
}

/// Generates a random expression tree of at most the given depth.
fn expr(rng: &mut StdRng, depth: usize) -> Expr {
    if depth == 0 || rng.gen_bool(0.25) {
        return leaf(rng);
    }

    match rng.gen_range(0..4) {
        0 => {
            let n = rng.gen_range(2..=3);
            Expr::sum((0..n).map(|_| expr(rng, depth - 1)).collect::<Vec<_>>())
        },
        1 => {
            let lhs = expr(rng, depth - 1);
            Expr::product([lhs, expr(rng, depth - 1)])
        },
        2 => Expr::neg(expr(rng, depth - 1)),
        _ => {
            let lhs = expr(rng, depth - 1);
            Expr::div(lhs, divisor(rng))
        },
    }
}

/// Generates a product of three or four sums, each with three or four terms, so that expansion
/// produces up to a few hundred terms sharing many factors.
fn product_of_sums(rng: &mut StdRng) -> Expr {
    let factors = rng.gen_range(3..=4);
    Expr::product((0..factors).map(|_| {
        let terms = rng.gen_range(3..=4);
        Expr::sum((0..terms).map(|_| match rng.gen_range(0..3) {
            0 => Expr::int(rng.gen_range(-3..=3)),
            _ => Expr::var(["x", "y", "z", "w"][rng.gen_range(0..4)]),
        }).collect::<Vec<_>>())
    }).collect::<Vec<_>>())
}

/// Returns true if the two values are equal, up to floating-point error.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn ctxt() -> Ctxt {
    Ctxt::new()
        .with_var("x", 1.7)
        .with_var("y", -0.6)
        .with_var("z", 2.3)
        .with_var("w", -1.1)
}

#[test]
fn simplify_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..CASES {
        let expr = expr(&mut rng, DEPTH);
        let once = simplify(&expr);
        let twice = simplify(&once);
        assert_eq!(twice, once, "expression: {}", expr);
    }
}

#[test]
fn simplify_preserves_value() {
    let mut rng = StdRng::seed_from_u64(0xca5);
    let ctxt = ctxt();
    for _ in 0..CASES {
        let expr = expr(&mut rng, DEPTH);
        let Some(before) = ctxt.eval(&expr) else { continue };
        if !before.is_finite() {
            continue;
        }

        let simplified = simplify(&expr);
        let after = ctxt.eval(&simplified).unwrap();
        assert!(
            close(before, after),
            "{} = {} but simplified {} = {}",
            expr, before, simplified, after,
        );
    }
}

#[test]
fn rendered_text_preserves_value() {
    let mut rng = StdRng::seed_from_u64(0x7e47);
    let ctxt = ctxt();
    for _ in 0..CASES {
        let expr = expr(&mut rng, DEPTH);
        let reparsed = parse(&expr.text()).unwrap();
        let (Some(before), Some(after)) = (ctxt.eval(&expr), ctxt.eval(&reparsed)) else {
            panic!("could not evaluate {}", expr);
        };
        assert!(close(before, after), "{} reparsed as {}", expr, reparsed);
    }
}

#[test]
fn products_of_sums_simplify() {
    let mut rng = StdRng::seed_from_u64(0xfac7);
    let ctxt = ctxt();
    for _ in 0..40 {
        let expr = product_of_sums(&mut rng);
        let simplified = simplify(&expr);
        assert_eq!(simplify(&simplified), simplified, "expression: {}", expr);

        let before = ctxt.eval(&expr).unwrap();
        let after = ctxt.eval(&simplified).unwrap();
        assert!(close(before, after), "{} = {} but simplified {} = {}", expr, before, simplified, after);
    }
}

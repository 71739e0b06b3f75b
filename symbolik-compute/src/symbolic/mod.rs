//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are the [`Expr`] trees produced by [`symbolik_parser`]. Every pass in this module
//! takes a tree by reference and builds a new one; no tree is ever modified in place.
//!
//! ```
//! use symbolik_compute::symbolic::simplify;
//! use symbolik_parser::parse;
//!
//! let expr = parse("2 * (2 + x) + 4 * (2 + x)").unwrap();
//! assert_eq!(simplify(&expr).text(), "12 + 6 * x");
//! ```
//!
//! # Simplification
//!
//! See the [`simplify`] module.

pub mod simplify;
pub mod step_collector;

pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use symbolik_parser::expr::Expr;

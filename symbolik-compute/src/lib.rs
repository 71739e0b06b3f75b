//! Simplification and numeric evaluation of expressions produced by [`symbolik_parser`].
//!
//! - [`symbolic`] rewrites an [`Expr`](symbolik_parser::expr::Expr) into a canonical, simpler
//!   form with [`simplify`](symbolic::simplify).
//! - [`numerical`] evaluates an expression to an [`f64`], given values for its variables.
//! - [`primitive`] contains integer helpers shared by both.

pub mod numerical;
pub mod primitive;
pub mod symbolic;

//! Numeric evaluation of expressions.
//!
//! An expression is evaluated to an [`f64`] in a [`Ctxt`] that binds values to its variables.
//!
//! ```
//! use symbolik_compute::numerical::Ctxt;
//! use symbolik_parser::parse;
//!
//! let expr = parse("2 * x + 1").unwrap();
//! let ctxt = Ctxt::new().with_var("x", 3.0);
//! assert_eq!(ctxt.eval(&expr), Some(7.0));
//! ```

pub mod ctxt;

pub use ctxt::Ctxt;

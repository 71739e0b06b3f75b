//! Parsing of arithmetic expressions into an expression tree.
//!
//! Parsing happens in two stages:
//!
//! - The [`tokenizer`] splits the input into [`Token`]s, deciding whether each `+` and `-` is a
//!   unary sign or a binary operator from the token before it.
//! - The [`assembler`] combines the tokens into an [`Expr`] with the shunting-yard algorithm,
//!   following the precedence and associativity rules in the [`op`] table.
//!
//! Both stages report failures as an [`Error`] pointing at the offending region of the input.
//!
//! ```
//! use symbolik_parser::{parse, expr::Expr};
//!
//! let expr = parse("5 - x").unwrap();
//! assert_eq!(expr, Expr::Sum(vec![Expr::Integer(5), Expr::neg(Expr::var("x"))]));
//! assert_eq!(expr.text(), "5 - x");
//! ```

pub mod assembler;
pub mod error;
pub mod expr;
pub mod op;
pub mod tokenizer;

pub use assembler::assemble;
pub use error::Error;
pub use expr::Expr;
pub use tokenizer::{tokenize, Token, TokenValue};

/// Tokenizes and assembles the input into an [`Expr`].
pub fn parse(input: &str) -> Result<Expr, Error> {
    assemble(&tokenize(input)?)
}

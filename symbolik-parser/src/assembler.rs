//! Operator-precedence (shunting-yard) assembly of tokens into an [`Expr`].
//!
//! The assembler keeps two stacks: one of pending operators and opening parentheses, and one of
//! operands. Each incoming operator first applies every stacked operator that binds at least as
//! tightly as itself (see [`OpKind::yields_to`]), then waits on the stack for its own operands.

use crate::error::{
    EmptyParenthesis,
    Error,
    MismatchedParenthesis,
    Missing,
    MissingOperand,
    NotSingleExpression,
};
use crate::expr::Expr;
use crate::op::OpKind;
use crate::tokenizer::{Token, TokenValue};
use std::ops::Range;
use tracing::trace;

/// An item waiting on the operator stack.
#[derive(Debug, Clone)]
enum Pending {
    /// An operator, with the span of its token.
    Op {
        op: OpKind,
        span: Range<usize>,
    },

    /// An opening parenthesis, with the number of operands that were on the operand stack when it
    /// was pushed. Operators inside the parentheses cannot take operands from below that mark.
    Paren {
        span: Range<usize>,
        floor: usize,
    },
}

/// An assembled operand, with the span of the input it covers.
#[derive(Debug, Clone)]
struct Operand {
    expr: Expr,
    span: Range<usize>,
}

/// Assembles a sequence of tokens into a single [`Expr`].
///
/// Empty input assembles to [`Expr::Empty`].
pub fn assemble(tokens: &[Token]) -> Result<Expr, Error> {
    let mut assembler = Assembler::default();
    for token in tokens {
        assembler.push(token)?;
    }
    assembler.finish()
}

/// The state of an in-progress assembly.
#[derive(Debug, Default)]
struct Assembler {
    operators: Vec<Pending>,
    operands: Vec<Operand>,

    /// True if the previous token was an operator or an opening parenthesis, or there was no
    /// previous token.
    after_operator: bool,

    /// The number of tokens pushed so far.
    pushed: usize,
}

impl Assembler {
    /// Pushes the next token.
    fn push(&mut self, token: &Token) -> Result<(), Error> {
        let span = token.span.clone();
        let after_operator = self.pushed == 0 || self.after_operator;
        self.pushed += 1;
        self.after_operator = false;

        match &token.value {
            TokenValue::Int(n) => self.push_operand(Expr::Integer(*n), span),
            TokenValue::Float(f) => self.push_operand(Expr::Decimal(*f), span),
            TokenValue::Name(name) => self.push_operand(Expr::Variable(name.clone()), span),
            TokenValue::OpenParen => {
                self.operators.push(Pending::Paren { span, floor: self.operands.len() });
                self.after_operator = true;
            },
            TokenValue::CloseParen => self.close_paren(span)?,
            TokenValue::BinOp(op) => {
                if after_operator {
                    return Err(Error::new(
                        vec![span],
                        MissingOperand { op: op.symbol(), missing: Missing::Left },
                    ));
                }
                self.push_op(OpKind::Binary(*op), span)?;
            },
            TokenValue::UnaryOp(op) => self.push_op(OpKind::Unary(*op), span)?,
        }

        Ok(())
    }

    fn push_operand(&mut self, expr: Expr, span: Range<usize>) {
        self.operands.push(Operand { expr, span });
    }

    /// Applies the stacked operators that bind at least as tightly as `op`, then pushes `op`.
    fn push_op(&mut self, op: OpKind, span: Range<usize>) -> Result<(), Error> {
        while let Some(Pending::Op { op: top, .. }) = self.operators.last() {
            if !op.yields_to(*top) {
                break;
            }
            if let Some(Pending::Op { op: top, span: top_span }) = self.operators.pop() {
                self.apply(top, top_span)?;
            }
        }

        self.operators.push(Pending::Op { op, span });
        self.after_operator = true;
        Ok(())
    }

    /// Applies operators until the matching opening parenthesis, then discards it.
    fn close_paren(&mut self, close: Range<usize>) -> Result<(), Error> {
        loop {
            match self.operators.pop() {
                Some(Pending::Op { op, span }) => self.apply(op, span)?,
                Some(Pending::Paren { span: open, floor }) => {
                    let whole = open.start..close.end;
                    if self.operands.len() <= floor {
                        return Err(Error::new(vec![whole], EmptyParenthesis));
                    }
                    if let Some(operand) = self.operands.last_mut() {
                        operand.span = whole;
                    }
                    return Ok(());
                },
                None => {
                    return Err(Error::new(vec![close], MismatchedParenthesis { opening: false }));
                },
            }
        }
    }

    /// Returns the number of operands available to operators at the top of the operator stack.
    fn floor(&self) -> usize {
        self.operators.iter()
            .rev()
            .find_map(|pending| match pending {
                Pending::Paren { floor, .. } => Some(*floor),
                Pending::Op { .. } => None,
            })
            .unwrap_or(0)
    }

    /// Pops the top operand if it is available and satisfies the given position check.
    fn pop_operand(&mut self, accept: impl Fn(&Range<usize>) -> bool) -> Option<Operand> {
        if self.operands.len() <= self.floor() {
            return None;
        }
        match self.operands.last() {
            Some(operand) if accept(&operand.span) => self.operands.pop(),
            _ => None,
        }
    }

    /// Applies an operator to the operands at the top of the operand stack.
    fn apply(&mut self, op: OpKind, span: Range<usize>) -> Result<(), Error> {
        trace!(op = op.symbol(), ?span, "applying operator");
        match op {
            OpKind::Unary(unary) => {
                let Some(operand) = self.pop_operand(|operand| operand.start >= span.end) else {
                    return Err(Error::new(
                        vec![span],
                        MissingOperand { op: unary.symbol(), missing: Missing::Operand },
                    ));
                };
                self.push_operand(Expr::unary(unary, operand.expr), span.start..operand.span.end);
            },
            OpKind::Binary(binary) => {
                let right = self.pop_operand(|operand| operand.start >= span.end);
                let left = self.pop_operand(|operand| operand.end <= span.start);
                match (left, right) {
                    (Some(left), Some(right)) => {
                        let whole = left.span.start..right.span.end;
                        self.push_operand(Expr::binary(binary, left.expr, right.expr), whole);
                    },
                    (left, right) => {
                        let missing = match (left, right) {
                            (None, Some(_)) => Missing::Left,
                            (Some(_), None) => Missing::Right,
                            _ => Missing::Both,
                        };
                        return Err(Error::new(
                            vec![span],
                            MissingOperand { op: binary.symbol(), missing },
                        ));
                    },
                }
            },
        }

        Ok(())
    }

    /// Applies the remaining operators and returns the single assembled expression.
    fn finish(mut self) -> Result<Expr, Error> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Op { op, span } => self.apply(op, span)?,
                Pending::Paren { span, .. } => {
                    return Err(Error::new(vec![span], MismatchedParenthesis { opening: true }));
                },
            }
        }

        let mut operands = self.operands.into_iter();
        match (operands.next(), operands.next()) {
            (None, _) => Ok(Expr::Empty),
            (Some(operand), None) => Ok(operand.expr),
            (Some(first), Some(second)) => Err(Error::new(
                vec![first.span, second.span],
                NotSingleExpression,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    fn assemble_str(input: &str) -> Result<Expr, Error> {
        assemble(&tokenize(input)?)
    }

    fn missing(input: &str) -> Option<MissingOperand> {
        assemble_str(input).unwrap_err().downcast_ref::<MissingOperand>().cloned()
    }

    #[test]
    fn precedence() {
        assert_eq!(
            assemble_str("1 + 2 * x").unwrap(),
            Expr::Sum(vec![
                Expr::int(1),
                Expr::Product(vec![Expr::int(2), Expr::var("x")]),
            ]),
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(
            assemble_str("a - b - c").unwrap(),
            Expr::Sum(vec![
                Expr::var("a"),
                Expr::neg(Expr::var("b")),
                Expr::neg(Expr::var("c")),
            ]),
        );
    }

    #[test]
    fn division_is_left_associative() {
        assert_eq!(
            assemble_str("a / b / c").unwrap(),
            Expr::div(Expr::div(Expr::var("a"), Expr::var("b")), Expr::var("c")),
        );
    }

    #[test]
    fn unary_chain() {
        assert_eq!(
            assemble_str("--3").unwrap(),
            Expr::neg(Expr::neg(Expr::int(3))),
        );
        assert_eq!(assemble_str("+x").unwrap(), Expr::var("x"));
    }

    #[test]
    fn unary_binds_tighter_than_binary() {
        assert_eq!(
            assemble_str("-x * y").unwrap(),
            Expr::Product(vec![Expr::neg(Expr::var("x")), Expr::var("y")]),
        );
        assert_eq!(
            assemble_str("2 * -3").unwrap(),
            Expr::Product(vec![Expr::int(2), Expr::neg(Expr::int(3))]),
        );
    }

    #[test]
    fn parentheses_group() {
        assert_eq!(
            assemble_str("(1 + 2) * 3").unwrap(),
            Expr::Product(vec![
                Expr::Sum(vec![Expr::int(1), Expr::int(2)]),
                Expr::int(3),
            ]),
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(assemble_str("").unwrap(), Expr::Empty);
    }

    #[test]
    fn mismatched_parenthesis() {
        let err = assemble_str("(1+2").unwrap_err();
        assert_eq!(err.downcast_ref::<MismatchedParenthesis>(), Some(&MismatchedParenthesis { opening: true }));
        assert_eq!(err.spans, vec![0..1]);

        let err = assemble_str("1+2)").unwrap_err();
        assert_eq!(err.downcast_ref::<MismatchedParenthesis>(), Some(&MismatchedParenthesis { opening: false }));
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn missing_operands() {
        assert_eq!(missing("1-"), Some(MissingOperand { op: "-", missing: Missing::Right }));
        assert_eq!(missing("*1"), Some(MissingOperand { op: "*", missing: Missing::Left }));
        assert_eq!(missing("1 + * 2"), Some(MissingOperand { op: "*", missing: Missing::Left }));
        assert_eq!(missing("(1 +) 2"), Some(MissingOperand { op: "+", missing: Missing::Right }));
        assert_eq!(missing("2 * -"), Some(MissingOperand { op: "-", missing: Missing::Operand }));
    }

    #[test]
    fn empty_parenthesis() {
        let err = assemble_str("1 + ()").unwrap_err();
        assert!(err.is::<EmptyParenthesis>());
        assert_eq!(err.spans, vec![4..6]);
    }

    #[test]
    fn not_single_expression() {
        let err = assemble_str("3x").unwrap_err();
        assert!(err.is::<NotSingleExpression>());
        assert_eq!(err.spans, vec![0..1, 1..2]);
    }
}

use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }

    /// Visits the node on top of the stack if its children were all visited, otherwise pushes its
    /// children so that the leftmost is visited next.
    fn descend(&mut self, children: &[&'a Expr]) -> Option<Option<&'a Expr>> {
        match children.last() {
            Some(last) if !self.is_last_visited(*last) => {
                self.stack.extend(children.iter().rev());
                None
            },
            _ => Some(self.visit()),
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            let visited = match expr {
                Expr::Empty | Expr::Integer(_) | Expr::Decimal(_) | Expr::Variable(_) => {
                    return self.visit();
                },
                Expr::Negation(operand) | Expr::Parentheses(operand) => {
                    self.descend(&[operand.as_ref()])
                },
                Expr::Sum(terms) | Expr::Product(terms) => {
                    let children = terms.iter().collect::<Vec<_>>();
                    self.descend(&children)
                },
                Expr::Division(lhs, rhs) => self.descend(&[lhs.as_ref(), rhs.as_ref()]),
            };

            if let Some(visited) = visited {
                return visited;
            }
        }
    }
}

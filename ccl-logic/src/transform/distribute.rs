/*! Implements the distribution of conjunction over disjunction.

Distribution stops at quantifiers: a quantified expression is opaque to the connectives
around it and only its body is distributed.
*/
use crate::syntax::Expression;

/// Is the trait of types whose conjunctions can be distributed over disjunctions.
pub trait Distribute {
    /// Returns an expression where no conjunction directly contains a disjunction, within
    /// every quantifier-free region. The receiver is expected to be in NNF.
    ///
    /// **Example**:
    /// ```rust
    /// use ccl_logic::syntax::Expression;
    /// use ccl_logic::transform::Distribute;
    ///
    /// let expression = Expression::atom("P1")
    ///     .and(Expression::atom("P2").or(Expression::atom("P3")));
    ///
    /// assert_eq!("(P1 ∧ P2) ∨ (P1 ∧ P3)", expression.distribute().to_string());
    /// ```
    fn distribute(&self) -> Expression;
}

impl Distribute for Expression {
    fn distribute(&self) -> Expression {
        distribute(self)
    }
}

fn distribute(expression: &Expression) -> Expression {
    match expression {
        Expression::Atom(_) | Expression::App(..) | Expression::Not(_) => expression.clone(),
        Expression::And(left, right) => distribute_and(distribute(left), distribute(right)),
        Expression::Or(left, right) => distribute(left).or(distribute(right)),
        Expression::Exists(variable, this) => {
            Expression::exists(variable.clone(), distribute(this))
        }
        Expression::Forall(variable, this) => {
            Expression::forall(variable.clone(), distribute(this))
        }
    }
}

// Conjoins two distributed expressions, pushing the conjunction into the disjunctions at
// their roots. The right operand is split first.
fn distribute_and(left: Expression, right: Expression) -> Expression {
    match (left, right) {
        (left, Expression::Or(first, second)) => {
            distribute_and(left.clone(), *first).or(distribute_and(left, *second))
        }
        (Expression::Or(first, second), right) => {
            distribute_and(*first, right.clone()).or(distribute_and(*second, right))
        }
        (left, right) => left.and(right),
    }
}

/*! Implements splitting a distributed expression into its OR-free fragments. */
use crate::syntax::Expression;
use itertools::Itertools;

/// Is the trait of types that can be split by disjunction.
pub trait Split {
    /// Returns the OR-free fragments of the receiver, in order. The receiver is expected
    /// to be distributed.
    ///
    /// A disjunction contributes the fragments of its left operand before those of its
    /// right operand; a conjunction contributes the product of the fragments of its
    /// operands; a quantifier wraps every fragment of its body.
    ///
    /// **Example**:
    /// ```rust
    /// use ccl_logic::syntax::{Expression, Var};
    /// use ccl_logic::transform::Split;
    ///
    /// let body = Expression::app("F1", "x").or(Expression::app("F2", "x"));
    /// let fragments = Expression::forall(Var::from("x"), body).split();
    ///
    /// assert_eq!("∀ x. F1(x)", fragments[0].to_string());
    /// assert_eq!("∀ x. F2(x)", fragments[1].to_string());
    /// ```
    fn split(&self) -> Vec<Expression>;
}

impl Split for Expression {
    fn split(&self) -> Vec<Expression> {
        split(self)
    }
}

fn split(expression: &Expression) -> Vec<Expression> {
    match expression {
        Expression::Atom(_) | Expression::App(..) | Expression::Not(_) => {
            vec![expression.clone()]
        }
        Expression::Or(left, right) => {
            let mut fragments = split(left);
            fragments.extend(split(right));
            fragments
        }
        Expression::And(left, right) => split(left)
            .into_iter()
            .cartesian_product(split(right))
            .map(|(left, right)| left.and(right))
            .collect(),
        Expression::Exists(variable, this) => split(this)
            .into_iter()
            .map(|fragment| Expression::exists(variable.clone(), fragment))
            .collect(),
        Expression::Forall(variable, this) => split(this)
            .into_iter()
            .map(|fragment| Expression::forall(variable.clone(), fragment))
            .collect(),
    }
}

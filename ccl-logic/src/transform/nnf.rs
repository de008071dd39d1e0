/*! Implements an algorithm for transforming an [`Expression`] to Negation Normal Form (NNF).

[`Expression`]: crate::syntax::Expression
*/
use crate::syntax::Expression;
use std::{fmt, str::FromStr};

/// Is the policy for pushing a negation into a conjunction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotAndStrategy {
    /// Applies De Morgan's law: `¬(A ∧ B)` becomes `¬A ∨ ¬B`.
    Simple,

    /// Produces one disjunct per negated conjunct: `¬(A ∧ B)` becomes
    /// `(¬A ∧ B) ∨ (A ∧ ¬B)`.
    ///
    /// **Note**: the case where both conjuncts are false has no disjunct of its own. The
    /// strategy trades that case for scenarios that falsify exactly one conjunct.
    Expanded,
}

impl Default for NotAndStrategy {
    fn default() -> Self {
        Self::Simple
    }
}

impl FromStr for NotAndStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "expanded" => Ok(Self::Expanded),
            _ => Err(format!("invalid NOT-AND strategy '{}'", s)),
        }
    }
}

impl fmt::Display for NotAndStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Expanded => write!(f, "expanded"),
        }
    }
}

/// Is the trait of types that can be transformed to Negation Normal Form.
pub trait ToNnf {
    /// Transforms `self` to an NNF, negating conjunctions according to `strategy`.
    ///
    /// **Example**:
    /// ```rust
    /// use ccl_logic::syntax::Expression;
    /// use ccl_logic::transform::{NotAndStrategy, ToNnf};
    ///
    /// let expression = Expression::not(Expression::atom("P1").and(Expression::atom("P2")));
    ///
    /// assert_eq!("¬P1 ∨ ¬P2", expression.nnf_with(NotAndStrategy::Simple).to_string());
    /// assert_eq!(
    ///     "(¬P1 ∧ P2) ∨ (P1 ∧ ¬P2)",
    ///     expression.nnf_with(NotAndStrategy::Expanded).to_string()
    /// );
    /// ```
    fn nnf_with(&self, strategy: NotAndStrategy) -> Expression;

    /// Transforms `self` to an NNF with the default strategy.
    fn nnf(&self) -> Expression {
        self.nnf_with(NotAndStrategy::default())
    }
}

impl ToNnf for Expression {
    fn nnf_with(&self, strategy: NotAndStrategy) -> Expression {
        nnf(self, strategy)
    }
}

// Returns the NNF of the negation of `expression`.
fn push_not(expression: &Expression, strategy: NotAndStrategy) -> Expression {
    match expression {
        Expression::Atom(_) | Expression::App(..) => Expression::not(expression.clone()),
        Expression::Not(this) => nnf(this, strategy),
        Expression::Or(left, right) => push_not(left, strategy).and(push_not(right, strategy)),
        Expression::And(left, right) => match strategy {
            NotAndStrategy::Simple => push_not(left, strategy).or(push_not(right, strategy)),
            NotAndStrategy::Expanded => {
                let not_left_and_right = push_not(left, strategy).and(nnf(right, strategy));
                let left_and_not_right = nnf(left, strategy).and(push_not(right, strategy));
                not_left_and_right.or(left_and_not_right)
            }
        },
        Expression::Forall(variable, this) => {
            Expression::exists(variable.clone(), push_not(this, strategy))
        }
        Expression::Exists(variable, this) => {
            Expression::forall(variable.clone(), push_not(this, strategy))
        }
    }
}

fn nnf(expression: &Expression, strategy: NotAndStrategy) -> Expression {
    match expression {
        Expression::Atom(_) | Expression::App(..) => expression.clone(),
        Expression::Not(this) => push_not(this, strategy),
        Expression::And(left, right) => nnf(left, strategy).and(nnf(right, strategy)),
        Expression::Or(left, right) => nnf(left, strategy).or(nnf(right, strategy)),
        Expression::Exists(variable, this) => {
            Expression::exists(variable.clone(), nnf(this, strategy))
        }
        Expression::Forall(variable, this) => {
            Expression::forall(variable.clone(), nnf(this, strategy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, syntax::Condition, transform::Converter};

    fn nnf(source: &str) -> Expression {
        nnf_with(source, NotAndStrategy::Simple)
    }

    fn nnf_with(source: &str, strategy: NotAndStrategy) -> Expression {
        let condition: Condition = source.parse().unwrap();
        let (expression, _) = Converter::new().convert(&condition).unwrap();
        expression.nnf_with(strategy)
    }

    #[test]
    fn test_nnf() {
        assert_debug_string!("P1", nnf("('A')"));
        assert_debug_string!("~P1", nnf("NOT { ('A') }"));
        assert_debug_string!("P1 & P2", nnf("AND { ('A'), ('B') }"));
        assert_debug_string!("P1 | P2", nnf("OR { ('A'), ('B') }"));
        assert_debug_string!("? x. F1(x)", nnf("EXISTS ('d') { ('A') }"));
        assert_debug_string!("! x. ~F1(x)", nnf("FORALL ('d') { NOT { ('A') } }"));
    }

    #[test]
    fn test_double_negation() {
        assert_debug_string!("P1", nnf("NOT { NOT { ('A') } }"));
        assert_debug_string!("~P1", nnf("NOT { NOT { NOT { ('A') } } }"));
        assert_debug_string!("P1", nnf("NOT { NOT { NOT { NOT { ('A') } } } }"));
        assert_debug_string!(
            "P1 & P2",
            nnf("AND { NOT { NOT { ('A') } }, NOT { NOT { ('B') } } }")
        );
    }

    #[test]
    fn test_de_morgan() {
        assert_debug_string!("~P1 & ~P2", nnf("NOT { OR { ('A'), ('B') } }"));
        assert_debug_string!("~P1 | ~P2", nnf("NOT { AND { ('A'), ('B') } }"));
        assert_debug_string!(
            "~P1 & P2",
            nnf("NOT { OR { ('A'), NOT { ('B') } } }")
        );
        assert_debug_string!(
            "(~P1 | ~P2) | ~P3",
            nnf("NOT { AND { ('A'), ('B'), ('C') } }")
        );
        assert_debug_string!(
            "P1 & (~P2 & P3)",
            nnf("AND { ('A'), NOT { OR { ('B'), NOT { ('C') } } } }")
        );
    }

    #[test]
    fn test_quantifier_negation() {
        assert_debug_string!("! x. ~F1(x)", nnf("NOT { EXISTS ('d') { ('A') } }"));
        assert_debug_string!("? x. ~F1(x)", nnf("NOT { FORALL ('d') { ('A') } }"));
        assert_debug_string!(
            "! x. (~F1(x) & ~F2(x))",
            nnf("NOT { EXISTS ('d') { OR { ('A'), ('B') } } }")
        );
        assert_debug_string!(
            "? x. (! y. F1(y))",
            nnf("NOT { FORALL ('d') { EXISTS ('e') { NOT { ('A') } } } }")
        );
    }

    #[test]
    fn test_expanded_strategy() {
        assert_debug_string!(
            "(~P1 & P2) | (P1 & ~P2)",
            nnf_with("NOT { AND { ('A'), ('B') } }", NotAndStrategy::Expanded)
        );
        assert_debug_string!(
            "(~P1 & ~P2) | (P1 & P2)",
            nnf_with(
                "NOT { AND { ('A'), NOT { ('B') } } }",
                NotAndStrategy::Expanded
            )
        );
        // the unnegated conjuncts are normalized too
        assert_debug_string!(
            "(~P1 & (~P2 & ~P3)) | (P1 & (P2 | P3))",
            nnf_with(
                "NOT { AND { ('A'), NOT { OR { ('B'), ('C') } } } }",
                NotAndStrategy::Expanded
            )
        );
        assert_debug_string!(
            "~P1 & ~P2",
            nnf_with("NOT { OR { ('A'), ('B') } }", NotAndStrategy::Expanded)
        );
    }

    #[test]
    fn test_idempotent() {
        let sources = [
            "NOT { AND { ('A'), OR { ('B'), NOT { ('C') } } } }",
            "NOT { FORALL ('d') { AND { ('A'), NOT { EXISTS ('e') { ('B') } } } } }",
            "AND { NOT { NOT { ('A') } }, OR { ('B'), NOT { AND { ('C'), ('D') } } } }",
        ];
        for source in sources.iter() {
            for strategy in [NotAndStrategy::Simple, NotAndStrategy::Expanded].iter() {
                let once = nnf_with(source, *strategy);
                assert!(once.is_nnf());
                assert_eq!(once, once.nnf_with(*strategy));
            }
        }
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(Ok(NotAndStrategy::Simple), "simple".parse());
        assert_eq!(Ok(NotAndStrategy::Expanded), "Expanded".parse());
        assert!("both".parse::<NotAndStrategy>().is_err());
        assert_eq!("expanded", NotAndStrategy::Expanded.to_string());
        assert_eq!(NotAndStrategy::Simple, NotAndStrategy::default());
    }
}

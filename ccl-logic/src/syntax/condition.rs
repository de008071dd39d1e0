/*! Defines [`Condition`], the parse tree of a CCL checker condition.

[`Condition`]: crate::syntax::Condition
*/
use super::layout;
use std::fmt;

/// Represents a checker condition exactly as it is written in CCL.
///
/// **Note**: descriptions are stored without their enclosing single quotes.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Condition {
    /// Is an atomic condition `('description')`.
    Atomic(String),

    /// Is a conjunction `AND { c1, ..., cn }` of at least one condition.
    And(Vec<Condition>),

    /// Is a disjunction `OR { c1, ..., cn }` of at least one condition.
    Or(Vec<Condition>),

    /// Is a negation `NOT { c }`.
    Not(Box<Condition>),

    /// Is an existential condition `EXISTS ('domain') { c }` over the described domain.
    Exists(String, Box<Condition>),

    /// Is a universal condition `FORALL ('domain') { c }` over the described domain.
    Forall(String, Box<Condition>),

    /// Is a parenthesized condition `( c )`.
    Group(Box<Condition>),
}

impl Condition {
    /// Returns an atomic condition with the given description.
    pub fn atomic<S: Into<String>>(description: S) -> Self {
        Self::Atomic(description.into())
    }

    /// Returns the negation of `condition`.
    pub fn not(condition: Self) -> Self {
        Self::Not(Box::new(condition))
    }

    /// Returns `condition` existentially quantified over `domain`.
    pub fn exists<S: Into<String>>(domain: S, condition: Self) -> Self {
        Self::Exists(domain.into(), Box::new(condition))
    }

    /// Returns `condition` universally quantified over `domain`.
    pub fn forall<S: Into<String>>(domain: S, condition: Self) -> Self {
        Self::Forall(domain.into(), Box::new(condition))
    }

    /// Returns `condition` wrapped in parentheses.
    pub fn group(condition: Self) -> Self {
        Self::Group(Box::new(condition))
    }

    fn render(&self, indent: usize) -> String {
        match self {
            Self::Atomic(description) => layout::atomic(description),
            Self::And(items) => layout::list("AND", Self::render_all(items, indent), indent),
            Self::Or(items) => layout::list("OR", Self::render_all(items, indent), indent),
            Self::Not(this) => match this.as_ref() {
                Self::Atomic(_) => layout::negation(this.render(indent), true, indent),
                _ => layout::negation(this.render(indent + 1), false, indent),
            },
            Self::Exists(domain, this) => {
                layout::quantifier("EXISTS", domain, this.render(indent + 1), indent)
            }
            Self::Forall(domain, this) => {
                layout::quantifier("FORALL", domain, this.render(indent + 1), indent)
            }
            Self::Group(this) => format!("({})", this.render(indent)),
        }
    }

    fn render_all(items: &[Self], indent: usize) -> Vec<String> {
        items.iter().map(|item| item.render(indent + 1)).collect()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

/*! Defines [`Expression`], the logical form of a checker condition.

[`Expression`]: crate::syntax::Expression
*/
use super::{Pred, Prop, Var};
use std::fmt;

/// Is an abstract syntax tree (AST) for the logical form of a CCL condition.
///
/// Conjunctions and disjunctions are strictly binary. An expression is never modified in
/// place: every transformation returns a new tree.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Is a nullary proposition.
    Atom(Prop),

    /// Is a unary predicate applied to the variable of the enclosing quantifier.
    App(Pred, Var),

    /// Is the negation of an expression.
    Not(Box<Expression>),

    /// Is the conjunction of two expressions.
    And(Box<Expression>, Box<Expression>),

    /// Is the disjunction of two expressions.
    Or(Box<Expression>, Box<Expression>),

    /// Is an existentially quantified expression.
    Exists(Var, Box<Expression>),

    /// Is a universally quantified expression.
    Forall(Var, Box<Expression>),
}

impl Expression {
    /// Returns a proposition for `symbol`.
    pub fn atom<P: Into<Prop>>(symbol: P) -> Self {
        Self::Atom(symbol.into())
    }

    /// Returns the application of `predicate` to `variable`.
    pub fn app<P: Into<Pred>, V: Into<Var>>(predicate: P, variable: V) -> Self {
        Self::App(predicate.into(), variable.into())
    }

    /// Returns the negation of `expression`.
    pub fn not(expression: Self) -> Self {
        Self::Not(Box::new(expression))
    }

    /// Returns the conjunction of the receiver and `expression`.
    pub fn and(self, expression: Self) -> Self {
        Self::And(Box::new(self), Box::new(expression))
    }

    /// Returns the disjunction of the receiver and `expression`.
    pub fn or(self, expression: Self) -> Self {
        Self::Or(Box::new(self), Box::new(expression))
    }

    /// Returns `expression` existentially quantified over `variable`.
    pub fn exists(variable: Var, expression: Self) -> Self {
        Self::Exists(variable, Box::new(expression))
    }

    /// Returns `expression` universally quantified over `variable`.
    pub fn forall(variable: Var, expression: Self) -> Self {
        Self::Forall(variable, Box::new(expression))
    }

    /// Returns true if the receiver is a proposition, an application or the negation of
    /// either.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Atom(_) | Self::App(..) => true,
            Self::Not(this) => matches!(this.as_ref(), Self::Atom(_) | Self::App(..)),
            _ => false,
        }
    }

    /// Returns true if negation is applied only to propositions and applications.
    pub fn is_nnf(&self) -> bool {
        match self {
            Self::Atom(_) | Self::App(..) => true,
            Self::Not(_) => self.is_literal(),
            Self::And(left, right) | Self::Or(left, right) => left.is_nnf() && right.is_nnf(),
            Self::Exists(_, this) | Self::Forall(_, this) => this.is_nnf(),
        }
    }

    /// Returns true if the receiver has no disjunction, including under quantifiers.
    pub fn is_or_free(&self) -> bool {
        match self {
            Self::Atom(_) | Self::App(..) => true,
            Self::Not(this) => this.is_or_free(),
            Self::And(left, right) => left.is_or_free() && right.is_or_free(),
            Self::Or(..) => false,
            Self::Exists(_, this) | Self::Forall(_, this) => this.is_or_free(),
        }
    }

    fn write(&self, notation: &Notation, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Atom(symbol) => write!(f, "{}", symbol),
            Self::App(predicate, variable) => write!(f, "{}({})", predicate, variable),
            Self::Not(this) => {
                write!(f, "{}", notation.not)?;
                this.write_operand(notation, f)
            }
            Self::And(left, right) => {
                left.write_operand(notation, f)?;
                write!(f, " {} ", notation.and)?;
                right.write_operand(notation, f)
            }
            Self::Or(left, right) => {
                left.write_operand(notation, f)?;
                write!(f, " {} ", notation.or)?;
                right.write_operand(notation, f)
            }
            Self::Exists(variable, this) => {
                write!(f, "{} {}. ", notation.exists, variable)?;
                this.write_operand(notation, f)
            }
            Self::Forall(variable, this) => {
                write!(f, "{} {}. ", notation.forall, variable)?;
                this.write_operand(notation, f)
            }
        }
    }

    fn write_operand(&self, notation: &Notation, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Atom(_) | Self::App(..) | Self::Not(_) => self.write(notation, f),
            _ => {
                write!(f, "(")?;
                self.write(notation, f)?;
                write!(f, ")")
            }
        }
    }
}

struct Notation {
    not: &'static str,
    and: &'static str,
    or: &'static str,
    exists: &'static str,
    forall: &'static str,
}

const UNICODE: Notation = Notation {
    not: "¬",
    and: "∧",
    or: "∨",
    exists: "∃",
    forall: "∀",
};

const ASCII: Notation = Notation {
    not: "~",
    and: "&",
    or: "|",
    exists: "?",
    forall: "!",
};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write(&UNICODE, f)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write(&ASCII, f)
    }
}

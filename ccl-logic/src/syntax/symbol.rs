/*! Defines the symbols ['Prop'], ['Pred'] and ['Var'] that stand for the descriptions of a
condition inside an [`Expression`].

['Prop']: crate::syntax::Prop
['Pred']: crate::syntax::Pred
['Var']: crate::syntax::Var
[`Expression`]: crate::syntax::Expression
*/
use std::fmt;

/// Represents a nullary proposition symbol, standing for a description outside of any
/// quantifier.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prop(pub String);

impl<S: Into<String>> From<S> for Prop {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a unary predicate symbol, standing for a description inside a quantifier.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pred(pub String);

impl<S: Into<String>> From<S> for Pred {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a variable bound by a quantifier.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Var(pub String);

impl<S: Into<String>> From<S> for Var {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/*! Implements the transformations that decompose a checker condition into OR-free fragments:
conversion to an [`Expression`], negation normal form, distribution of conjunction over
disjunction, splitting by disjunction and reconstruction of CCL text.

[`Expression`]: crate::syntax::Expression
*/
mod convert;
mod distribute;
mod nnf;
mod reconstruct;
mod split;

pub use convert::{Converter, DEFAULT_MAX_DEPTH, VARIABLE_POOL};
pub use distribute::Distribute;
pub use nnf::{NotAndStrategy, ToNnf};
pub use reconstruct::ToDsl;
pub use split::Split;

use thiserror::Error;

/// Is the type of errors arising when converting a condition to an expression.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a condition is nested deeper than the converter's limit.
    #[error("condition is nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// Is returned when a hand-built `AND` or `OR` has no conditions.
    #[error("`{connective}` must have at least one condition")]
    EmptyConnective { connective: &'static str },
}

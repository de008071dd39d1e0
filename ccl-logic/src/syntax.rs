/*! Defines the parse tree of CCL conditions and the logical expressions they are converted to. */

mod condition;
mod expression;
pub(crate) mod layout;
mod symbol;
mod table;

pub use condition::Condition;
pub use expression::Expression;
pub use symbol::{Pred, Prop, Var};
pub use table::SymbolTable;

/*! Provides a parser for CodeCheck checker conditions (CCL) and the transformations that
decompose a condition into OR-free fragments, each an independently testable scenario.

A condition is converted to a propositional/first-order [`Expression`] over generated
symbols, pushed into negation normal form, distributed, split by disjunction and finally
rendered back to CCL text through the [`SymbolTable`] of the conversion.

**Example**:
```rust
use ccl_logic::decompose;

let fragments = decompose("AND { ('A'), OR { ('B'), ('C') } }").unwrap();

assert_eq!(vec![
    "AND {\n  ('A'),\n  ('B')\n}",
    "AND {\n  ('A'),\n  ('C')\n}",
], fragments);
```

[`Expression`]: crate::syntax::Expression
[`SymbolTable`]: crate::syntax::SymbolTable
*/
#[macro_use]
extern crate lalrpop_util;
#[macro_use]
extern crate tracing;

mod decompose;
pub mod parser;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
#[cfg(test)]
mod test_prelude;
pub mod trace;
pub mod transform;

pub use decompose::{decompose, decompose_with, inspect, Decomposition, Error, Options};

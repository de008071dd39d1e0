/*! Defines [`SymbolTable`], the mapping between generated symbols and the descriptions
they stand for.

[`SymbolTable`]: crate::syntax::SymbolTable
*/
use super::Var;
use serde_derive::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Maps descriptions to the proposition and predicate symbols generated for them and maps
/// every symbol (and every bound variable) back to its description.
///
/// A table is filled by a single conversion and is never shared between conversions.
/// It serializes as the symbol-to-description map.
#[derive(Clone, PartialEq, Default, Debug, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    #[serde(skip)]
    desc_to_symbol: HashMap<String, String>,
    symbol_to_desc: BTreeMap<String, String>,
}

impl SymbolTable {
    /// Returns the symbol assigned to `description`, if any.
    pub fn symbol_for(&self, description: &str) -> Option<&str> {
        self.desc_to_symbol.get(description).map(String::as_str)
    }

    /// Returns the description of a proposition, predicate or variable symbol.
    ///
    /// **Example**:
    /// ```rust
    /// use ccl_logic::syntax::Condition;
    /// use ccl_logic::transform::Converter;
    ///
    /// let condition: Condition = "EXISTS ('field') { ('The field is private') }".parse().unwrap();
    /// let (_, table) = Converter::new().convert(&condition).unwrap();
    ///
    /// assert_eq!(Some("field"), table.description("x"));
    /// assert_eq!(Some("The field is private"), table.description("F1"));
    /// assert_eq!(None, table.description("P1"));
    /// ```
    pub fn description(&self, symbol: &str) -> Option<&str> {
        self.symbol_to_desc.get(symbol).map(String::as_str)
    }

    /// Returns an iterator over `(symbol, description)` pairs, ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.symbol_to_desc
            .iter()
            .map(|(symbol, desc)| (symbol.as_str(), desc.as_str()))
    }

    /// Returns the number of symbols and variables in the table.
    pub fn len(&self) -> usize {
        self.symbol_to_desc.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.symbol_to_desc.is_empty()
    }

    pub(crate) fn assign(&mut self, description: &str, symbol: &str) {
        self.desc_to_symbol
            .insert(description.to_owned(), symbol.to_owned());
        self.symbol_to_desc
            .insert(symbol.to_owned(), description.to_owned());
    }

    pub(crate) fn bind(&mut self, variable: &Var, domain: &str) {
        self.symbol_to_desc
            .insert(variable.0.clone(), domain.to_owned());
    }
}

/*! Implements the conversion of a [`Condition`] to an [`Expression`] and its [`SymbolTable`].

[`Condition`]: crate::syntax::Condition
[`Expression`]: crate::syntax::Expression
[`SymbolTable`]: crate::syntax::SymbolTable
*/
use super::Error;
use crate::syntax::{Condition, Expression, SymbolTable, Var};

/// Is the default bound on the nesting depth of a converted condition.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Is the pool of names for quantified variables, used in order.
pub const VARIABLE_POOL: [&str; 10] = ["x", "y", "z", "u", "v", "w", "a", "b", "c", "d"];

/// Converts a [`Condition`] to an [`Expression`], assigning symbols to descriptions in the
/// order they are first encountered.
///
/// A description outside of any quantifier becomes a proposition `P<n>`; inside a
/// quantifier it becomes a predicate `F<n>` applied to the variable of the innermost
/// quantifier. A description keeps the symbol it was first assigned, whichever kind it is.
/// Every converter is consumed by a single conversion.
///
/// Quantified variables are taken from [`VARIABLE_POOL`] in order. Rather than cycling back
/// to `x` after `d`, the pool continues with suffixed names (`x1`, `y1`, ... then `x2`, ...),
/// so a later quantifier never overwrites the domain description of an earlier one.
///
/// **Example**:
/// ```rust
/// use ccl_logic::syntax::Condition;
/// use ccl_logic::transform::Converter;
///
/// let condition: Condition = r#"
///     AND {
///         ('The request is not null'),
///         FORALL ('public API method') { ('The method has a "ResponseBody" annotation') }
///     }
/// "#.parse().unwrap();
/// let (expression, table) = Converter::new().convert(&condition).unwrap();
///
/// assert_eq!("P1 ∧ (∀ x. F1(x))", expression.to_string());
/// assert_eq!(Some("public API method"), table.description("x"));
/// ```
///
/// [`Condition`]: crate::syntax::Condition
/// [`Expression`]: crate::syntax::Expression
pub struct Converter {
    table: SymbolTable,
    props: usize,
    preds: usize,
    vars: usize,
    binder: Option<Var>,
    depth: usize,
    max_depth: usize,
}

impl Converter {
    /// Creates a new converter with an empty symbol table.
    pub fn new() -> Self {
        Self {
            table: SymbolTable::default(),
            props: 0,
            preds: 0,
            vars: 0,
            binder: None,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bounds the nesting depth of the conditions the converter accepts.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Converts `condition` to an expression and returns it with the symbol table of the
    /// conversion.
    pub fn convert(mut self, condition: &Condition) -> Result<(Expression, SymbolTable), Error> {
        let expression = self.visit(condition)?;
        Ok((expression, self.table))
    }

    fn visit(&mut self, condition: &Condition) -> Result<Expression, Error> {
        if self.depth >= self.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        self.depth += 1;
        let result = self.visit_condition(condition);
        self.depth -= 1;
        result
    }

    fn visit_condition(&mut self, condition: &Condition) -> Result<Expression, Error> {
        match condition {
            Condition::Atomic(description) => Ok(self.atomic(description)),
            Condition::And(items) => self.fold(items, "AND", Expression::and),
            Condition::Or(items) => self.fold(items, "OR", Expression::or),
            Condition::Not(this) => Ok(Expression::not(self.visit(this)?)),
            Condition::Exists(domain, this) => {
                let (variable, body) = self.quantified(domain, this)?;
                Ok(Expression::exists(variable, body))
            }
            Condition::Forall(domain, this) => {
                let (variable, body) = self.quantified(domain, this)?;
                Ok(Expression::forall(variable, body))
            }
            Condition::Group(this) => self.visit(this),
        }
    }

    fn atomic(&mut self, description: &str) -> Expression {
        match self.binder.clone() {
            Some(variable) => {
                let symbol = self.symbol(description, Kind::Pred);
                Expression::app(symbol, variable)
            }
            None => Expression::atom(self.symbol(description, Kind::Prop)),
        }
    }

    // Folds the list to the left, preserving the order of the items.
    fn fold(
        &mut self,
        items: &[Condition],
        connective: &'static str,
        op: fn(Expression, Expression) -> Expression,
    ) -> Result<Expression, Error> {
        let (first, rest) = items
            .split_first()
            .ok_or(Error::EmptyConnective { connective })?;
        let mut result = self.visit(first)?;
        for item in rest {
            result = op(result, self.visit(item)?);
        }
        Ok(result)
    }

    fn quantified(&mut self, domain: &str, body: &Condition) -> Result<(Var, Expression), Error> {
        let variable = self.fresh_variable();
        self.table.bind(&variable, domain);

        let outer = self.binder.replace(variable.clone());
        let body = self.visit(body);
        self.binder = outer;

        Ok((variable, body?))
    }

    fn symbol(&mut self, description: &str, kind: Kind) -> String {
        if let Some(symbol) = self.table.symbol_for(description) {
            return symbol.to_owned();
        }

        let symbol = match kind {
            Kind::Prop => {
                self.props += 1;
                format!("P{}", self.props)
            }
            Kind::Pred => {
                self.preds += 1;
                format!("F{}", self.preds)
            }
        };
        self.table.assign(description, &symbol);
        symbol
    }

    // Cycles through the pool; names after the first round are suffixed by the round so
    // that every quantifier of a conversion keeps its own domain description.
    fn fresh_variable(&mut self) -> Var {
        let name = VARIABLE_POOL[self.vars % VARIABLE_POOL.len()];
        let round = self.vars / VARIABLE_POOL.len();
        self.vars += 1;

        if round == 0 {
            Var::from(name)
        } else {
            Var::from(format!("{}{}", name, round))
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

enum Kind {
    Prop,
    Pred,
}

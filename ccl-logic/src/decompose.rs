/*! Implements the decomposition of a checker condition into OR-free fragments. */
use crate::{
    parser,
    syntax::{Condition, Expression, SymbolTable},
    trace,
    transform::{self, Converter, Distribute, NotAndStrategy, Split, ToDsl, ToNnf},
};
use thiserror::Error;
use tracing::Level;

/// Is the type of errors arising when decomposing a condition.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when the input is not a syntactically valid condition.
    #[error(transparent)]
    Syntax(#[from] parser::Error),

    /// Is returned when the condition cannot be converted to an expression.
    #[error(transparent)]
    Transform(#[from] transform::Error),
}

/// Configures a decomposition.
#[derive(Clone, PartialEq, Debug)]
pub struct Options {
    /// Is the strategy for pushing negations into conjunctions.
    pub not_and: NotAndStrategy,

    /// Bounds the nesting depth of the input condition. Input whose braces and parentheses
    /// nest deeper is rejected before it is parsed.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            not_and: NotAndStrategy::default(),
            max_depth: transform::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Holds every stage of the decomposition of a single condition.
#[derive(Clone, Debug)]
pub struct Decomposition {
    expression: Expression,
    table: SymbolTable,
    nnf: Expression,
    distributed: Expression,
    fragments: Vec<Expression>,
}

impl Decomposition {
    /// Returns the expression that the condition is converted to.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the symbol table of the conversion.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Returns the negation normal form of the expression.
    pub fn nnf(&self) -> &Expression {
        &self.nnf
    }

    /// Returns the NNF after distributing conjunctions over disjunctions.
    pub fn distributed(&self) -> &Expression {
        &self.distributed
    }

    /// Returns the OR-free fragments, in order.
    pub fn fragments(&self) -> &[Expression] {
        &self.fragments
    }

    /// Renders every fragment as a CCL condition.
    pub fn render(&self) -> Vec<String> {
        self.fragments
            .iter()
            .map(|fragment| fragment.to_dsl(&self.table))
            .collect()
    }

    /// Renders the unsplit expression as a CCL condition.
    pub fn reconstruct(&self) -> String {
        self.expression.to_dsl(&self.table)
    }
}

/// Decomposes the condition in `dsl` into OR-free fragments with the default [`Options`].
///
/// **Example**:
/// ```rust
/// use ccl_logic::decompose;
///
/// let fragments = decompose("FORALL ('class') { OR { ('A'), ('B') } }").unwrap();
///
/// assert_eq!(vec![
///     "FORALL ('class') {\n  ('A')\n}",
///     "FORALL ('class') {\n  ('B')\n}",
/// ], fragments);
/// ```
pub fn decompose(dsl: &str) -> Result<Vec<String>, Error> {
    decompose_with(dsl, &Options::default())
}

/// Decomposes the condition in `dsl` into OR-free fragments, configured by `options`.
///
/// Under either NOT-AND strategy, the disjunction of the fragments is equivalent to the
/// negation normal form produced by that strategy, unless the NNF has a disjunction under a
/// universal quantifier. Only the NNF of [`NotAndStrategy::Simple`] is also equivalent to the
/// condition itself.
pub fn decompose_with(dsl: &str, options: &Options) -> Result<Vec<String>, Error> {
    let span = span!(Level::INFO, trace::DECOMPOSE, strategy = %options.not_and);
    let _enter = span.enter();

    let decomposition = decomposition(dsl, options)?;
    let fragments = decomposition.render();
    fragments.iter().enumerate().for_each(|(index, fragment)| {
        info!(
            event = trace::FRAGMENT,
            index = index as u64,
            fragment = %fragment,
        );
    });
    Ok(fragments)
}

/// Runs every stage of the decomposition of `dsl` and returns them for inspection.
///
/// **Example**:
/// ```rust
/// use ccl_logic::{inspect, Options};
///
/// let decomposition = inspect("NOT { AND { ('A'), ('B') } }", &Options::default()).unwrap();
///
/// assert_eq!("¬(P1 ∧ P2)", decomposition.expression().to_string());
/// assert_eq!("¬P1 ∨ ¬P2", decomposition.nnf().to_string());
/// assert_eq!(2, decomposition.fragments().len());
/// assert_eq!("NOT {\n  AND {\n    ('A'),\n    ('B')\n  }\n}", decomposition.reconstruct());
/// ```
pub fn inspect(dsl: &str, options: &Options) -> Result<Decomposition, Error> {
    let span = span!(Level::INFO, trace::DECOMPOSE, strategy = %options.not_and);
    let _enter = span.enter();

    decomposition(dsl, options)
}

fn decomposition(dsl: &str, options: &Options) -> Result<Decomposition, Error> {
    // dropping a parse tree recurses over its depth, so oversized input never becomes one
    if parser::nesting_depth(dsl) > options.max_depth {
        return Err(transform::Error::NestingTooDeep {
            limit: options.max_depth,
        }
        .into());
    }

    let condition: Condition = dsl.parse()?;
    let (expression, table) = Converter::new()
        .max_depth(options.max_depth)
        .convert(&condition)?;
    info!(event = trace::CONVERT, expression = %expression);

    let nnf = expression.nnf_with(options.not_and);
    info!(event = trace::NNF, expression = %nnf);

    let distributed = nnf.distribute();
    info!(event = trace::DISTRIBUTE, expression = %distributed);

    let fragments = distributed.split();
    info!(event = trace::SPLIT, count = fragments.len() as u64);

    Ok(Decomposition {
        expression,
        table,
        nnf,
        distributed,
        fragments,
    })
}

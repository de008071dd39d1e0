//! Defines the names of the spans, events and fields that the decomposition pipeline emits.
pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// decomposition log record fields:
pub const EVENT_FIELD: &str = "event";
pub const STRATEGY_FIELD: &str = "strategy";
pub const EXPRESSION_FIELD: &str = "expression";
pub const FRAGMENT_FIELD: &str = "fragment";
pub const INDEX_FIELD: &str = "index";
pub const COUNT_FIELD: &str = "count";

// log span types:
/// Inside the decomposition of a single condition.
pub const DECOMPOSE: &str = "@decompose";

// log event types:
/// The condition is converted to an expression.
pub const CONVERT: &str = "@convert";

/// The expression is transformed to negation normal form.
pub const NNF: &str = "@nnf";

/// Conjunctions are distributed over disjunctions.
pub const DISTRIBUTE: &str = "@distribute";

/// The distributed expression is split into fragments.
pub const SPLIT: &str = "@split";

/// A fragment is rendered back to a condition.
pub const FRAGMENT: &str = "@fragment";

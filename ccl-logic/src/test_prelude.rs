use crate::{
    syntax::{Condition, Expression},
    transform::Converter,
};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

pub fn convert(source: &str) -> Expression {
    let condition: Condition = source.parse().unwrap();
    Converter::new().convert(&condition).unwrap().0
}

pub fn disjunction(fragments: &[Expression]) -> Expression {
    let (first, rest) = fragments.split_first().unwrap();
    rest.iter()
        .fold(first.clone(), |result, fragment| result.or(fragment.clone()))
}

// An interpretation of propositions and predicates over the domain `0..size`.
struct Model {
    size: usize,
    props: HashMap<String, bool>,
    preds: HashMap<String, Vec<bool>>,
}

impl Model {
    fn eval(&self, expression: &Expression, env: &mut HashMap<String, usize>) -> bool {
        match expression {
            Expression::Atom(p) => self.props[&p.0],
            Expression::App(f, v) => self.preds[&f.0][env[&v.0]],
            Expression::Not(this) => !self.eval(this, env),
            Expression::And(l, r) => self.eval(l, env) && self.eval(r, env),
            Expression::Or(l, r) => self.eval(l, env) || self.eval(r, env),
            Expression::Exists(v, this) => {
                (0..self.size).any(|e| self.eval_at(v.0.clone(), e, this, env))
            }
            Expression::Forall(v, this) => {
                (0..self.size).all(|e| self.eval_at(v.0.clone(), e, this, env))
            }
        }
    }

    fn eval_at(
        &self,
        variable: String,
        element: usize,
        expression: &Expression,
        env: &mut HashMap<String, usize>,
    ) -> bool {
        let outer = env.insert(variable.clone(), element);
        let result = self.eval(expression, env);
        match outer {
            Some(e) => env.insert(variable, e),
            None => env.remove(&variable),
        };
        result
    }
}

fn symbols(expression: &Expression, props: &mut BTreeSet<String>, preds: &mut BTreeSet<String>) {
    match expression {
        Expression::Atom(p) => {
            props.insert(p.0.clone());
        }
        Expression::App(f, _) => {
            preds.insert(f.0.clone());
        }
        Expression::Not(this) | Expression::Exists(_, this) | Expression::Forall(_, this) => {
            symbols(this, props, preds)
        }
        Expression::And(l, r) | Expression::Or(l, r) => {
            symbols(l, props, preds);
            symbols(r, props, preds);
        }
    }
}

// Enumerates every model over domains of size one and two.
fn models(expressions: &[&Expression]) -> Vec<Model> {
    let mut props = BTreeSet::new();
    let mut preds = BTreeSet::new();
    for expression in expressions {
        symbols(expression, &mut props, &mut preds);
    }

    let mut result = Vec::new();
    for size in 1..=2 {
        let bits = props.len() + preds.len() * size;
        for valuation in (0..bits).map(|_| vec![false, true].into_iter()).multi_cartesian_product() {
            let mut values = valuation.into_iter();
            let props = props
                .iter()
                .map(|p| (p.clone(), values.next().unwrap()))
                .collect();
            let preds = preds
                .iter()
                .map(|f| (f.clone(), values.by_ref().take(size).collect()))
                .collect();
            result.push(Model { size, props, preds });
        }
    }
    result
}

pub fn assert_equivalent(first: &Expression, second: &Expression) {
    for model in models(&[first, second]) {
        assert_eq!(
            model.eval(first, &mut HashMap::new()),
            model.eval(second, &mut HashMap::new()),
            "{:?} is not equivalent to {:?}",
            first,
            second
        );
    }
}

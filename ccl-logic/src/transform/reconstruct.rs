/*! Implements rendering an [`Expression`] back to CCL text through a [`SymbolTable`].

[`Expression`]: crate::syntax::Expression
[`SymbolTable`]: crate::syntax::SymbolTable
*/
use crate::syntax::{layout, Expression, SymbolTable};

/// Is the trait of types that can be rendered as CCL conditions.
pub trait ToDsl {
    /// Renders the receiver as a CCL condition, looking up the descriptions of its symbols
    /// and variables in `table`.
    ///
    /// Chains of the same connective are flattened into a single `AND`/`OR` block. A symbol
    /// missing from `table` is rendered as `'???'`.
    ///
    /// **Example**:
    /// ```rust
    /// use ccl_logic::syntax::Condition;
    /// use ccl_logic::transform::{Converter, ToDsl};
    ///
    /// let condition: Condition = "AND{('A'),AND{('B'),('C')}}".parse().unwrap();
    /// let (expression, table) = Converter::new().convert(&condition).unwrap();
    ///
    /// assert_eq!("AND {\n  ('A'),\n  ('B'),\n  ('C')\n}", expression.to_dsl(&table));
    /// ```
    fn to_dsl(&self, table: &SymbolTable) -> String;
}

impl ToDsl for Expression {
    fn to_dsl(&self, table: &SymbolTable) -> String {
        render(self, table, 0)
    }
}

fn render(expression: &Expression, table: &SymbolTable, indent: usize) -> String {
    match expression {
        Expression::Atom(symbol) => layout::atomic(describe(table, &symbol.0)),
        Expression::App(predicate, _) => layout::atomic(describe(table, &predicate.0)),
        Expression::Not(this) => match this.as_ref() {
            Expression::Atom(_) | Expression::App(..) => {
                layout::negation(render(this, table, indent), true, indent)
            }
            _ => layout::negation(render(this, table, indent + 1), false, indent),
        },
        Expression::And(..) => {
            let mut operands = Vec::new();
            conjuncts(expression, &mut operands);
            layout::list("AND", render_all(&operands, table, indent), indent)
        }
        Expression::Or(..) => {
            let mut operands = Vec::new();
            disjuncts(expression, &mut operands);
            layout::list("OR", render_all(&operands, table, indent), indent)
        }
        Expression::Exists(variable, this) => layout::quantifier(
            "EXISTS",
            describe(table, &variable.0),
            render(this, table, indent + 1),
            indent,
        ),
        Expression::Forall(variable, this) => layout::quantifier(
            "FORALL",
            describe(table, &variable.0),
            render(this, table, indent + 1),
            indent,
        ),
    }
}

fn render_all(operands: &[&Expression], table: &SymbolTable, indent: usize) -> Vec<String> {
    operands
        .iter()
        .map(|operand| render(operand, table, indent + 1))
        .collect()
}

fn describe<'t>(table: &'t SymbolTable, symbol: &str) -> &'t str {
    table.description(symbol).unwrap_or(layout::PLACEHOLDER)
}

fn conjuncts<'e>(expression: &'e Expression, operands: &mut Vec<&'e Expression>) {
    match expression {
        Expression::And(left, right) => {
            conjuncts(left, operands);
            conjuncts(right, operands);
        }
        _ => operands.push(expression),
    }
}

fn disjuncts<'e>(expression: &'e Expression, operands: &mut Vec<&'e Expression>) {
    match expression {
        Expression::Or(left, right) => {
            disjuncts(left, operands);
            disjuncts(right, operands);
        }
        _ => operands.push(expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        syntax::{Condition, Var},
        transform::Converter,
    };

    fn convert(source: &str) -> (Expression, SymbolTable) {
        let condition: Condition = source.parse().unwrap();
        Converter::new().convert(&condition).unwrap()
    }

    fn round_trip(source: &str) -> String {
        let (expression, table) = convert(source);
        expression.to_dsl(&table)
    }

    #[test]
    fn test_atomic() {
        assert_eq!("('A')", round_trip("('A')"));
        assert_eq!(
            r#"('The bean name is "healthCheckController"')"#,
            round_trip(r#"( 'The bean name is "healthCheckController"' )"#)
        );
    }

    #[test]
    fn test_connectives() {
        assert_eq!(
            "AND {\n  ('A'),\n  ('B')\n}",
            round_trip("AND { ('A'), ('B') }")
        );
        assert_eq!(
            "OR {\n  ('A'),\n  ('B'),\n  ('C')\n}",
            round_trip("OR { ('A'), ('B'), ('C') }")
        );
        assert_eq!(
            "AND {\n  ('A'),\n  OR {\n    ('B'),\n    ('C')\n  }\n}",
            round_trip("AND { ('A'), OR { ('B'), ('C') } }")
        );
    }

    #[test]
    fn test_flatten() {
        assert_eq!(
            "OR {\n  ('A'),\n  ('B'),\n  ('C'),\n  ('D')\n}",
            round_trip("OR { OR { ('A'), ('B') }, OR { ('C'), ('D') } }")
        );
        assert_eq!(
            "AND {\n  ('A'),\n  OR {\n    ('B'),\n    ('C')\n  },\n  ('D')\n}",
            round_trip("AND { AND { ('A'), OR { ('B'), ('C') } }, ('D') }")
        );
    }

    #[test]
    fn test_not() {
        assert_eq!("NOT { ('A') }", round_trip("NOT { ('A') }"));
        assert_eq!(
            "NOT {\n  NOT { ('A') }\n}",
            round_trip("NOT { NOT { ('A') } }")
        );
        assert_eq!(
            "NOT {\n  OR {\n    ('A'),\n    NOT { ('B') }\n  }\n}",
            round_trip("NOT { OR { ('A'), NOT { ('B') } } }")
        );
        assert_eq!(
            "EXISTS ('d') {\n  NOT { ('A') }\n}",
            round_trip("EXISTS ('d') { NOT { ('A') } }")
        );
    }

    #[test]
    fn test_quantifiers() {
        assert_eq!(
            "FORALL ('class in the project') {\n  EXISTS ('\"Inject\" annotation') {\n    ('The annotated field is private')\n  }\n}",
            round_trip(
                r#"FORALL ('class in the project') {
                    EXISTS ('"Inject" annotation') { ( 'The annotated field is private' ) }
                }"#
            )
        );
        assert_eq!(
            "AND {\n  FORALL ('method') {\n    ('A')\n  },\n  FORALL ('entity') {\n    ('B')\n  }\n}",
            round_trip("AND { FORALL ('method') { ('A') }, FORALL ('entity') { ('B') } }")
        );
    }

    #[test]
    fn test_groups_vanish() {
        assert_eq!(
            "AND {\n  ('A'),\n  ('B')\n}",
            round_trip("(AND { (('A')), ('B') })")
        );
    }

    #[test]
    fn test_placeholder() {
        let table = SymbolTable::default();
        assert_eq!("('???')", Expression::atom("P1").to_dsl(&table));
        assert_eq!(
            "EXISTS ('???') {\n  NOT { ('???') }\n}",
            Expression::exists(Var::from("x"), Expression::not(Expression::app("F1", "x")))
                .to_dsl(&table)
        );
    }

    #[test]
    fn test_round_trip() {
        let sources = [
            "AND { ('A'), OR { ('B'), AND { ('C'), NOT { ('D') } } } }",
            "FORALL ('class') { EXISTS ('annotation') { ('A') } }",
            "NOT { OR { ('A'), NOT { ('B') } } }",
            r#"AND {
                ('The application context is successfully loaded'),
                FORALL ('controller bean') {
                    OR {
                        ('The bean name is "healthCheckController"'),
                        EXISTS ('method with "RequestMapping" annotation') {
                            AND { ('The method is public'), NOT { ('The method is deprecated') } }
                        }
                    }
                },
                NOT { ('The database connection pool is exhausted') }
            }"#,
        ];
        for source in sources.iter() {
            let (expression, table) = convert(source);
            let (reparsed, reparsed_table) = convert(&expression.to_dsl(&table));
            assert_eq!(expression, reparsed);
            assert_eq!(table, reparsed_table);
        }
    }
}

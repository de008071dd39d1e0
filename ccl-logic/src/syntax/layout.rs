//! Renders the CCL block layout shared by parse trees and reconstructed fragments.
//!
//! Every function receives children that are already rendered at `indent + 1`.

const INDENT: &str = "  ";

pub(crate) const PLACEHOLDER: &str = "???";

pub(crate) fn indentation(indent: usize) -> String {
    INDENT.repeat(indent)
}

pub(crate) fn atomic(description: &str) -> String {
    format!("('{}')", description)
}

pub(crate) fn list(keyword: &str, items: Vec<String>, indent: usize) -> String {
    let child = indentation(indent + 1);
    let body = items
        .iter()
        .map(|item| format!("{}{}", child, item))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{} {{\n{}\n{}}}", keyword, body, indentation(indent))
}

pub(crate) fn negation(inner: String, inline: bool, indent: usize) -> String {
    if inline {
        format!("NOT {{ {} }}", inner)
    } else {
        format!(
            "NOT {{\n{}{}\n{}}}",
            indentation(indent + 1),
            inner,
            indentation(indent)
        )
    }
}

pub(crate) fn quantifier(keyword: &str, domain: &str, inner: String, indent: usize) -> String {
    format!(
        "{} ('{}') {{\n{}{}\n{}}}",
        keyword,
        domain,
        indentation(indent + 1),
        inner,
        indentation(indent)
    )
}

//! Placeholder scanner: collects `$${NAME}` references from a body tree

use std::collections::HashSet;

use crate::parser::ast::{Node, Step};

/// Collect the distinct placeholder names referenced anywhere in `body`.
///
/// Every structural relation is visited: step tokens, loop headers and
/// bodies, conditional headers, bodies, and else branches.
pub fn referenced_factors(body: &[Node]) -> HashSet<String> {
    let mut names = HashSet::new();
    for node in body {
        scan_node(node, &mut names);
    }
    names
}

fn scan_node(node: &Node, names: &mut HashSet<String>) {
    match node {
        Node::Step(step) => scan_step(step, names),
        Node::For(block) => {
            scan_step(&block.header, names);
            for child in &block.body {
                scan_node(child, names);
            }
        }
        Node::If(block) => {
            scan_step(&block.header, names);
            for child in &block.body {
                scan_node(child, names);
            }
            if let Some(orelse) = &block.orelse {
                for child in orelse {
                    scan_node(child, names);
                }
            }
        }
    }
}

fn scan_step(step: &Step, names: &mut HashSet<String>) {
    for token in &step.tokens {
        for name in placeholder_names(&token.text) {
            names.insert(name.to_string());
        }
    }
}

/// Extract every `$${NAME}` occurrence in `text`.
///
/// NAME is any non-empty run of characters other than `{` and `}`.
pub fn placeholder_names(text: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("$${") {
        let after = &rest[start + 3..];
        match after.find(['{', '}']) {
            Some(end) if after.as_bytes()[end] == b'}' && end > 0 => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            // Empty, unterminated, or nested-brace marker: not a placeholder
            _ => rest = after,
        }
    }
    names
}

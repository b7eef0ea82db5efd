//! Tree substitution: clones a template body and rewrites placeholders

use crate::parser::ast::{Node, Step};

use super::combine::Combination;

/// Produce one generated instance from a template body.
///
/// Returns the synthesized case name and an independent deep copy of the
/// body with every `$${NAME}` occurrence in every token replaced by the
/// combination's value for NAME. The input body is never mutated, so
/// sibling instances cannot contaminate each other. `ordinal` is the
/// 1-based position of the combination within the case's full list.
pub fn instantiate(
    body: &[Node],
    combo: &Combination,
    ordinal: usize,
    base_name: &str,
) -> (String, Vec<Node>) {
    let mut copy = body.to_vec();
    for node in &mut copy {
        substitute_node(node, combo);
    }
    (instance_name(combo, ordinal, base_name), copy)
}

/// Synthesize the display name for a generated instance.
///
/// An empty combination leaves the original name unchanged; otherwise the
/// name is `[<ordinal>].<base>-<v1>-...-<vn>`, making every instance
/// traceable to its source case and parameter choice.
pub fn instance_name(combo: &Combination, ordinal: usize, base_name: &str) -> String {
    if combo.is_empty() {
        base_name.to_string()
    } else {
        let values: Vec<&str> = combo.values().collect();
        format!("[{}].{}-{}", ordinal, base_name, values.join("-"))
    }
}

fn substitute_node(node: &mut Node, combo: &Combination) {
    match node {
        Node::Step(step) => substitute_step(step, combo),
        Node::For(block) => {
            substitute_step(&mut block.header, combo);
            for child in &mut block.body {
                substitute_node(child, combo);
            }
        }
        Node::If(block) => {
            substitute_step(&mut block.header, combo);
            for child in &mut block.body {
                substitute_node(child, combo);
            }
            if let Some(orelse) = &mut block.orelse {
                for child in orelse {
                    substitute_node(child, combo);
                }
            }
        }
    }
}

fn substitute_step(step: &mut Step, combo: &Combination) {
    for token in &mut step.tokens {
        for (name, value) in combo.pairs() {
            let marker = format!("$${{{}}}", name);
            if token.text.contains(&marker) {
                token.text = token.text.replace(&marker, value);
            }
        }
    }
}

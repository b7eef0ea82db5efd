//! Serializes a document back to case-definition source text

use crate::config::FormatOptions;
use crate::parser::ast::{CaseSection, Document, FactorSection, Node, Section, Step};

/// Render a document as source text.
///
/// Writing a parsed document and re-parsing the output yields a
/// structurally equal document (token spans aside).
pub fn write_document(doc: &Document, options: &FormatOptions) -> String {
    let mut out = String::new();
    for (i, section) in doc.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match section {
            Section::Factors(decls) => write_factors(&mut out, decls, options),
            Section::Cases(container) => write_cases(&mut out, container, options),
        }
    }
    out
}

fn indent(out: &mut String, options: &FormatOptions, level: usize) {
    for _ in 0..level * options.indent {
        out.push(' ');
    }
}

fn write_factors(out: &mut String, decls: &FactorSection, options: &FormatOptions) {
    out.push_str("factors {\n");
    for entry in &decls.entries {
        indent(out, options, 1);
        out.push_str(&entry.name.node);
        out.push_str(": ");
        out.push_str(&entry.raw_values.node);
        out.push('\n');
    }
    out.push_str("}\n");
}

fn write_cases(out: &mut String, container: &CaseSection, options: &FormatOptions) {
    out.push_str("cases {\n");
    for (i, case) in container.cases.iter().enumerate() {
        if i > 0 && options.blank_line_between_cases {
            out.push('\n');
        }
        indent(out, options, 1);
        out.push_str("case \"");
        out.push_str(&case.name.node);
        out.push_str("\" {\n");
        for node in &case.body {
            write_node(out, node, options, 2);
        }
        indent(out, options, 1);
        out.push_str("}\n");
    }
    out.push_str("}\n");
}

fn write_node(out: &mut String, node: &Node, options: &FormatOptions, level: usize) {
    match node {
        Node::Step(step) => {
            indent(out, options, level);
            out.push_str("do");
            write_tokens(out, step);
            out.push('\n');
        }
        Node::For(block) => {
            indent(out, options, level);
            out.push_str("for");
            write_tokens(out, &block.header);
            out.push_str(" {\n");
            for child in &block.body {
                write_node(out, child, options, level + 1);
            }
            indent(out, options, level);
            out.push_str("}\n");
        }
        Node::If(block) => {
            indent(out, options, level);
            out.push_str("if");
            write_tokens(out, &block.header);
            out.push_str(" {\n");
            for child in &block.body {
                write_node(out, child, options, level + 1);
            }
            indent(out, options, level);
            out.push('}');
            if let Some(orelse) = &block.orelse {
                out.push_str(" else {\n");
                for child in orelse {
                    write_node(out, child, options, level + 1);
                }
                indent(out, options, level);
                out.push('}');
            }
            out.push('\n');
        }
    }
}

fn write_tokens(out: &mut String, step: &Step) {
    for token in &step.tokens {
        out.push(' ');
        out.push('"');
        out.push_str(&token.text);
        out.push('"');
    }
}

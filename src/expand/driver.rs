//! Expansion driver: orchestrates scanning, validation, generation, and
//! substitution per template case

use crate::parser::ast::{Document, Section, Spanned, TestCase};

use super::combine::combinations;
use super::factors::{ExpandError, FactorStore};
use super::scan::referenced_factors;
use super::substitute::instantiate;

/// Expand every template case in `doc` into its generated instances.
///
/// All `factors` sections are collected into one store first, then each
/// `cases` container has its contents replaced by the generated instances:
/// cases stay in original order, each immediately followed by its own
/// instances in combination order. A case referencing an undefined factor
/// fails the whole document before any expanded output is returned.
pub fn expand_document(mut doc: Document) -> Result<Document, ExpandError> {
    let mut store = FactorStore::new();
    for section in &doc.sections {
        if let Section::Factors(decls) = section {
            for entry in &decls.entries {
                store.insert(entry.name.node.clone(), entry.raw_values.node.clone());
            }
        }
    }

    for section in &mut doc.sections {
        if let Section::Cases(container) = section {
            container.cases = expand_cases(&store, &container.cases)?;
        }
    }

    Ok(doc)
}

/// Build the replacement case list for one container
fn expand_cases(store: &FactorStore, cases: &[TestCase]) -> Result<Vec<TestCase>, ExpandError> {
    let mut expanded = Vec::new();
    for case in cases {
        let referenced = referenced_factors(&case.body);
        store.validate(&referenced)?;
        let combos = combinations(store, &referenced)?;
        for (index, combo) in combos.iter().enumerate() {
            let (name, body) = instantiate(&case.body, combo, index + 1, &case.name.node);
            expanded.push(TestCase {
                name: Spanned::new(name, case.name.span.clone()),
                body,
            });
        }
    }
    Ok(expanded)
}

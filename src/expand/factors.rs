//! Factor store: named value lists scanned from `factors` sections

use std::collections::HashSet;

use chumsky::prelude::*;
use thiserror::Error;

/// Errors that can occur while expanding a document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// A case references a placeholder with no matching factor declaration
    #[error("undefined orthogonal factor: $${{{name}}}")]
    UndefinedFactor { name: String },

    /// A referenced factor's value list is not a valid list of quoted strings
    #[error("invalid value list for factor {name}: {message}")]
    BadFactorValues { name: String, message: String },
}

/// One declared factor: a name and the raw text of its value list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    pub name: String,
    pub raw_values: String,
}

/// Mapping from factor name to its raw value-list text.
///
/// Declaration order is preserved and determines combination order.
/// Re-declaring a name overwrites its values in place (last write wins).
#[derive(Debug, Clone, Default)]
pub struct FactorStore {
    entries: Vec<Factor>,
}

impl FactorStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a factor declaration
    pub fn insert(&mut self, name: impl Into<String>, raw_values: impl Into<String>) {
        let name = name.into();
        let raw_values = raw_values.into();
        match self.entries.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.raw_values = raw_values,
            None => self.entries.push(Factor { name, raw_values }),
        }
    }

    /// Check if a factor is declared
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|f| f.name == name)
    }

    /// Entries whose name is in `referenced`, in declaration order
    pub fn select<'a>(
        &'a self,
        referenced: &'a HashSet<String>,
    ) -> impl Iterator<Item = &'a Factor> {
        self.entries
            .iter()
            .filter(move |f| referenced.contains(f.name.as_str()))
    }

    /// Fail if any referenced name has no declaration.
    ///
    /// Missing names are reported alphabetically so the error is stable
    /// regardless of set iteration order.
    pub fn validate(&self, referenced: &HashSet<String>) -> Result<(), ExpandError> {
        let mut missing: Vec<&String> = referenced
            .iter()
            .filter(|name| !self.contains(name))
            .collect();
        missing.sort();
        match missing.first() {
            Some(name) => Err(ExpandError::UndefinedFactor {
                name: (*name).clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Parse a raw value-list literal like `["cat", "dog"]` into its strings.
///
/// Only flat lists of double-quoted strings are accepted; a trailing comma
/// is allowed. The factor name is carried into the error for traceability.
pub fn parse_values(name: &str, raw: &str) -> Result<Vec<String>, ExpandError> {
    values_parser()
        .parse(raw)
        .into_result()
        .map_err(|errs| ExpandError::BadFactorValues {
            name: name.to_string(),
            message: errs
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        })
}

fn values_parser<'a>() -> impl Parser<'a, &'a str, Vec<String>, extra::Err<Rich<'a, char>>> {
    let string = just('"')
        .ignore_then(none_of("\"").repeated().collect::<String>())
        .then_ignore(just('"'))
        .padded();

    string
        .separated_by(just(','))
        .allow_trailing()
        .collect::<Vec<_>>()
        .delimited_by(just('['), just(']').padded())
        .then_ignore(end())
}

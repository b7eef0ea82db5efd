//! Cartesian-product combination generator

use std::collections::HashSet;

use super::factors::{parse_values, ExpandError, FactorStore};

/// One fully-resolved assignment of values to the factors a case references.
///
/// Pairs appear in factor-declaration order; that order also drives the
/// value suffix of synthesized case names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    pairs: Vec<(String, String)>,
}

impl Combination {
    /// True when the case referenced no factors
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The (factor name, value) pairs in generation order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Look up the value chosen for a factor
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The chosen values in generation order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, v)| v.as_str())
    }
}

/// Compute the full Cartesian product over the referenced factors.
///
/// Only factors present in both the store and `referenced` contribute; the
/// driver validates undefined references before calling this. Value lists
/// are parsed here, lazily, so a malformed list only fails once a case
/// actually uses the factor. The last-declared referenced factor varies
/// fastest. An empty referenced set yields a single empty combination,
/// which signals "no substitution needed".
pub fn combinations(
    store: &FactorStore,
    referenced: &HashSet<String>,
) -> Result<Vec<Combination>, ExpandError> {
    let mut pools: Vec<Vec<(String, String)>> = Vec::new();
    for factor in store.select(referenced) {
        let values = parse_values(&factor.name, &factor.raw_values)?;
        pools.push(
            values
                .into_iter()
                .map(|v| (factor.name.clone(), v))
                .collect(),
        );
    }

    let mut result = vec![Combination::default()];
    for pool in &pools {
        let mut next = Vec::with_capacity(result.len() * pool.len());
        for combo in &result {
            for pair in pool {
                let mut pairs = combo.pairs.clone();
                pairs.push(pair.clone());
                next.push(Combination { pairs });
            }
        }
        result = next;
    }
    Ok(result)
}

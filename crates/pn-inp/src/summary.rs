//! Counts over a parse outcome.

use std::collections::BTreeMap;
use std::fmt;

use pn_graph::{Category, Topology};
use serde::Serialize;

use crate::error::ErrorKind;
use crate::output::ParseOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub features: BTreeMap<Category, usize>,
    pub errors: BTreeMap<ErrorKind, usize>,
    /// Connected components over resolved links.
    pub components: usize,
    pub isolated_nodes: Vec<String>,
}

impl Summary {
    pub fn of(outcome: &ParseOutcome) -> Self {
        let features = Category::ALL
            .iter()
            .map(|&c| (c, outcome.graph.count(c)))
            .filter(|&(_, n)| n > 0)
            .collect();

        let mut errors = BTreeMap::new();
        for err in &outcome.errors {
            *errors.entry(err.kind).or_insert(0) += 1;
        }

        let topology = Topology::from_features(&outcome.graph);
        Self {
            features,
            errors,
            components: topology.component_count(),
            isolated_nodes: topology
                .isolated_nodes()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn error_total(&self) -> usize {
        self.errors.values().sum()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Features:")?;
        if self.features.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (category, count) in &self.features {
            writeln!(f, "  {category:<10} {count}")?;
        }
        writeln!(f, "Connected components: {}", self.components)?;
        if !self.isolated_nodes.is_empty() {
            writeln!(f, "Isolated nodes: {}", self.isolated_nodes.join(", "))?;
        }
        write!(f, "Errors: {}", self.error_total())?;
        for kind in ErrorKind::ALL {
            if let Some(count) = self.errors.get(&kind) {
                write!(f, "\n  {kind:?} {count}")?;
            }
        }
        Ok(())
    }
}

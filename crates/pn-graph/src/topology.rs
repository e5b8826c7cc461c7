//! Connectivity view over a feature graph for downstream analysis.
//!
//! Nodes become graph vertices; links whose endpoints both resolve become
//! undirected edges. Links with unresolved endpoints are left out.

use std::collections::HashMap;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::graph::FeatureGraph;

#[derive(Debug, Clone)]
pub struct Topology {
    graph: UnGraph<String, String>,
    index: HashMap<String, NodeIndex>,
    skipped_links: Vec<String>,
}

impl Topology {
    /// Build the connectivity graph from resolved features.
    pub fn from_features(features: &FeatureGraph) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut index = HashMap::new();

        for node in features.nodes() {
            let ix = graph.add_node(node.identifier.clone());
            index.insert(node.identifier.clone(), ix);
        }

        let mut skipped_links = Vec::new();
        for link in features.links() {
            match (index.get(&link.start_node_id), index.get(&link.end_node_id)) {
                (Some(&a), Some(&b)) => {
                    graph.add_edge(a, b, link.identifier.clone());
                }
                _ => skipped_links.push(link.identifier.clone()),
            }
        }

        Self {
            graph,
            index,
            skipped_links,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of connected components (isolated nodes count as one each).
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }

    /// Number of links incident to a node, or `None` for unknown identifiers.
    pub fn degree(&self, identifier: &str) -> Option<usize> {
        let ix = *self.index.get(identifier)?;
        Some(self.graph.edges(ix).count())
    }

    /// Nodes with no incident link, in feature order.
    pub fn isolated_nodes(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&ix| self.graph.neighbors(ix).next().is_none())
            .map(|ix| self.graph[ix].as_str())
            .collect()
    }

    /// Links left out because an endpoint did not resolve.
    pub fn skipped_links(&self) -> &[String] {
        &self.skipped_links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NetworkBuilder;
    use crate::entity::{Junction, LinkKind, NodeKind, Pipe};

    fn build() -> FeatureGraph {
        let mut builder = NetworkBuilder::new();
        for id in ["A", "B", "C", "D"] {
            builder.add_node(id, NodeKind::Junction(Junction::default()), None);
        }
        builder.add_link("P1", "A", "B", LinkKind::Pipe(Pipe::default()), None);
        builder.add_link("P2", "B", "C", LinkKind::Pipe(Pipe::default()), None);
        builder.add_link("P3", "C", "Z", LinkKind::Pipe(Pipe::default()), None);
        builder.build().graph
    }

    #[test]
    fn counts_components_and_isolated_nodes() {
        let topo = Topology::from_features(&build());
        assert_eq!(topo.node_count(), 4);
        assert_eq!(topo.edge_count(), 2);
        assert_eq!(topo.component_count(), 2);
        assert_eq!(topo.isolated_nodes(), vec!["D"]);
        assert_eq!(topo.skipped_links(), ["P3".to_string()]);
    }

    #[test]
    fn degree_by_identifier() {
        let topo = Topology::from_features(&build());
        assert_eq!(topo.degree("B"), Some(2));
        assert_eq!(topo.degree("D"), Some(0));
        assert_eq!(topo.degree("nope"), None);
    }
}

//! Link geometry assembly.

use crate::entity::LinkEntity;
use crate::error::GraphError;
use crate::graph::FeatureGraph;
use crate::table::{LinkTable, NodeTable};

/// Result of assembling a network: always a graph, plus any links whose
/// endpoints could not be resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    pub graph: FeatureGraph,
    pub unresolved: Vec<GraphError>,
}

/// Stitch final link geometry and merge nodes and links into a feature graph.
pub fn assemble(nodes: NodeTable, links: LinkTable) -> Assembly {
    let (links, unresolved) = assemble_links(&nodes, links);
    Assembly {
        graph: FeatureGraph::from_parts(nodes.into_values(), links),
        unresolved,
    }
}

/// For every link in table order, prepend its start node's point and append
/// its end node's point to the intermediate vertices.
///
/// A link with a missing endpoint keeps only its intermediate vertices and
/// yields a `GraphError::UnresolvedEndpoints`.
pub fn assemble_links(nodes: &NodeTable, links: LinkTable) -> (Vec<LinkEntity>, Vec<GraphError>) {
    let mut unresolved = Vec::new();
    let mut assembled = Vec::with_capacity(links.len());

    for (slot, mut link) in links.into_values().into_iter().enumerate() {
        let start = nodes.get(&link.start_node_id).map(|n| n.geometry);
        let end = nodes.get(&link.end_node_id).map(|n| n.geometry);

        match (start, end) {
            (Some(start), Some(end)) => {
                let mut geometry = Vec::with_capacity(link.geometry.len() + 2);
                geometry.push(start);
                geometry.append(&mut link.geometry);
                geometry.push(end);
                link.geometry = geometry;
            }
            _ => {
                let mut missing = Vec::new();
                if start.is_none() {
                    missing.push(link.start_node_id.clone());
                }
                if end.is_none() && link.end_node_id != link.start_node_id {
                    missing.push(link.end_node_id.clone());
                }
                unresolved.push(GraphError::UnresolvedEndpoints {
                    link: link.identifier.clone(),
                    slot,
                    missing,
                });
            }
        }
        assembled.push(link);
    }

    (assembled, unresolved)
}

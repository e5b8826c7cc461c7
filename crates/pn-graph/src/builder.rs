//! Incremental network builder.

use pn_core::{Point, SeqCounter};

use crate::assemble::{self, Assembly};
use crate::entity::{LinkEntity, LinkKind, NodeEntity, NodeKind};
use crate::error::GraphError;
use crate::table::{Inserted, LinkTable, NodeTable};

/// Builder for constructing a network incrementally.
///
/// Use `add_node` and `add_link` to record entities, `place_node` and
/// `push_vertex` to attach geometry, then call `build()` to stitch link
/// geometry and freeze everything into a `FeatureGraph`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: NodeTable,
    links: LinkTable,
    node_seq: SeqCounter,
    link_seq: SeqCounter,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node. Every call consumes a fresh sequence ID, including one
    /// that overwrites an existing identifier.
    pub fn add_node(
        &mut self,
        identifier: impl Into<String>,
        kind: NodeKind,
        comment: Option<String>,
    ) -> Inserted<NodeEntity> {
        let sequence_id = self.node_seq.next_id();
        self.nodes.insert(NodeEntity {
            sequence_id,
            identifier: identifier.into(),
            geometry: Point::ORIGIN,
            comment,
            kind,
        })
    }

    /// Record a link between two node identifiers. Endpoints are resolved
    /// only at `build()`.
    pub fn add_link(
        &mut self,
        identifier: impl Into<String>,
        start_node_id: impl Into<String>,
        end_node_id: impl Into<String>,
        kind: LinkKind,
        comment: Option<String>,
    ) -> Inserted<LinkEntity> {
        let sequence_id = self.link_seq.next_id();
        self.links.insert(LinkEntity {
            sequence_id,
            identifier: identifier.into(),
            start_node_id: start_node_id.into(),
            end_node_id: end_node_id.into(),
            geometry: Vec::new(),
            comment,
            kind,
        })
    }

    /// Set a node's coordinates.
    pub fn place_node(&mut self, identifier: &str, point: Point) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(identifier)
            .ok_or_else(|| GraphError::UnknownNode {
                node: identifier.to_string(),
            })?;
        node.geometry = point;
        Ok(())
    }

    /// Append an intermediate vertex to a link.
    pub fn push_vertex(&mut self, identifier: &str, point: Point) -> Result<(), GraphError> {
        let link = self
            .links
            .get_mut(identifier)
            .ok_or_else(|| GraphError::UnknownLink {
                link: identifier.to_string(),
            })?;
        link.geometry.push(point);
        Ok(())
    }

    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    pub fn links(&self) -> &LinkTable {
        &self.links
    }

    /// Resolve link endpoints and produce the feature graph.
    ///
    /// Never fails: links with missing endpoints are kept with their raw
    /// vertices and reported in `Assembly::unresolved`.
    pub fn build(self) -> Assembly {
        assemble::assemble(self.nodes, self.links)
    }
}

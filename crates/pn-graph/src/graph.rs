//! The output feature graph.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::entity::{Category, LinkEntity, NodeEntity};

/// One element of the feature graph, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Feature {
    Node(NodeEntity),
    Link(LinkEntity),
}

impl Feature {
    pub fn identifier(&self) -> &str {
        match self {
            Feature::Node(node) => &node.identifier,
            Feature::Link(link) => &link.identifier,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Feature::Node(node) => node.category(),
            Feature::Link(link) => link.category(),
        }
    }

    pub fn as_node(&self) -> Option<&NodeEntity> {
        match self {
            Feature::Node(node) => Some(node),
            Feature::Link(_) => None,
        }
    }

    pub fn as_link(&self) -> Option<&LinkEntity> {
        match self {
            Feature::Link(link) => Some(link),
            Feature::Node(_) => None,
        }
    }
}

/// Typed, geometrically-resolved network elements.
///
/// Node features come first (node-table order), then link features
/// (link-table order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureGraph {
    pub(crate) features: Vec<Feature>,
    pub(crate) node_count: usize,
}

impl FeatureGraph {
    /// Combine nodes and assembled links into one ordered collection.
    pub fn from_parts(nodes: Vec<NodeEntity>, links: Vec<LinkEntity>) -> Self {
        let node_count = nodes.len();
        let mut features = Vec::with_capacity(nodes.len() + links.len());
        features.extend(nodes.into_iter().map(Feature::Node));
        features.extend(links.into_iter().map(Feature::Link));
        Self {
            features,
            node_count,
        }
    }

    /// Return all features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate over node features in order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeEntity> {
        self.features[..self.node_count]
            .iter()
            .filter_map(Feature::as_node)
    }

    /// Iterate over link features in order.
    pub fn links(&self) -> impl Iterator<Item = &LinkEntity> {
        self.features[self.node_count..]
            .iter()
            .filter_map(Feature::as_link)
    }

    /// Find a node by its user-supplied identifier.
    pub fn node(&self, identifier: &str) -> Option<&NodeEntity> {
        self.nodes().find(|n| n.identifier == identifier)
    }

    /// Find a link by its user-supplied identifier.
    pub fn link(&self, identifier: &str) -> Option<&LinkEntity> {
        self.links().find(|l| l.identifier == identifier)
    }

    /// Number of features of a given category.
    pub fn count(&self, category: Category) -> usize {
        self.features
            .iter()
            .filter(|f| f.category() == category)
            .count()
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }
}

/// Serialized as a GeoJSON-style `FeatureCollection`.
impl Serialize for FeatureGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "FeatureCollection")?;
        map.serialize_entry("features", &self.features)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Junction, LinkKind, NodeKind, Pipe};
    use pn_core::{Id, Point};

    fn junction(index: u32, name: &str) -> NodeEntity {
        NodeEntity {
            sequence_id: Id::from_index(index),
            identifier: name.into(),
            geometry: Point::new(1.0, 2.0),
            comment: None,
            kind: NodeKind::Junction(Junction {
                elevation: 10.0,
                ..Junction::default()
            }),
        }
    }

    fn pipe(name: &str, from: &str, to: &str) -> LinkEntity {
        LinkEntity {
            sequence_id: Id::from_index(0),
            identifier: name.into(),
            start_node_id: from.into(),
            end_node_id: to.into(),
            geometry: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            comment: Some("main".into()),
            kind: LinkKind::Pipe(Pipe::default()),
        }
    }

    #[test]
    fn nodes_precede_links() {
        let graph = FeatureGraph::from_parts(
            vec![junction(0, "J1"), junction(1, "J2")],
            vec![pipe("P1", "J1", "J2")],
        );
        let kinds: Vec<_> = graph.features().iter().map(Feature::category).collect();
        assert_eq!(
            kinds,
            vec![Category::Junction, Category::Junction, Category::Pipe]
        );
        assert_eq!(graph.nodes().count(), 2);
        assert_eq!(graph.links().count(), 1);
        assert!(graph.node("J2").is_some());
        assert!(graph.link("J2").is_none());
    }

    #[test]
    fn serializes_geojson_shape() {
        let graph = FeatureGraph::from_parts(vec![junction(0, "J1")], vec![pipe("P1", "J1", "J1")]);
        let value = serde_json::to_value(&graph).unwrap();

        assert_eq!(value["type"], "FeatureCollection");
        let node = &value["features"][0];
        assert_eq!(node["kind"], "Node");
        assert_eq!(node["category"], "Junction");
        assert_eq!(node["sequence_id"], 0);
        assert_eq!(node["elevation"], 10.0);
        assert_eq!(node["geometry"]["type"], "Point");
        assert_eq!(node["geometry"]["coordinates"], serde_json::json!([1.0, 2.0]));
        assert!(node.get("comment").is_none());

        let link = &value["features"][1];
        assert_eq!(link["kind"], "Link");
        assert_eq!(link["category"], "Pipe");
        assert_eq!(link["comment"], "main");
        assert_eq!(link["geometry"]["type"], "LineString");
        assert_eq!(
            link["geometry"]["coordinates"],
            serde_json::json!([[1.0, 2.0], [3.0, 4.0]])
        );
    }
}

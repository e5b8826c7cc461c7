//! Network element schema: node and link entities.

use pn_core::geometry::{serialize_line_geometry, serialize_point_geometry};
use pn_core::{LinkSeq, NodeSeq, Point};
use serde::Serialize;

/// Feature sub-discriminant shared by nodes and links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Junction,
    Tank,
    Reservoir,
    Pipe,
    Valve,
    Pump,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Junction,
        Category::Tank,
        Category::Reservoir,
        Category::Pipe,
        Category::Valve,
        Category::Pump,
    ];

    pub fn is_node(self) -> bool {
        matches!(
            self,
            Category::Junction | Category::Tank | Category::Reservoir
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Junction => "Junction",
            Category::Tank => "Tank",
            Category::Reservoir => "Reservoir",
            Category::Pipe => "Pipe",
            Category::Valve => "Valve",
            Category::Pump => "Pump",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-like network element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeEntity {
    pub sequence_id: NodeSeq,
    pub identifier: String,
    /// `(0, 0)` until a coordinate record places the node.
    #[serde(serialize_with = "serialize_point_geometry")]
    pub geometry: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl NodeEntity {
    pub fn category(&self) -> Category {
        match self.kind {
            NodeKind::Junction(_) => Category::Junction,
            NodeKind::Tank(_) => Category::Tank,
            NodeKind::Reservoir(_) => Category::Reservoir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category")]
pub enum NodeKind {
    Junction(Junction),
    Tank(Tank),
    Reservoir(Reservoir),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Junction {
    pub elevation: f64,
    pub demand: Option<f64>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Tank {
    pub elevation: f64,
    pub init_level: f64,
    pub min_level: f64,
    pub max_level: f64,
    pub diameter: f64,
    pub min_volume: f64,
    /// Empty when the record names no volume curve.
    pub volume_curve_id: String,
    pub overflow: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Reservoir {
    pub head: f64,
    pub pattern: Option<String>,
}

/// An edge-like network element connecting two nodes by identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkEntity {
    pub sequence_id: LinkSeq,
    pub identifier: String,
    pub start_node_id: String,
    pub end_node_id: String,
    /// Intermediate vertices only until assembly; the full polyline afterwards
    /// when both endpoints resolved.
    #[serde(serialize_with = "serialize_line_geometry")]
    pub geometry: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub kind: LinkKind,
}

impl LinkEntity {
    pub fn category(&self) -> Category {
        match self.kind {
            LinkKind::Pipe(_) => Category::Pipe,
            LinkKind::Valve(_) => Category::Valve,
            LinkKind::Pump(_) => Category::Pump,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category")]
pub enum LinkKind {
    Pipe(Pipe),
    Valve(Valve),
    Pump(Pump),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PipeStatus {
    Open,
    Closed,
    CheckValve,
}

impl PipeStatus {
    /// Match a status column token (case-insensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "OPEN" => Some(PipeStatus::Open),
            "CLOSED" => Some(PipeStatus::Closed),
            "CV" => Some(PipeStatus::CheckValve),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Pipe {
    pub length: f64,
    pub diameter: f64,
    pub roughness: f64,
    pub minor_loss: f64,
    pub status: Option<PipeStatus>,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ValveType {
    /// Pressure reducing.
    #[default]
    PRV,
    /// Pressure sustaining.
    PSV,
    /// Pressure breaker.
    PBV,
    /// Flow control.
    FCV,
    /// Throttle control.
    TCV,
    /// General purpose (head-loss curve).
    GPV,
}

impl ValveType {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "PRV" => Some(ValveType::PRV),
            "PSV" => Some(ValveType::PSV),
            "PBV" => Some(ValveType::PBV),
            "FCV" => Some(ValveType::FCV),
            "TCV" => Some(ValveType::TCV),
            "GPV" => Some(ValveType::GPV),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Valve {
    pub diameter: f64,
    pub valve_type: ValveType,
    pub setting: f64,
    pub minor_loss: f64,
    /// GPV valves name a head-loss curve in the setting column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_curve: Option<String>,
}

/// How a pump's energy input is described. POWER takes precedence over HEAD.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode")]
pub enum PumpMode {
    Power { power: f64 },
    Head { curve_reference: String },
}

impl Default for PumpMode {
    fn default() -> Self {
        PumpMode::Power { power: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Pump {
    #[serde(flatten)]
    pub mode: PumpMode,
    pub speed: Option<f64>,
    pub pattern_id: Option<String>,
    /// Unrecognized `(key, value)` pairs, verbatim and in file order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_parameters: Vec<(String, String)>,
}

//! pn-graph: network element model for pipenet.
//!
//! Provides:
//! - Node and link entity schema (junctions, tanks, reservoirs; pipes, valves, pumps)
//! - Identifier-keyed entity tables
//! - Incremental network builder with geometry assembly
//! - Connectivity view for downstream analysis
//!
//! # Example
//!
//! ```
//! use pn_core::Point;
//! use pn_graph::{Junction, LinkKind, NetworkBuilder, NodeKind, Pipe};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_node("J1", NodeKind::Junction(Junction::default()), None);
//! builder.add_node("J2", NodeKind::Junction(Junction::default()), None);
//! builder.add_link("P1", "J1", "J2", LinkKind::Pipe(Pipe::default()), None);
//! builder.place_node("J2", Point::new(5.0, 0.0)).unwrap();
//!
//! let assembly = builder.build();
//! assert!(assembly.unresolved.is_empty());
//! assert_eq!(assembly.graph.len(), 3);
//! assert_eq!(assembly.graph.link("P1").unwrap().geometry.len(), 2);
//! ```

pub mod assemble;
pub mod builder;
pub mod entity;
pub mod error;
pub mod graph;
pub mod table;
pub mod topology;

// Re-exports for ergonomics
pub use assemble::{Assembly, assemble, assemble_links};
pub use builder::NetworkBuilder;
pub use entity::{
    Category, Junction, LinkEntity, LinkKind, NodeEntity, NodeKind, Pipe, PipeStatus, Pump,
    PumpMode, Reservoir, Tank, Valve, ValveType,
};
pub use error::GraphError;
pub use graph::{Feature, FeatureGraph};
pub use table::{Inserted, Keyed, LinkTable, NodeTable, Table};
pub use topology::Topology;

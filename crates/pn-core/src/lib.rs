//! pn-core: stable foundation for pipenet.
//!
//! Contains:
//! - ids (compact per-namespace sequence IDs)
//! - geometry (planar points and polylines in native model units)
//! - numeric (Real + finite number parsing)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::PnError;
pub use geometry::Point;
pub use ids::*;
pub use numeric::*;

//! Planar geometry in the model's native (unprojected) coordinate units.

use core::fmt;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Serialized as a `[x, y]` coordinate pair.
#[cfg(feature = "serde")]
impl serde::Serialize for Point {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(self.x, self.y), serializer)
    }
}

/// Borrowed GeoJSON-style geometry, used when emitting features.
#[cfg(feature = "serde")]
#[derive(Debug, serde::Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum GeometryRef<'a> {
    Point(&'a Point),
    LineString(&'a [Point]),
}

#[cfg(feature = "serde")]
pub fn serialize_point_geometry<S: serde::Serializer>(
    point: &Point,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&GeometryRef::Point(point), serializer)
}

#[cfg(feature = "serde")]
pub fn serialize_line_geometry<S: serde::Serializer>(
    points: &[Point],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&GeometryRef::LineString(points), serializer)
}

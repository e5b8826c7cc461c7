//! Section headers and the current-section state.

use pn_graph::Category;

/// Sections with a registered record builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Junctions,
    Reservoirs,
    Tanks,
    Pipes,
    Valves,
    Pumps,
    Coordinates,
    Vertices,
}

impl SectionKind {
    /// Resolve a header such as `[Junctions]`, case-insensitively.
    pub fn from_header(header: &str) -> Option<Self> {
        match header.to_ascii_uppercase().as_str() {
            "[JUNCTIONS]" => Some(SectionKind::Junctions),
            "[RESERVOIRS]" => Some(SectionKind::Reservoirs),
            "[TANKS]" => Some(SectionKind::Tanks),
            "[PIPES]" => Some(SectionKind::Pipes),
            "[VALVES]" => Some(SectionKind::Valves),
            "[PUMPS]" => Some(SectionKind::Pumps),
            "[COORDINATES]" => Some(SectionKind::Coordinates),
            "[VERTICES]" => Some(SectionKind::Vertices),
            _ => None,
        }
    }

    /// Entity category built by this section, if it builds entities.
    pub fn category(self) -> Option<Category> {
        match self {
            SectionKind::Junctions => Some(Category::Junction),
            SectionKind::Reservoirs => Some(Category::Reservoir),
            SectionKind::Tanks => Some(Category::Tank),
            SectionKind::Pipes => Some(Category::Pipe),
            SectionKind::Valves => Some(Category::Valve),
            SectionKind::Pumps => Some(Category::Pump),
            SectionKind::Coordinates | SectionKind::Vertices => None,
        }
    }
}

/// A normalized line is a header when it is wrapped in brackets.
pub fn is_header(content: &str) -> bool {
    content.starts_with('[') && content.ends_with(']')
}

/// The section currently routing data lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Header text exactly as written, empty before the first header.
    pub header: String,
    /// `None` for unrecognized headers and before the first header.
    pub kind: Option<SectionKind>,
}

impl Section {
    pub fn enter(header: &str) -> Self {
        Self {
            header: header.to_string(),
            kind: SectionKind::from_header(header),
        }
    }
}
